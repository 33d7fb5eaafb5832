//----------------------------------------
// runner mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::error::MetaSimErr;
use crate::pooling::types::{PooledResult, PoolingModel};
use crate::runner::error::ParameterError;
use crate::study::types::{StudyResult, TTestKind};

/// Continue past the first study only if its p-value is below `pmax_first`;
/// afterwards stop as soon as a single study has p below `pmax_last`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirstPassGate {
    pub pmax_first: f64,
    pub pmax_last: f64,
}

/// Continue past the first study only if its p-value is below `pmax_first`;
/// afterwards re-pool after every study and stop once the pooled p is below
/// `minitarget`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterativeGate {
    pub pmax_first: f64,
    pub minitarget: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StoppingRule {
    /// Run the whole budget, pool once
    FixedBudget,
    FirstPass(FirstPassGate),
    IterativePool(IterativeGate),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub n_studies: usize,
    /// True population standardized mean difference
    pub effect_size: f64,
    /// Observations per group
    pub sample_size: usize,
    pub model: PoolingModel,
    #[serde(default)]
    pub t_test: TTestKind,
    pub stopping: StoppingRule,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            n_studies: 5,
            effect_size: 0.0,
            sample_size: 20,
            model: PoolingModel::FixedEffect,
            t_test: TTestKind::Student,
            stopping: StoppingRule::FixedBudget,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), MetaSimErr> {
        if self.sample_size < 2 {
            return Err(ParameterError::SampleSizeTooSmall(self.sample_size).into());
        }
        if self.n_studies < 1 {
            return Err(ParameterError::EmptyStudyBudget.into());
        }
        if !self.effect_size.is_finite() {
            return Err(ParameterError::NonFiniteEffectSize(self.effect_size).into());
        }
        match &self.stopping {
            StoppingRule::FixedBudget => Ok(()),
            StoppingRule::FirstPass(gate) => gate.validate(),
            StoppingRule::IterativePool(gate) => gate.validate(),
        }
    }
}

impl FirstPassGate {
    pub fn validate(&self) -> Result<(), MetaSimErr> {
        check_threshold("pmax_first", self.pmax_first)?;
        check_threshold("pmax_last", self.pmax_last)
    }
}

impl IterativeGate {
    pub fn validate(&self) -> Result<(), MetaSimErr> {
        check_threshold("pmax_first", self.pmax_first)?;
        check_threshold("minitarget", self.minitarget)
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), MetaSimErr> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ParameterError::ThresholdOutOfBounds { name, value }.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    /// First study missed `pmax_first`; nothing was pooled
    GateFailed,
    Pooled,
}

/// Everything one runner invocation produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    /// Studies in the order they were run; study i sits at index i - 1
    pub studies: Vec<StudyResult>,
    pub pooled: Option<PooledResult>,
    pub gate: GateStatus,
}

/// Flat row view of a run: studies are numbered from 1 and the pooled
/// result, if any, gets study index 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordRow {
    pub study_index: usize,
    pub p_value: f64,
    pub effect_size: f64,
}

impl RunRecord {
    pub fn studies_run(&self) -> usize {
        self.studies.len()
    }

    pub fn pooled_p_value(&self) -> Option<f64> {
        self.pooled.map(|p| p.p_value)
    }

    pub fn rows(&self) -> Vec<RecordRow> {
        self.studies
            .iter()
            .enumerate()
            .map(|(i, s)| RecordRow {
                study_index: i + 1,
                p_value: s.p_value,
                effect_size: s.effect_size,
            })
            .chain(self.pooled.iter().map(|p| RecordRow {
                study_index: 0,
                p_value: p.p_value,
                effect_size: p.effect_size,
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study(p_value: f64, effect_size: f64) -> StudyResult {
        StudyResult {
            p_value,
            effect_size,
            variance: 0.1,
            t: 0.0,
            df: 38.0,
        }
    }

    #[test]
    fn default_parameters_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn sample_size_error() {
        let params = SimulationParameters {
            sample_size: 1,
            ..Default::default()
        };
        if let Err(e) = params.validate() {
            assert_eq!(
                String::from(
                    "while validating simulation parameters: \
                     per-group sample size should be at least 2; got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn empty_budget_error() {
        let params = SimulationParameters {
            n_studies: 0,
            ..Default::default()
        };
        if let Err(e) = params.validate() {
            assert_eq!(
                String::from(
                    "while validating simulation parameters: study budget should be at least 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn threshold_errors() {
        let params = SimulationParameters {
            stopping: StoppingRule::IterativePool(IterativeGate {
                pmax_first: 0.05,
                minitarget: 0.0,
            }),
            ..Default::default()
        };
        if let Err(e) = params.validate() {
            assert_eq!(
                String::from(
                    "while validating simulation parameters: \
                     threshold minitarget should be in (0, 1]; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }

        let nan_gate = FirstPassGate {
            pmax_first: f64::NAN,
            pmax_last: 0.05,
        };
        assert!(nan_gate.validate().is_err());
        let lax_gate = FirstPassGate {
            pmax_first: 1.0,
            pmax_last: 1.0,
        };
        assert!(lax_gate.validate().is_ok());
    }

    #[test]
    fn infinite_effect_error() {
        let params = SimulationParameters {
            effect_size: f64::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rows_put_pooled_last_with_index_zero() {
        let record = RunRecord {
            studies: vec![study(0.01, 0.6), study(0.2, 0.1)],
            pooled: Some(PooledResult {
                effect_size: 0.35,
                standard_error: 0.2,
                z: 1.75,
                p_value: 0.08,
                tau2: 0.0,
                k: 2,
                ci_lower: -0.04,
                ci_upper: 0.74,
            }),
            gate: GateStatus::Pooled,
        };
        let rows = record.rows();
        assert_eq!(
            rows.iter().map(|r| r.study_index).collect::<Vec<_>>(),
            vec![1, 2, 0]
        );
        assert_eq!(rows[2].p_value, 0.08);
        assert_eq!(rows[2].effect_size, 0.35);
        assert_eq!(record.pooled_p_value(), Some(0.08));
        assert_eq!(record.studies_run(), 2);
    }

    #[test]
    fn gate_failed_rows() {
        let record = RunRecord {
            studies: vec![study(0.4, 0.1)],
            pooled: None,
            gate: GateStatus::GateFailed,
        };
        assert_eq!(record.rows().len(), 1);
        assert_eq!(record.pooled_p_value(), None);
    }

    #[test]
    fn parameters_from_json() {
        let params: SimulationParameters = serde_json::from_str(
            r#"{
                "n_studies": 8,
                "effect_size": 0.2,
                "sample_size": 50,
                "model": "HE",
                "stopping": { "rule": "first_pass", "pmax_first": 0.05, "pmax_last": 0.1 }
            }"#,
        )
        .unwrap();
        assert_eq!(params.model, PoolingModel::RandomEffects);
        assert_eq!(params.t_test, TTestKind::Student);
        assert_eq!(
            params.stopping,
            StoppingRule::FirstPass(FirstPassGate {
                pmax_first: 0.05,
                pmax_last: 0.1
            })
        );
    }
}
