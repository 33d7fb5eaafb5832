use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::MetaSimErr;
use crate::pooling::types::PoolingModel;
use crate::runner::types::{SimulationParameters, StoppingRule};
use crate::study::types::TTestKind;
use crate::sweep::error::SweepError;

/// Values to cross; every combination becomes one `SimulationParameters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGrid {
    pub n_studies: Vec<usize>,
    pub effect_sizes: Vec<f64>,
    pub sample_sizes: Vec<usize>,
    pub models: Vec<PoolingModel>,
    pub stopping_rules: Vec<StoppingRule>,
    #[serde(default)]
    pub t_test: TTestKind,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            n_studies: (2..=8).collect(),
            effect_sizes: vec![0.0, 0.2, 0.5],
            sample_sizes: vec![20, 50],
            models: vec![PoolingModel::FixedEffect, PoolingModel::RandomEffects],
            stopping_rules: vec![StoppingRule::FixedBudget],
            t_test: TTestKind::Student,
        }
    }
}

impl ParameterGrid {
    /// Cartesian product in a fixed order: model, stopping rule, study
    /// budget, effect size, sample size (last varies fastest)
    pub fn combinations(&self) -> Result<Vec<SimulationParameters>, MetaSimErr> {
        //----------------------------------------
        // Check arguments
        let axes = [
            ("n_studies", self.n_studies.is_empty()),
            ("effect_sizes", self.effect_sizes.is_empty()),
            ("sample_sizes", self.sample_sizes.is_empty()),
            ("models", self.models.is_empty()),
            ("stopping_rules", self.stopping_rules.is_empty()),
        ];
        if let Some((axis, _)) = axes.iter().find(|(_, empty)| *empty) {
            return Err(SweepError::EmptyGrid(*axis).into());
        }

        Ok(iproduct!(
            self.models.iter(),
            self.stopping_rules.iter(),
            self.n_studies.iter(),
            self.effect_sizes.iter(),
            self.sample_sizes.iter()
        )
        .map(
            |(&model, &stopping, &n_studies, &effect_size, &sample_size)| SimulationParameters {
                n_studies,
                effect_size,
                sample_size,
                model,
                t_test: self.t_test,
                stopping,
            },
        )
        .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Every run's generator derives from this seed
    pub seed: u64,
    pub iterations: usize,
    /// Pooled p-values below this count as significant
    pub alpha: f64,
    pub grid: ParameterGrid,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            seed: 24601,
            iterations: 10_000,
            alpha: 0.05,
            grid: ParameterGrid::default(),
        }
    }
}

impl SweepSettings {
    pub fn from_json_file(path: &Path) -> Result<Self, MetaSimErr> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SweepError::Settings(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, MetaSimErr> {
        serde_json::from_str(json).map_err(|e| SweepError::Settings(e.to_string()).into())
    }

    pub fn validate(&self) -> Result<(), MetaSimErr> {
        if self.iterations == 0 {
            return Err(SweepError::NoIterations.into());
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(SweepError::BadAlpha(self.alpha).into());
        }
        Ok(())
    }
}
