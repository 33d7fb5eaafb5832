use rand::Rng;
use rand::distributions::Distribution;
use statrs::distribution::Normal;
use tracing::trace;

use crate::error::MetaSimErr;
use crate::estimate::{
    effect_size::effect_size_from_t, error::EstimateError, variance::effect_size_variance,
};
use crate::study::error::StudySimError;
use crate::study::t_test::two_sample_t_test;
use crate::study::types::{StudyResult, TTestKind};

/// Anything that can hand a runner its next study
pub trait StudySource {
    fn next_study(&mut self) -> Result<StudyResult, MetaSimErr>;
}

/// Simulates two-group studies with `sample_size` observations per group,
/// treatment ~ N(effect_size, 1) and control ~ N(0, 1)
pub struct StudySimulator<R: Rng> {
    sample_size: usize,
    t_test: TTestKind,
    treatment: Normal,
    control: Normal,
    rng: R,
}

impl<R: Rng> StudySimulator<R> {
    pub fn new(
        sample_size: usize,
        effect_size: f64,
        t_test: TTestKind,
        rng: R,
    ) -> Result<Self, MetaSimErr> {
        if sample_size < 2 {
            return Err(EstimateError::DegenerateSampleSize(sample_size).into());
        }
        let treatment = normal(effect_size, "treatment")?;
        let control = normal(0.0, "control")?;
        Ok(StudySimulator {
            sample_size,
            t_test,
            treatment,
            control,
            rng,
        })
    }

    pub fn simulate(&mut self) -> Result<StudyResult, MetaSimErr> {
        //----------------------------------------
        // Draw treatment group first, then control
        let treatment: Vec<f64> = (0..self.sample_size)
            .map(|_| self.treatment.sample(&mut self.rng))
            .collect();
        let control: Vec<f64> = (0..self.sample_size)
            .map(|_| self.control.sample(&mut self.rng))
            .collect();

        //----------------------------------------
        // Test, then convert to effect size + variance
        let test = two_sample_t_test(&treatment, &control, self.t_test)?;
        let effect_size = effect_size_from_t(test.t, self.sample_size, self.sample_size)?;
        let variance = effect_size_variance(effect_size, self.sample_size)?;
        trace!(p = test.p_value, d = effect_size, "simulated study");

        Ok(StudyResult {
            p_value: test.p_value,
            effect_size,
            variance,
            t: test.t,
            df: test.df,
        })
    }
}

impl<R: Rng> StudySource for StudySimulator<R> {
    fn next_study(&mut self) -> Result<StudyResult, MetaSimErr> {
        self.simulate()
    }
}

fn normal(mean: f64, name: &'static str) -> Result<Normal, MetaSimErr> {
    Normal::new(mean, 1.0).map_err(|e| {
        StudySimError::Distribution {
            name,
            reason: e.to_string(),
        }
        .into()
    })
}
