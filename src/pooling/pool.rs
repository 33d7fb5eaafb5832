use crate::error::MetaSimErr;
use crate::pooling::error::PoolingError;
use crate::pooling::std_normal::{std_normal_quantile, two_sided_p};
use crate::pooling::types::{PooledResult, PoolingModel};
use crate::study::types::StudyResult;

const CI_LEVEL: f64 = 0.95;

/// Combines studies into one pooled estimate
pub trait Pool {
    fn pool(&self, studies: &[StudyResult]) -> Result<PooledResult, MetaSimErr>;
}

impl Pool for PoolingModel {
    fn pool(&self, studies: &[StudyResult]) -> Result<PooledResult, MetaSimErr> {
        pool_studies(studies, *self)
    }
}

/// Inverse-variance pooling with a Wald z-test against zero effect.
///
/// Random effects estimates the between-study variance as
///     tau^2 = max(0, (Q - (k - 1)) / C),  C = sum(w) - sum(w^2) / sum(w)
/// with fixed-effect weights w = 1 / v, then reweights by 1 / (v + tau^2).
pub fn pool_studies(
    studies: &[StudyResult],
    model: PoolingModel,
) -> Result<PooledResult, MetaSimErr> {
    //----------------------------------------
    // Check arguments
    if studies.is_empty() {
        return Err(PoolingError::NoStudies.into());
    }
    if let Some((index, study)) = studies
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.variance > 0.0 && s.variance.is_finite()))
    {
        return Err(PoolingError::NonPositiveVariance {
            index: index + 1,
            variance: study.variance,
        }
        .into());
    }

    let k = studies.len();
    let z_crit = std_normal_quantile(1.0 - (1.0 - CI_LEVEL) / 2.0)?;

    //----------------------------------------
    // One study: nothing to weight
    if k == 1 {
        let effect_size = studies[0].effect_size;
        let standard_error = studies[0].variance.sqrt();
        return Ok(summarize(effect_size, standard_error, 0.0, k, z_crit));
    }

    //----------------------------------------
    // Between-study variance
    let tau2 = match model {
        PoolingModel::FixedEffect => 0.0,
        PoolingModel::RandomEffects => {
            let weights: Vec<f64> = studies.iter().map(|s| 1.0 / s.variance).collect();
            let sum_w: f64 = weights.iter().sum();
            let sum_w2: f64 = weights.iter().map(|w| w * w).sum();
            let fe_mean = weighted_mean(studies, &weights, sum_w);
            let q: f64 = studies
                .iter()
                .zip(weights.iter())
                .map(|(s, w)| w * (s.effect_size - fe_mean).powi(2))
                .sum();
            let c = sum_w - sum_w2 / sum_w;
            ((q - (k as f64 - 1.0)) / c).max(0.0)
        }
    };

    //----------------------------------------
    // Pooled estimate
    let weights: Vec<f64> = studies.iter().map(|s| 1.0 / (s.variance + tau2)).collect();
    let sum_w: f64 = weights.iter().sum();
    let effect_size = weighted_mean(studies, &weights, sum_w);
    let standard_error = (1.0 / sum_w).sqrt();

    Ok(summarize(effect_size, standard_error, tau2, k, z_crit))
}

fn weighted_mean(studies: &[StudyResult], weights: &[f64], sum_w: f64) -> f64 {
    studies
        .iter()
        .zip(weights.iter())
        .map(|(s, w)| w * s.effect_size)
        .sum::<f64>()
        / sum_w
}

fn summarize(
    effect_size: f64,
    standard_error: f64,
    tau2: f64,
    k: usize,
    z_crit: f64,
) -> PooledResult {
    let z = effect_size / standard_error;
    PooledResult {
        effect_size,
        standard_error,
        z,
        p_value: two_sided_p(z),
        tau2,
        k,
        ci_lower: effect_size - z_crit * standard_error,
        ci_upper: effect_size + z_crit * standard_error,
    }
}
