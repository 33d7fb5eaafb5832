use crate::error::MetaSimErr;
use crate::estimate::error::EstimateError;

/// Standardized mean difference implied by a two-sample t statistic:
/// d = t * sqrt(1/n1 + 1/n2)
pub fn effect_size_from_t(t: f64, n1: usize, n2: usize) -> Result<f64, MetaSimErr> {
    if n1 == 0 || n2 == 0 {
        return Err(EstimateError::NonPositiveGroupSize(n1, n2).into());
    }
    Ok(t * (1.0 / n1 as f64 + 1.0 / n2 as f64).sqrt())
}
