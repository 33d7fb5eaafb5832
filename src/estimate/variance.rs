use crate::error::MetaSimErr;
use crate::estimate::error::EstimateError;

/// Sampling variance of a standardized mean difference `d` from two groups of
/// `n` each, with df = 2n - 2:
///     (2/n + d^2 / (2 df)) * (2n / df)
pub fn effect_size_variance(d: f64, n: usize) -> Result<f64, MetaSimErr> {
    if n < 2 {
        return Err(EstimateError::DegenerateSampleSize(n).into());
    }
    let n = n as f64;
    let df = 2.0 * n - 2.0;
    Ok((2.0 / n + d * d / (2.0 * df)) * (2.0 * n / df))
}
