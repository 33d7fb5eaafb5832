use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

use crate::error::MetaSimErr;
use crate::pooling::error::PoolingError;

pub fn std_normal_quantile(p: f64) -> Result<f64, MetaSimErr> {
    if p <= 0.0 || p >= 1.0 {
        return Err(PoolingError::QuantileOutOfBounds(p).into());
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

/// P(|Z| >= |z|) for standard normal Z
pub fn two_sided_p(z: f64) -> f64 {
    erfc(z.abs() / SQRT_2)
}
