//----------------------------------------
// pooling errors
//----------------------------------------
use crate::error::MetaSimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolingError {
    #[error("cannot pool an empty set of studies")]
    NoStudies,
    #[error("study {index} has non-positive variance {variance}")]
    NonPositiveVariance { index: usize, variance: f64 },
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<PoolingError> for MetaSimErr {
    fn from(e: PoolingError) -> MetaSimErr {
        MetaSimErr::Pooling(e)
    }
}
