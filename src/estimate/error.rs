//----------------------------------------
// estimate errors
//----------------------------------------
use crate::error::MetaSimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("group sample sizes should be positive; got {0} and {1}")]
    NonPositiveGroupSize(usize, usize),
    #[error("per-group sample size should be at least 2; got {0}")]
    DegenerateSampleSize(usize),
}

impl From<EstimateError> for MetaSimErr {
    fn from(e: EstimateError) -> MetaSimErr {
        MetaSimErr::Estimate(e)
    }
}
