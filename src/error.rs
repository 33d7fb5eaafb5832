//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::estimate::error::EstimateError;
pub use crate::pooling::error::PoolingError;
pub use crate::runner::error::ParameterError;
pub use crate::study::error::StudySimError;
pub use crate::sweep::error::SweepError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaSimErr {
    #[error("while validating simulation parameters: {0}")]
    InvalidParameter(ParameterError),
    #[error("while estimating effect size: {0}")]
    Estimate(EstimateError),
    #[error("while simulating study: {0}")]
    StudySim(StudySimError),
    #[error("while pooling studies: {0}")]
    Pooling(PoolingError),
    #[error("while running sweep: {0}")]
    Sweep(SweepError),
}
