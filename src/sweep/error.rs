//----------------------------------------
// sweep errors
//----------------------------------------
use crate::error::MetaSimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("parameter grid axis {0} is empty")]
    EmptyGrid(&'static str),
    #[error("iterations per combination should be at least 1")]
    NoIterations,
    #[error("significance level should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("could not read sweep settings: {0}")]
    Settings(String),
}

impl From<SweepError> for MetaSimErr {
    fn from(e: SweepError) -> MetaSimErr {
        MetaSimErr::Sweep(e)
    }
}
