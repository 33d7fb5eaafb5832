//----------------------------------------
// parameter errors
//----------------------------------------
use crate::error::MetaSimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("per-group sample size should be at least 2; got {0}")]
    SampleSizeTooSmall(usize),
    #[error("study budget should be at least 1")]
    EmptyStudyBudget,
    #[error("unrecognized pooling model \"{0}\" (expected \"FE\" or \"HE\")")]
    UnknownPoolingModel(String),
    #[error("threshold {name} should be in (0, 1]; got {value}")]
    ThresholdOutOfBounds { name: &'static str, value: f64 },
    #[error("true effect size should be finite; got {0}")]
    NonFiniteEffectSize(f64),
}

impl From<ParameterError> for MetaSimErr {
    fn from(e: ParameterError) -> MetaSimErr {
        MetaSimErr::InvalidParameter(e)
    }
}
