//----------------------------------------
// study simulation errors
//----------------------------------------
use crate::error::MetaSimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudySimError {
    #[error("each group needs at least 2 observations; got {0} and {1}")]
    TooFewObservations(usize, usize),
    #[error("could not construct {name} distribution: {reason}")]
    Distribution { name: &'static str, reason: String },
}

impl From<StudySimError> for MetaSimErr {
    fn from(e: StudySimError) -> MetaSimErr {
        MetaSimErr::StudySim(e)
    }
}
