//----------------------------------------
// pooling mod types
//----------------------------------------
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetaSimErr;
use crate::runner::error::ParameterError;

/// Weighting model used to combine studies. Selectors follow the usual
/// meta-analysis shorthand: "FE" for fixed effect, "HE" for random effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolingModel {
    #[serde(rename = "FE")]
    FixedEffect,
    #[serde(rename = "HE")]
    RandomEffects,
}

impl FromStr for PoolingModel {
    type Err = MetaSimErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FE" => Ok(PoolingModel::FixedEffect),
            "HE" => Ok(PoolingModel::RandomEffects),
            other => Err(ParameterError::UnknownPoolingModel(other.to_string()).into()),
        }
    }
}

impl fmt::Display for PoolingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolingModel::FixedEffect => write!(f, "FE"),
            PoolingModel::RandomEffects => write!(f, "HE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PooledResult {
    pub effect_size: f64,
    pub standard_error: f64,
    pub z: f64,
    pub p_value: f64,
    /// Between-study variance; zero under the fixed-effect model
    pub tau2: f64,
    pub k: usize,
    pub ci_lower: f64,
    pub ci_upper: f64,
}
