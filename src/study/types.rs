//----------------------------------------
// study mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Which two-sample t-test a simulated study runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TTestKind {
    /// Pooled variance, df = n1 + n2 - 2
    #[default]
    Student,
    /// Unequal variances, Welch-Satterthwaite df
    Welch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
}

/// Outcome of one simulated two-group study
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyResult {
    pub p_value: f64,
    pub effect_size: f64,
    pub variance: f64,
    pub t: f64,
    pub df: f64,
}
