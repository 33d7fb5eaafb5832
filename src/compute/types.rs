//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::pooling::types::{PooledResult, PoolingModel};
pub use crate::runner::types::{
    FirstPassGate, GateStatus, IterativeGate, RecordRow, RunRecord, SimulationParameters,
    StoppingRule,
};
pub use crate::study::types::{StudyResult, TTestKind, TTestResult};
pub use crate::sweep::settings::{ParameterGrid, SweepSettings};
