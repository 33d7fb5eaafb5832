//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::estimate::effect_size::effect_size_from_t;
pub use crate::estimate::variance::effect_size_variance;
pub use crate::pooling::pool::{Pool, pool_studies};
pub use crate::runner::first_pass::run_first_pass;
pub use crate::runner::fixed_budget::run_fixed_budget;
pub use crate::runner::iterative_pool::run_iterative_pool;
pub use crate::runner::simulate_run;
pub use crate::study::simulate::{StudySimulator, StudySource};
pub use crate::study::t_test::two_sample_t_test;
pub use crate::sweep::run_sweep::{CombinationResult, run_sweep};
pub use crate::sweep::seed::run_rng;
pub use crate::sweep::summary::{SweepSummary, summarize};
