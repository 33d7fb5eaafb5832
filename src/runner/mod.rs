//----------------------------------------
// runner mod
//----------------------------------------
pub mod error;
pub mod first_pass;
pub mod fixed_budget;
mod gate;
pub mod iterative_pool;
pub mod types;

use rand::Rng;

use crate::error::MetaSimErr;
use crate::runner::{
    first_pass::run_first_pass,
    fixed_budget::run_fixed_budget,
    iterative_pool::run_iterative_pool,
    types::{RunRecord, SimulationParameters, StoppingRule},
};
use crate::study::simulate::StudySimulator;

/// One simulated run under `params`, drawing all randomness from `rng` and
/// pooling with `params.model`
pub fn simulate_run<R: Rng>(
    params: &SimulationParameters,
    rng: R,
) -> Result<RunRecord, MetaSimErr> {
    params.validate()?;
    let mut simulator =
        StudySimulator::new(params.sample_size, params.effect_size, params.t_test, rng)?;
    match &params.stopping {
        StoppingRule::FixedBudget => run_fixed_budget(params, &mut simulator, &params.model),
        StoppingRule::FirstPass(gate) => {
            run_first_pass(params, gate, &mut simulator, &params.model)
        }
        StoppingRule::IterativePool(gate) => {
            run_iterative_pool(params, gate, &mut simulator, &params.model)
        }
    }
}
