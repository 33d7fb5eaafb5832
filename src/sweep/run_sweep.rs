use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::error::MetaSimErr;
use crate::runner::simulate_run;
use crate::runner::types::{RunRecord, SimulationParameters};
use crate::sweep::seed::run_rng;
use crate::sweep::settings::SweepSettings;

/// All runs for one point of the parameter grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinationResult {
    pub index: usize,
    pub parameters: SimulationParameters,
    pub records: Vec<RunRecord>,
}

/// Runs `settings.iterations` independent runs for every grid combination.
/// Results come back in grid order and do not depend on thread count.
pub fn run_sweep(settings: &SweepSettings) -> Result<Vec<CombinationResult>, MetaSimErr> {
    //----------------------------------------
    // Check everything before simulating anything
    settings.validate()?;
    let combinations = settings.grid.combinations()?;
    for parameters in &combinations {
        parameters.validate()?;
    }
    info!(
        combinations = combinations.len(),
        iterations = settings.iterations,
        seed = settings.seed,
        "starting sweep"
    );

    combinations
        .into_par_iter()
        .enumerate()
        .map(|(index, parameters)| run_combination(settings, index, parameters))
        .collect()
}

fn run_combination(
    settings: &SweepSettings,
    index: usize,
    parameters: SimulationParameters,
) -> Result<CombinationResult, MetaSimErr> {
    let records = (0..settings.iterations)
        .into_par_iter()
        .map(|iteration| simulate_run(&parameters, run_rng(settings.seed, index, iteration)))
        .collect::<Result<Vec<RunRecord>, MetaSimErr>>()?;
    info!(
        index,
        n_studies = parameters.n_studies,
        effect_size = parameters.effect_size,
        sample_size = parameters.sample_size,
        model = %parameters.model,
        "finished combination"
    );
    Ok(CombinationResult {
        index,
        parameters,
        records,
    })
}
