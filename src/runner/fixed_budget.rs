use crate::error::MetaSimErr;
use crate::pooling::pool::Pool;
use crate::runner::types::{GateStatus, RunRecord, SimulationParameters};
use crate::study::simulate::StudySource;
use crate::study::types::StudyResult;

/// Runs exactly `params.n_studies` studies and pools all of them
pub fn run_fixed_budget<S: StudySource, P: Pool>(
    params: &SimulationParameters,
    source: &mut S,
    pooler: &P,
) -> Result<RunRecord, MetaSimErr> {
    params.validate()?;
    let studies = (0..params.n_studies)
        .map(|_| source.next_study())
        .collect::<Result<Vec<StudyResult>, MetaSimErr>>()?;
    let pooled = pooler.pool(&studies)?;
    Ok(RunRecord {
        studies,
        pooled: Some(pooled),
        gate: GateStatus::Pooled,
    })
}
