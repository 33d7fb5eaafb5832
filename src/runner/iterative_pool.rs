use tracing::debug;

use crate::error::MetaSimErr;
use crate::pooling::pool::Pool;
use crate::runner::gate::{Opening, open_gate};
use crate::runner::types::{GateStatus, IterativeGate, RunRecord, SimulationParameters};
use crate::study::simulate::StudySource;

/// Gated on the first study; then re-pools after every new study and stops
/// as soon as the pooled p-value is below `minitarget`.
pub fn run_iterative_pool<S: StudySource, P: Pool>(
    params: &SimulationParameters,
    gate: &IterativeGate,
    source: &mut S,
    pooler: &P,
) -> Result<RunRecord, MetaSimErr> {
    params.validate()?;
    gate.validate()?;

    let mut studies = match open_gate(source, gate.pmax_first)? {
        Opening::GateFailed(record) => return Ok(record),
        Opening::Collecting(studies) => studies,
    };

    let mut pooled = None;
    for index in 2..=params.n_studies {
        studies.push(source.next_study()?);
        let current = pooler.pool(&studies)?;
        pooled = Some(current);
        if current.p_value < gate.minitarget {
            debug!(index, p = current.p_value, "stopping on significant pooled result");
            break;
        }
    }

    // A one-study budget never enters the loop
    let pooled = match pooled {
        Some(p) => p,
        None => pooler.pool(&studies)?,
    };
    Ok(RunRecord {
        studies,
        pooled: Some(pooled),
        gate: GateStatus::Pooled,
    })
}
