use tracing::debug;

use crate::error::MetaSimErr;
use crate::pooling::pool::Pool;
use crate::runner::gate::{Opening, open_gate};
use crate::runner::types::{FirstPassGate, GateStatus, RunRecord, SimulationParameters};
use crate::study::simulate::StudySource;

/// Gated on the first study; then keeps running studies until one of them
/// alone reaches `pmax_last` or the budget runs out, and pools everything
/// collected up to that point.
pub fn run_first_pass<S: StudySource, P: Pool>(
    params: &SimulationParameters,
    gate: &FirstPassGate,
    source: &mut S,
    pooler: &P,
) -> Result<RunRecord, MetaSimErr> {
    params.validate()?;
    gate.validate()?;

    let mut studies = match open_gate(source, gate.pmax_first)? {
        Opening::GateFailed(record) => return Ok(record),
        Opening::Collecting(studies) => studies,
    };

    for index in 2..=params.n_studies {
        let study = source.next_study()?;
        studies.push(study);
        if study.p_value < gate.pmax_last {
            debug!(index, p = study.p_value, "stopping on significant study");
            break;
        }
    }

    debug_assert!(!studies.is_empty());
    let pooled = pooler.pool(&studies)?;
    Ok(RunRecord {
        studies,
        pooled: Some(pooled),
        gate: GateStatus::Pooled,
    })
}
