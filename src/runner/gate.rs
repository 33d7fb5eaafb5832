//----------------------------------------
// Initial gate shared by the gated runners
//----------------------------------------
// AwaitingFirstStudy -> GateFailed (terminal) | Collecting -> Pooled (terminal)
use tracing::debug;

use crate::error::MetaSimErr;
use crate::runner::types::{GateStatus, RunRecord};
use crate::study::simulate::StudySource;
use crate::study::types::StudyResult;

pub(crate) enum Opening {
    GateFailed(RunRecord),
    Collecting(Vec<StudyResult>),
}

pub(crate) fn open_gate<S: StudySource>(
    source: &mut S,
    pmax_first: f64,
) -> Result<Opening, MetaSimErr> {
    let first = source.next_study()?;
    if first.p_value >= pmax_first {
        debug!(p = first.p_value, pmax_first, "first study failed gate");
        return Ok(Opening::GateFailed(RunRecord {
            studies: vec![first],
            pooled: None,
            gate: GateStatus::GateFailed,
        }));
    }
    Ok(Opening::Collecting(vec![first]))
}
