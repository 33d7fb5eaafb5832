use serde::Serialize;

use crate::runner::types::RunRecord;

/// Tally of pooled significance over the runs of one combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    pub runs: usize,
    /// Runs that produced a pooled result (gate passed)
    pub pooled_runs: usize,
    /// Pooled runs with p below alpha
    pub significant: usize,
    pub mean_studies: f64,
}

impl SweepSummary {
    /// Share of pooled results that are significant. Gate failures produced
    /// no pooled row and are left out; `None` when nothing was pooled.
    pub fn rate_among_pooled(&self) -> Option<f64> {
        match self.pooled_runs {
            0 => None,
            n => Some(self.significant as f64 / n as f64),
        }
    }

    /// Share of all runs that ended significant, counting gate failures as
    /// non-significant
    pub fn rate_among_all(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.significant as f64 / self.runs as f64
    }
}

pub fn summarize(records: &[RunRecord], alpha: f64) -> SweepSummary {
    let pooled_p: Vec<f64> = records.iter().filter_map(|r| r.pooled_p_value()).collect();
    let total_studies: usize = records.iter().map(|r| r.studies_run()).sum();
    SweepSummary {
        runs: records.len(),
        pooled_runs: pooled_p.len(),
        significant: pooled_p.iter().filter(|&&p| p < alpha).count(),
        mean_studies: if records.is_empty() {
            0.0
        } else {
            total_studies as f64 / records.len() as f64
        },
    }
}
