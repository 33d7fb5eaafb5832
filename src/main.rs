use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use imasim::compute::types::SweepSettings;
use imasim::compute::{run_sweep, summarize};
use imasim::error::MetaSimErr;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), MetaSimErr> {
    // Optional JSON settings file; defaults otherwise
    let settings = match std::env::args().nth(1) {
        Some(path) => SweepSettings::from_json_file(Path::new(&path))?,
        None => SweepSettings::default(),
    };

    let start = Instant::now();
    let results = run_sweep(&settings)?;
    let duration = start.elapsed();
    println!("Sweep ({} combinations): {:?}", results.len(), duration);

    println!("model\trule\tk\td\tn\tpooled\tmean_k\trate_pooled\trate_all");
    for result in &results {
        let p = &result.parameters;
        let summary = summarize(&result.records, settings.alpha);
        println!(
            "{}\t{:?}\t{}\t{}\t{}\t{}\t{:.2}\t{}\t{:.4}",
            p.model,
            p.stopping,
            p.n_studies,
            p.effect_size,
            p.sample_size,
            summary.pooled_runs,
            summary.mean_studies,
            summary
                .rate_among_pooled()
                .map_or(String::from("NA"), |r| format!("{r:.4}")),
            summary.rate_among_all(),
        );
    }
    Ok(())
}
