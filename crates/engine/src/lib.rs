// crates/engine/src/lib.rs
use std::time::Instant;

use dirtally_infra::StdFileSystem;
use dirtally_ports::filesystem::FileSystem;

pub mod config;
pub mod error;
pub mod options;
pub mod report;
pub mod walker;

use crate::config::Config;
use crate::error::Result;
use crate::options::Strategy;
use crate::report::{RunResult, WalkReport};
use crate::walker::{ConcurrentWalker, SequentialWalker, Walker};

/// Run the walker(s) selected by `config.mode` against the real filesystem.
///
/// # Errors
///
/// Returns [`EngineError::RootUnavailable`](crate::error::EngineError::RootUnavailable)
/// if the root directory cannot be listed. Failures below the root only
/// lower the totals and are reported through [`WalkReport::skipped`].
pub fn run(config: &Config) -> Result<RunResult> {
    run_with(StdFileSystem::new(), config)
}

/// Run the walker(s) selected by `config.mode` against `fs`.
///
/// With [`Mode::Both`](crate::options::Mode::Both) the parallel walker runs
/// first and the sequential walker second, over the same root.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<F: FileSystem>(fs: F, config: &Config) -> Result<RunResult> {
    let mut reports = Vec::with_capacity(config.mode.strategies().len());

    for &strategy in config.mode.strategies() {
        let walker: Box<dyn Walker + '_> = match strategy {
            Strategy::Sequential => Box::new(SequentialWalker::new(&fs)),
            Strategy::Parallel => Box::new(ConcurrentWalker::new(&fs)),
        };
        reports.push(timed(walker.as_ref(), config)?);
    }

    Ok(RunResult {
        root: config.root.clone(),
        reports,
    })
}

fn timed(walker: &dyn Walker, config: &Config) -> Result<WalkReport> {
    let strategy = walker.strategy();
    log::info!("{strategy} walk of {} started", config.root.display());

    let started = Instant::now();
    let outcome = walker.walk(&config.root)?;
    let elapsed = started.elapsed();

    log::info!(
        "{strategy} walk finished in {elapsed:?}: {} ({} skipped)",
        outcome.result,
        outcome.skipped
    );
    Ok(WalkReport {
        strategy,
        result: outcome.result,
        skipped: outcome.skipped,
        elapsed,
    })
}
