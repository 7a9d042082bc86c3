use std::path::PathBuf;
use std::time::Duration;

use dirtally_shared_kernel::WalkResult;

use crate::options::Strategy;

/// One walker's totals and timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub strategy: Strategy,
    pub result: WalkResult,
    pub skipped: u64,
    pub elapsed: Duration,
}

/// Everything a run produced, in execution order.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub root: PathBuf,
    pub reports: Vec<WalkReport>,
}

impl RunResult {
    /// True when every walker reached the same totals.
    pub fn is_consistent(&self) -> bool {
        self.reports
            .windows(2)
            .all(|pair| pair[0].result == pair[1].result)
    }

    pub fn report(&self, strategy: Strategy) -> Option<&WalkReport> {
        self.reports.iter().find(|r| r.strategy == strategy)
    }
}
