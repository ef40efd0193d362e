//! Deploy Log Port
//!
//! Each site deploy gets its own logger, installed only while that deploy
//! runs, so no site's log lines end up in another site's file.

use std::path::Path;

use tracing::Dispatch;

use crate::error::DeployResult;

/// Creates the per-deploy tracing dispatcher
pub trait DeployLogFactory {
    /// Open (append) the log file and return a dispatcher writing to it
    fn open(&self, log_file: &Path) -> DeployResult<Dispatch>;
}

/// Discards all log output
pub struct NoopLogFactory;

impl DeployLogFactory for NoopLogFactory {
    fn open(&self, _log_file: &Path) -> DeployResult<Dispatch> {
        Ok(Dispatch::none())
    }
}
