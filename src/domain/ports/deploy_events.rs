//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Console and NDJSON sinks render these for the user.

use std::path::PathBuf;

use crate::domain::value_objects::DeployStage;

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// A site deploy is starting
    SiteStarted { site: String, path: PathBuf },

    /// The deploy moved to a new stage
    StageChanged { site: String, stage: DeployStage },

    /// One file landed on the server
    FileUploaded {
        site: String,
        local: PathBuf,
        remote: String,
        bytes: u64,
    },

    /// Something worth telling the user that does not fail the deploy
    Warning { site: String, message: String },

    /// Site reached `Done`
    SiteSucceeded {
        site: String,
        site_name: String,
        files: usize,
    },

    /// Site reached `Failed`
    SiteFailed {
        site: String,
        /// Display name when the site config got far enough to provide one
        site_name: Option<String>,
        /// Last stage reached before the failure
        stage: DeployStage,
        kind: &'static str,
        error: String,
    },

    /// Every selected site has been processed
    RunFinished { succeeded: usize, failed: usize },
}

/// Trait for receiving deploy events
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
