//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::SiteStarted { site, path } => serde_json::json!({
                "event": "site_start",
                "site": site,
                "path": path.display().to_string(),
            }),

            DeployEvent::StageChanged { site, stage } => serde_json::json!({
                "event": "stage",
                "site": site,
                "stage": stage.as_str(),
            }),

            DeployEvent::FileUploaded {
                site,
                local,
                remote,
                bytes,
            } => serde_json::json!({
                "event": "file_uploaded",
                "site": site,
                "local": local.display().to_string(),
                "remote": remote,
                "bytes": bytes,
            }),

            DeployEvent::Warning { site, message } => serde_json::json!({
                "event": "warning",
                "site": site,
                "message": message,
            }),

            DeployEvent::SiteSucceeded {
                site,
                site_name,
                files,
            } => serde_json::json!({
                "event": "site_complete",
                "status": "success",
                "site": site,
                "site_name": site_name,
                "files": files,
            }),

            DeployEvent::SiteFailed {
                site,
                site_name,
                stage,
                kind,
                error,
            } => serde_json::json!({
                "event": "site_complete",
                "status": "failed",
                "site": site,
                "site_name": site_name,
                "stage": stage.as_str(),
                "kind": kind,
                "error": error,
            }),

            DeployEvent::RunFinished { succeeded, failed } => serde_json::json!({
                "event": "complete",
                "status": if failed == 0 { "success" } else { "failed" },
                "succeeded": succeeded,
                "failed": failed,
            }),
        };

        self.write_event(json);
    }
}
