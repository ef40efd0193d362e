//! Console Event Sink
//!
//! Human-readable status lines. Success and failure lines carry distinct
//! glyphs; per-file lines only appear with `-v`.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::ui::{Icon, UiContext};

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::SiteStarted { site, path } => {
                if self.ui.verbose > 0 {
                    self.line(format!(
                        "{} Deploying {} ({})",
                        self.icon(Icon::Deploy),
                        site,
                        path.display()
                    ));
                }
            }
            DeployEvent::StageChanged { .. } => {}
            DeployEvent::FileUploaded { remote, bytes, .. } => {
                if self.ui.verbose > 0 {
                    self.line(format!(
                        "  {} {} ({} bytes)",
                        self.icon(Icon::Upload),
                        remote,
                        bytes
                    ));
                }
            }
            DeployEvent::Warning { message, .. } => {
                self.line(format!("{} {}", self.icon(Icon::Warning), message));
            }
            DeployEvent::SiteSucceeded { site_name, .. } => {
                self.line(format!(
                    "{} Successfully deployed {}",
                    self.icon(Icon::Success),
                    site_name
                ));
            }
            DeployEvent::SiteFailed {
                site,
                site_name,
                error,
                ..
            } => {
                self.line(format!(
                    "{} Deployment failed for {}: {}",
                    self.icon(Icon::Error),
                    site_name.unwrap_or(site),
                    error
                ));
            }
            DeployEvent::RunFinished { succeeded, failed } => {
                if failed > 0 && succeeded + failed > 1 {
                    self.line(format!(
                        "Summary: {} deployed, {} failed",
                        succeeded, failed
                    ));
                }
            }
        }
    }
}
