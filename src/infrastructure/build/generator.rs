//! External Generator Builder
//!
//! Runs `<command> --minify` with the site directory as the child's working
//! directory. Output is buffered until the process exits; there is no timeout.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::BuildSettings;
use crate::domain::ports::SiteBuilder;
use crate::error::{DeployError, DeployResult};

/// Flag passed to the generator on every build
pub const MINIFY_FLAG: &str = "--minify";

/// Builds sites by running the configured generator executable
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratorBuilder;

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl SiteBuilder for GeneratorBuilder {
    fn build(&self, site_dir: &Path, settings: &BuildSettings) -> DeployResult<()> {
        let command_line = format!("{} {}", settings.command, MINIFY_FLAG);
        debug!(command = %command_line, dir = %site_dir.display(), "running generator");

        let output = Command::new(&settings.command)
            .arg(MINIFY_FLAG)
            .current_dir(site_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DeployError::BuildSpawn {
                command: command_line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("generator output:\n{}", stdout.trim_end());
        }

        if !output.status.success() {
            return Err(DeployError::Build {
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
