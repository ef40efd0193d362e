//! Error types for sitedeploy
//!
//! Library code returns [`DeployError`]; the binary wraps it with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Configuration file does not exist
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not well-formed YAML
    #[error("invalid config in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A required key was looked up and is absent or has the wrong type
    #[error("missing or invalid key '{key}' in {}", file.display())]
    MissingKey { file: PathBuf, key: String },

    /// `--site` named a site that is not in the global config
    #[error("Site '{site}' not found in configuration")]
    SiteNotConfigured { site: String },

    /// The generator could not be started at all
    #[error("failed to run `{command}`: {source}")]
    BuildSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator exited with a non-zero status
    #[error("build failed (`{command}` exited with {status}): {stderr}")]
    Build {
        command: String,
        status: String,
        stderr: String,
    },

    /// The generator succeeded but left no output directory behind
    #[error("build output not found: {}", path.display())]
    OutputMissing { path: PathBuf },

    /// Connection or login to the transfer server failed
    #[error("cannot log in to {host}:{port}: {message}")]
    TransferAuth {
        host: String,
        port: u16,
        message: String,
    },

    /// Writing a single remote file failed
    #[error("upload of '{path}' failed: {message}")]
    TransferWrite { path: String, message: String },

    /// Remote directory creation failed and the directory does not exist.
    ///
    /// Only ever reported as a warning; the upload carries on.
    #[error("could not create remote directory '{path}': {message}")]
    TransferDir { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Short machine-readable name, used by the JSON event stream
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "config_not_found",
            Self::ConfigParse { .. } => "config_parse",
            Self::MissingKey { .. } => "missing_key",
            Self::SiteNotConfigured { .. } => "site_not_configured",
            Self::BuildSpawn { .. } | Self::Build { .. } => "build",
            Self::OutputMissing { .. } => "output_missing",
            Self::TransferAuth { .. } => "transfer_auth",
            Self::TransferWrite { .. } => "transfer_write",
            Self::TransferDir { .. } => "transfer_dir",
            Self::Io(_) => "io",
        }
    }
}
