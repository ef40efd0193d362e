//! sitedeploy - static site build and FTP deploy tool
//!
//! Builds each configured site with an external generator (Hugo by default)
//! and mirrors the generated output tree onto an FTP server, one site at a
//! time.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployOutcome, DeployUseCase, RunSummary};
pub use config::{FtpSettings, GlobalConfig, SiteConfig};
pub use domain::value_objects::DeployStage;
pub use error::{DeployError, DeployResult};
