//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - One site: load config, build, upload, record outcome
//! - `run` - Site selection and the sequential multi-site loop
//!
//! ## Services
//!
//! - `upload_tree` - Mirror a local output root onto a remote store

pub mod deploy;
pub mod run;
pub mod upload;

pub use deploy::{log_file_path, DeployOutcome, DeployUseCase};
pub use run::{deploy_sites, select_sites, RunSummary};
pub use upload::{upload_tree, UploadReport};
