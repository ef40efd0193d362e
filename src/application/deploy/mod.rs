//! Deploy Module
//!
//! Orchestrates one site's deploy.
//!
//! ## Structure
//!
//! - `result` - Outcome of a successful deploy (`DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sitedeploy::application::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(builder, connector, logs).with_events(sink);
//! let outcome = use_case.deploy("blog", &site_dir)?;
//! ```

mod result;
mod use_case;

pub use result::DeployOutcome;
pub use use_case::{log_file_path, DeployUseCase};
