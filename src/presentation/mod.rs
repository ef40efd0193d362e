//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Running the selected action and rendering plain/JSON output
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `runner` - Entry point logic behind `main`

pub mod cli;
pub mod factory;
pub mod runner;

pub use cli::{Cli, ColorWhen};
pub use factory::create_deploy_use_case;
pub use runner::run;
