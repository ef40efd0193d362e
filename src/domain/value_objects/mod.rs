//! Value Objects
//!
//! Immutable types with no identity, compared by value.

mod deploy_stage;
pub mod remote_path;

pub use deploy_stage::DeployStage;
