//! Domain Layer
//!
//! Pure deploy logic: value types and the ports that infrastructure implements.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DeployStage, remote paths)
//! - `ports/` - Interface definitions for infrastructure (builder, remote store, events, logs)

pub mod ports;
pub mod value_objects;
