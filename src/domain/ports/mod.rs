//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod deploy_log;
pub mod remote_store;
pub mod site_builder;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deploy_log::{DeployLogFactory, NoopLogFactory};
pub use remote_store::{RemoteConnector, RemoteStore, TransferError};
pub use site_builder::SiteBuilder;
