//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `build/` - Site generator subprocess
//! - `transfer/` - FTP remote store
//! - `logging/` - Per-site log files
//! - `events/` - Console and NDJSON event sinks

pub mod build;
pub mod events;
pub mod logging;
pub mod transfer;

// Re-export for convenience
pub use build::GeneratorBuilder;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use logging::FileLogFactory;
pub use transfer::FtpConnector;
