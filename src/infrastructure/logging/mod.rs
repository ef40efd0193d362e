//! Per-site log files

mod file_log;

pub use file_log::{FileLogFactory, LogLineFormat};
