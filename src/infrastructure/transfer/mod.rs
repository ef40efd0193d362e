//! Remote store implementations

mod ftp;

pub use ftp::{FtpConnector, FtpSession};
