//! Remote Store Port
//!
//! Abstracts the file server a site is mirrored to. One session is opened
//! per deploy and closed once every file has been written.

use std::io::Read;

use thiserror::Error;

use crate::config::FtpSettings;

/// Error from a remote store operation
#[derive(Debug, Clone, Error)]
pub enum TransferError {
    /// Could not reach the server
    #[error("connection error: {0}")]
    Connection(String),
    /// Server refused the credentials
    #[error("login rejected: {0}")]
    Login(String),
    /// Server answered a command with an error reply
    #[error("server rejected command: {0}")]
    Rejected(String),
    /// Local or socket I/O failed mid-transfer
    #[error("I/O error: {0}")]
    Io(String),
}

/// An authenticated session on the remote file server
pub trait RemoteStore {
    /// Create one directory (not recursive)
    fn make_dir(&mut self, path: &str) -> Result<(), TransferError>;

    /// Whether a directory exists
    fn dir_exists(&mut self, path: &str) -> Result<bool, TransferError>;

    /// Stream `reader` to `path`, replacing any existing file
    fn put(&mut self, path: &str, reader: &mut dyn Read) -> Result<u64, TransferError>;

    /// End the session cleanly
    fn close(self: Box<Self>) -> Result<(), TransferError>;
}

/// Opens authenticated [`RemoteStore`] sessions
pub trait RemoteConnector {
    fn connect(&self, settings: &FtpSettings) -> Result<Box<dyn RemoteStore>, TransferError>;
}
