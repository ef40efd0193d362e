//! FTP Remote Store
//!
//! Plain FTP over `suppaftp`. Control and data channels are unencrypted, so
//! credentials cross the network in clear text.

use std::io::Read;

use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};
use tracing::{debug, trace};

use crate::config::FtpSettings;
use crate::domain::ports::{RemoteConnector, RemoteStore, TransferError};

/// Opens FTP sessions from site settings
#[derive(Debug, Default, Clone, Copy)]
pub struct FtpConnector;

impl FtpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteConnector for FtpConnector {
    fn connect(&self, settings: &FtpSettings) -> Result<Box<dyn RemoteStore>, TransferError> {
        debug!(host = %settings.host, port = settings.port, "connecting");
        let mut stream = FtpStream::connect((settings.host.as_str(), settings.port))
            .map_err(|e| TransferError::Connection(e.to_string()))?;

        stream
            .login(settings.user.as_str(), settings.password.as_str())
            .map_err(|e| TransferError::Login(e.to_string()))?;
        stream
            .transfer_type(FileType::Binary)
            .map_err(map_ftp_error)?;

        debug!(user = %settings.user, "logged in");
        Ok(Box::new(FtpSession { stream }))
    }
}

/// An authenticated FTP session
pub struct FtpSession {
    stream: FtpStream,
}

impl RemoteStore for FtpSession {
    fn make_dir(&mut self, path: &str) -> Result<(), TransferError> {
        trace!(path, "MKD");
        self.stream.mkdir(path).map_err(map_ftp_error)
    }

    fn dir_exists(&mut self, path: &str) -> Result<bool, TransferError> {
        let previous = self.stream.pwd().map_err(map_ftp_error)?;
        match self.stream.cwd(path) {
            Ok(()) => {
                self.stream.cwd(&previous).map_err(map_ftp_error)?;
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(_)) => Ok(false),
            Err(e) => Err(map_ftp_error(e)),
        }
    }

    fn put(&mut self, path: &str, mut reader: &mut dyn Read) -> Result<u64, TransferError> {
        trace!(path, "STOR");
        self.stream
            .put_file(path, &mut reader)
            .map_err(map_ftp_error)
    }

    fn close(mut self: Box<Self>) -> Result<(), TransferError> {
        self.stream.quit().map_err(map_ftp_error)
    }
}

fn map_ftp_error(err: FtpError) -> TransferError {
    match err {
        FtpError::ConnectionError(e) => TransferError::Io(e.to_string()),
        other => TransferError::Rejected(other.to_string()),
    }
}
