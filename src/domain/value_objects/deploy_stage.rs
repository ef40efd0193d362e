//! Deploy Stage Value Object
//!
//! The per-site deploy is a linear state machine:
//! `Init -> ConfigLoaded -> Built -> Uploaded -> Done`, with `Failed`
//! reachable from any non-terminal stage.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStage {
    Init,
    ConfigLoaded,
    Built,
    Uploaded,
    Done,
    Failed,
}

impl DeployStage {
    /// The stage that follows a successful step, if any
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Init => Some(Self::ConfigLoaded),
            Self::ConfigLoaded => Some(Self::Built),
            Self::Built => Some(Self::Uploaded),
            Self::Uploaded => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ConfigLoaded => "config_loaded",
            Self::Built => "built",
            Self::Uploaded => "uploaded",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
