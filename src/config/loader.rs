//! Configuration file discovery and parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::error::{DeployError, DeployResult};

/// Default global config file name, resolved next to the executable
pub const GLOBAL_CONFIG_FILE: &str = "sites_config.yaml";

/// Site config file name, looked up inside each site directory
pub const SITE_CONFIG_FILE: &str = "deploy_config.yaml";

/// Read and parse a YAML document.
///
/// An empty file parses as `Value::Null`; key presence is checked by callers.
pub fn load_document(path: &Path) -> DeployResult<Value> {
    if !path.exists() {
        return Err(DeployError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml_ng::from_str(&content).map_err(|e| DeployError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the global config path relative to the running executable.
///
/// The working directory plays no part; an absolute `config` is returned as is.
pub fn resolve_global_config_path(config: &Path) -> DeployResult<PathBuf> {
    if config.is_absolute() {
        return Ok(config.to_path_buf());
    }
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(config))
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
