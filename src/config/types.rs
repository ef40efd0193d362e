//! Configuration types

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml_ng::Value;

use super::loader::{expand_home, load_document, SITE_CONFIG_FILE};
use crate::error::{DeployError, DeployResult};

/// Global configuration: where sites live and which ones to deploy.
///
/// Read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Directory under which every site directory lives
    pub base_path: PathBuf,
    /// Site identifiers in deploy order (duplicates are kept)
    pub sites: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GlobalConfigFile {
    base_path: Option<String>,
    sites: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            sites: Vec::new(),
        }
    }
}

impl GlobalConfig {
    /// Load the global config file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let document = load_document(path)?;
        Self::from_document(path, document)
    }

    /// Build from an already-parsed YAML document
    pub fn from_document(path: &Path, document: Value) -> DeployResult<Self> {
        if document.is_null() {
            return Ok(Self::default());
        }

        let file: GlobalConfigFile =
            serde_yaml_ng::from_value(document).map_err(|e| DeployError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self {
            base_path: expand_home(file.base_path.as_deref().unwrap_or(".")),
            sites: file.sites,
        })
    }

    /// Whether `site` is listed
    pub fn contains(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Local directory of a site
    pub fn site_path(&self, site: &str) -> PathBuf {
        self.base_path.join(site)
    }
}

/// Per-site configuration.
///
/// Keys are resolved lazily: a missing key surfaces as
/// [`DeployError::MissingKey`] when it is first needed, not at load time.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    path: PathBuf,
    document: Value,
}

impl SiteConfig {
    /// Load `deploy_config.yaml` from a site directory
    pub fn load(site_dir: &Path) -> DeployResult<Self> {
        let path = site_dir.join(SITE_CONFIG_FILE);
        let document = load_document(&path)?;
        Ok(Self::from_document(path, document))
    }

    pub fn from_document(path: PathBuf, document: Value) -> Self {
        Self { path, document }
    }

    /// Path of the file this config came from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Site name, used for log file naming and console messages
    pub fn site_name(&self) -> DeployResult<String> {
        self.required_string("site_name")
    }

    /// FTP connection settings
    pub fn ftp(&self) -> DeployResult<FtpSettings> {
        Ok(FtpSettings {
            host: self.required_string("ftp.host")?,
            port: self.port("ftp.port")?,
            user: self.required_string("ftp.user")?,
            password: self.required_string("ftp.password")?,
            path: self.required_string("ftp.path")?,
        })
    }

    /// Generator settings; every key is optional
    pub fn build(&self) -> DeployResult<BuildSettings> {
        let defaults = BuildSettings::default();
        Ok(BuildSettings {
            command: self
                .optional_string("build.command")?
                .unwrap_or(defaults.command),
            output_dir: self
                .optional_string("build.output_dir")?
                .unwrap_or(defaults.output_dir),
        })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.document, |value, part| value.get(part))
            .filter(|v| !v.is_null())
    }

    fn missing(&self, key: &str) -> DeployError {
        DeployError::MissingKey {
            file: self.path.clone(),
            key: key.to_string(),
        }
    }

    fn required_string(&self, key: &str) -> DeployResult<String> {
        self.optional_string(key)?.ok_or_else(|| self.missing(key))
    }

    fn optional_string(&self, key: &str) -> DeployResult<Option<String>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(self.missing(key)),
        }
    }

    fn port(&self, key: &str) -> DeployResult<u16> {
        match self.lookup(key) {
            None => Ok(FtpSettings::DEFAULT_PORT),
            Some(value) => value
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
                .ok_or_else(|| self.missing(key)),
        }
    }
}

/// Transfer server credentials and destination
#[derive(Clone, PartialEq, Eq)]
pub struct FtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Remote base directory, always slash-separated
    pub path: String,
}

impl FtpSettings {
    pub const DEFAULT_PORT: u16 = 21;
}

impl fmt::Debug for FtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("path", &self.path)
            .finish()
    }
}

/// How the site generator is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Generator executable, looked up on `PATH`
    pub command: String,
    /// Output directory relative to the site directory
    pub output_dir: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            command: "hugo".to_string(),
            output_dir: "public".to_string(),
        }
    }
}
