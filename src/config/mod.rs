//! Configuration for sitedeploy
//!
//! Two layers, both YAML:
//! 1. Global config (`sites_config.yaml`, next to the executable): base path and site list
//! 2. Site config (`deploy_config.yaml`, inside each site directory): name, FTP target, build

mod loader;
mod types;

pub use loader::{
    expand_home, load_document, resolve_global_config_path, GLOBAL_CONFIG_FILE,
    SITE_CONFIG_FILE,
};
pub use types::{BuildSettings, FtpSettings, GlobalConfig, SiteConfig};
