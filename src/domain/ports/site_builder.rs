//! Site Builder Port
//!
//! Runs the external static-site generator for one site.

use std::path::Path;

use crate::config::BuildSettings;
use crate::error::DeployResult;

/// Produces a site's output tree.
///
/// Implementations must scope any working-directory change to the build
/// itself; the process-wide working directory is never touched.
pub trait SiteBuilder {
    /// Build the site in `site_dir`, failing with `DeployError::Build` on a
    /// non-zero generator exit
    fn build(&self, site_dir: &Path, settings: &BuildSettings) -> DeployResult<()>;
}
