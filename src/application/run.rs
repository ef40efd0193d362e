//! Multi-site run
//!
//! Sites deploy strictly one after another in configured order. By default
//! the first failure stops the run; with `keep_going` every selected site is
//! attempted and the failures are collected.

use crate::config::GlobalConfig;
use crate::domain::ports::{DeployEvent, DeployLogFactory, RemoteConnector, SiteBuilder};
use crate::error::{DeployError, DeployResult};

use super::deploy::{DeployOutcome, DeployUseCase};

/// Result of deploying a list of sites
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<DeployOutcome>,
    /// Only populated in keep-going mode
    pub failed: Vec<(String, DeployError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sites to deploy: just `site` when given (it must be configured), else all
pub fn select_sites(config: &GlobalConfig, site: Option<&str>) -> DeployResult<Vec<String>> {
    match site {
        Some(site) if !config.contains(site) => Err(DeployError::SiteNotConfigured {
            site: site.to_string(),
        }),
        Some(site) => Ok(vec![site.to_string()]),
        None => Ok(config.sites.clone()),
    }
}

/// Deploy `sites` in order.
///
/// Without `keep_going` the first error is returned as is and the remaining
/// sites are not attempted. `RunFinished` is emitted either way.
pub fn deploy_sites<B, C, L>(
    use_case: &DeployUseCase<B, C, L>,
    config: &GlobalConfig,
    sites: &[String],
    keep_going: bool,
) -> DeployResult<RunSummary>
where
    B: SiteBuilder,
    C: RemoteConnector,
    L: DeployLogFactory,
{
    let mut summary = RunSummary::default();

    for site in sites {
        match use_case.deploy(site, &config.site_path(site)) {
            Ok(outcome) => summary.succeeded.push(outcome),
            Err(err) if keep_going => summary.failed.push((site.clone(), err)),
            Err(err) => {
                use_case.events().on_event(DeployEvent::RunFinished {
                    succeeded: summary.succeeded.len(),
                    failed: 1,
                });
                return Err(err);
            }
        }
    }

    use_case.events().on_event(DeployEvent::RunFinished {
        succeeded: summary.succeeded.len(),
        failed: summary.failed.len(),
    });

    Ok(summary)
}
