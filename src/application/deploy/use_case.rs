//! Deploy Use Case
//!
//! Runs one site through `Init -> ConfigLoaded -> Built -> Uploaded -> Done`.
//! A failing step moves the site to `Failed`, gets logged and reported, and
//! is returned to the caller; later steps never run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::upload::upload_tree;
use crate::config::SiteConfig;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, DeployLogFactory, NoopEventSink, RemoteConnector, SiteBuilder,
};
use crate::domain::value_objects::DeployStage;
use crate::error::{DeployError, DeployResult};

use super::result::DeployOutcome;

/// Per-site log file: `<parent of site dir>/logs/deploy_<site_name>.log`
pub fn log_file_path(site_dir: &Path, site_name: &str) -> PathBuf {
    let parent = site_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    parent
        .join("logs")
        .join(format!("deploy_{}.log", site_name))
}

/// Deploy use case - orchestrates a single site's deploy
///
/// Parameterized by its ports so tests can swap in fakes. Holds no state
/// between sites; one instance can deploy any number of sites in sequence.
pub struct DeployUseCase<B, C, L>
where
    B: SiteBuilder,
    C: RemoteConnector,
    L: DeployLogFactory,
{
    builder: B,
    connector: C,
    logs: L,
    events: Arc<dyn DeployEventSink>,
}

impl<B, C, L> DeployUseCase<B, C, L>
where
    B: SiteBuilder,
    C: RemoteConnector,
    L: DeployLogFactory,
{
    pub fn new(builder: B, connector: C, logs: L) -> Self {
        Self {
            builder,
            connector,
            logs,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Route progress events to `events`
    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn events(&self) -> &Arc<dyn DeployEventSink> {
        &self.events
    }

    #[cfg(test)]
    pub(super) fn builder(&self) -> &B {
        &self.builder
    }

    /// Deploy the site `site` living in `site_dir`
    pub fn deploy(&self, site: &str, site_dir: &Path) -> DeployResult<DeployOutcome> {
        self.events.on_event(DeployEvent::SiteStarted {
            site: site.to_string(),
            path: site_dir.to_path_buf(),
        });

        // The log file is named after the site config, so nothing can be
        // logged to it until the config has loaded.
        let (config, site_name) = match SiteConfig::load(site_dir)
            .and_then(|config| config.site_name().map(|name| (config, name)))
        {
            Ok(loaded) => loaded,
            Err(err) => return Err(self.fail(site, None, DeployStage::Init, err)),
        };

        let dispatch = match self.logs.open(&log_file_path(site_dir, &site_name)) {
            Ok(dispatch) => dispatch,
            Err(err) => {
                return Err(self.fail(site, Some(site_name), DeployStage::Init, err));
            }
        };

        let mut stage = DeployStage::Init;
        let result = tracing::dispatcher::with_default(&dispatch, || {
            self.advance(site, &mut stage);
            self.run_steps(site, site_dir, &config, &mut stage)
        });

        match result {
            Ok((files, bytes)) => {
                tracing::dispatcher::with_default(&dispatch, || {
                    info!("Deployment completed for {}", site_name);
                    self.advance(site, &mut stage);
                });
                self.events.on_event(DeployEvent::SiteSucceeded {
                    site: site.to_string(),
                    site_name: site_name.clone(),
                    files: files.len(),
                });
                Ok(DeployOutcome {
                    site: site.to_string(),
                    site_name,
                    stage,
                    files,
                    bytes,
                })
            }
            Err(err) => {
                tracing::dispatcher::with_default(&dispatch, || {
                    error!("Deployment failed for {}: {}", site_name, err);
                });
                Err(self.fail(site, Some(site_name), stage, err))
            }
        }
    }

    /// `ConfigLoaded -> Built -> Uploaded`
    fn run_steps(
        &self,
        site: &str,
        site_dir: &Path,
        config: &SiteConfig,
        stage: &mut DeployStage,
    ) -> DeployResult<(Vec<String>, u64)> {
        debug!(config = %config.path().display(), "site config loaded");
        let build = config.build()?;
        info!("Building site...");
        self.builder.build(site_dir, &build)?;
        self.advance(site, stage);

        info!("Starting FTP upload...");
        let ftp = config.ftp()?;
        self.warn(
            site,
            format!(
                "FTP to {}:{} is unencrypted; credentials are sent in clear text",
                ftp.host, ftp.port
            ),
        );

        let mut store = self
            .connector
            .connect(&ftp)
            .map_err(|e| DeployError::TransferAuth {
                host: ftp.host.clone(),
                port: ftp.port,
                message: e.to_string(),
            })?;

        let output_root = site_dir.join(&build.output_dir);
        let report = upload_tree(store.as_mut(), &output_root, &ftp.path, site, &*self.events)?;
        if report.dir_warnings > 0 {
            warn!(
                "{} remote directories could not be created or verified",
                report.dir_warnings
            );
        }

        if let Err(err) = store.close() {
            self.warn(site, format!("closing FTP session failed: {}", err));
        }
        self.advance(site, stage);

        Ok((report.files, report.bytes))
    }

    fn advance(&self, site: &str, stage: &mut DeployStage) {
        if let Some(next) = stage.next() {
            *stage = next;
            tracing::debug!(stage = %next, "stage");
            self.events.on_event(DeployEvent::StageChanged {
                site: site.to_string(),
                stage: next,
            });
        }
    }

    fn warn(&self, site: &str, message: String) {
        warn!("{}", message);
        self.events.on_event(DeployEvent::Warning {
            site: site.to_string(),
            message,
        });
    }

    fn fail(
        &self,
        site: &str,
        site_name: Option<String>,
        stage: DeployStage,
        err: DeployError,
    ) -> DeployError {
        self.events.on_event(DeployEvent::StageChanged {
            site: site.to_string(),
            stage: DeployStage::Failed,
        });
        self.events.on_event(DeployEvent::SiteFailed {
            site: site.to_string(),
            site_name,
            stage,
            kind: err.kind(),
            error: err.to_string(),
        });
        err
    }
}
