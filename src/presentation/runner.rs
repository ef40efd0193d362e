//! Runner
//!
//! Resolves and loads the global config, then lists sites or deploys the
//! selected ones. Anything that goes wrong before the first site starts is
//! fatal for the whole run.

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::application::{deploy_sites, select_sites};
use crate::config::{resolve_global_config_path, GlobalConfig};
use crate::error::DeployError;
use crate::ui::UiContext;

use super::cli::Cli;
use super::factory::create_deploy_use_case;

/// Run the CLI. `Ok(false)` means at least one site failed in keep-going mode.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<bool> {
    let config = load_global_config(cli)?;

    if cli.list_sites {
        list_sites(&config, cli.json, out)?;
        return Ok(true);
    }

    let sites = select_sites(&config, cli.site.as_deref())?;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let use_case = create_deploy_use_case(&ui);
    let summary = deploy_sites(&use_case, &config, &sites, cli.keep_going)?;

    Ok(summary.is_success())
}

fn load_global_config(cli: &Cli) -> Result<GlobalConfig> {
    let path = resolve_global_config_path(&cli.config)?;
    GlobalConfig::load(&path).map_err(|err| match err {
        DeployError::ConfigNotFound { path } => {
            anyhow!("Global config not found: {}", path.display())
        }
        other => other.into(),
    })
}

/// Print the configured site identifiers in their configured order
pub fn list_sites(config: &GlobalConfig, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "event": "sites",
            "sites": config.sites,
        });
        writeln!(out, "{}", output)?;
        return Ok(());
    }

    writeln!(out, "Configured sites:")?;
    for site in &config.sites {
        writeln!(out, "- {}", site)?;
    }
    Ok(())
}
