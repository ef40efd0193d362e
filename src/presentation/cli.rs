//! CLI Argument Parsing
//!
//! Flat flag set, no subcommands: list the configured sites, deploy one, or
//! deploy them all.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::GLOBAL_CONFIG_FILE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// sitedeploy - build static sites and mirror them to an FTP server
#[derive(Parser, Debug)]
#[command(name = "sitedeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "With no flags, every configured site is deployed in order.")]
pub struct Cli {
    /// Global configuration file, resolved next to the executable
    #[arg(long, default_value = GLOBAL_CONFIG_FILE)]
    pub config: PathBuf,

    /// Deploy only this site (must be listed in the global configuration)
    #[arg(long)]
    pub site: Option<String>,

    /// List all configured sites and exit
    #[arg(long)]
    pub list_sites: bool,

    /// Keep deploying the remaining sites after one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
