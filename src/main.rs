//! sitedeploy CLI
//!
//! Usage: sitedeploy [--config <path>] [--site <name>] [--list-sites]

use std::process::ExitCode;

use clap::Parser;
use sitedeploy::presentation::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli, &mut std::io::stdout()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
