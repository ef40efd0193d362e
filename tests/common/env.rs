//! Test environment builder for isolated sitedeploy testing.
//!
//! Provides `TestEnv` - a temp base directory holding `sites_config.yaml`
//! and one directory per site, plus helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a sitedeploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp base directory.
pub struct TestEnv {
    pub base: TempDir,
    /// Directory holding fake generator scripts
    pub tools: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Path relative to the base directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.base.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("sites_config.yaml")
    }

    /// Run the CLI with `--config <abs path>` prepended
    pub fn run(&self, args: &[&str]) -> TestResult {
        let config = self.config_path();
        let mut full = vec!["--config", config.to_str().unwrap()];
        full.extend_from_slice(args);
        self.run_raw(&full)
    }

    /// Run the CLI with exactly `args`
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.base.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env("LANG", "C")
            .output()
            .expect("Failed to execute sitedeploy");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    sites: Vec<String>,
    site_configs: Vec<(String, String)>,
    generator: Option<String>,
}

impl TestEnvBuilder {
    /// List a site in the global config
    pub fn with_site(mut self, site: &str) -> Self {
        self.sites.push(site.to_string());
        self
    }

    /// Write `deploy_config.yaml` for a site
    pub fn with_site_config(mut self, site: &str, yaml: &str) -> Self {
        self.site_configs.push((site.to_string(), yaml.to_string()));
        self
    }

    /// Shell body of a fake generator every site config is pointed at
    pub fn with_generator(mut self, body: &str) -> Self {
        self.generator = Some(body.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let base = TempDir::new().expect("Failed to create base dir");
        let tools = TempDir::new().expect("Failed to create tools dir");

        let generator = self
            .generator
            .map(|body| write_script(tools.path(), "generator.sh", &body));

        let sites_yaml: String = self.sites.iter().map(|s| format!("  - {s}\n")).collect();
        std::fs::write(
            base.path().join("sites_config.yaml"),
            format!(
                "base_path: \"{}\"\nsites:\n{}",
                base.path().display(),
                sites_yaml
            ),
        )
        .expect("Failed to write global config");

        for (site, yaml) in &self.site_configs {
            let dir = base.path().join(site);
            std::fs::create_dir_all(&dir).expect("Failed to create site dir");
            let mut content = yaml.clone();
            if let Some(generator) = &generator {
                content.push_str(&format!("build:\n  command: \"{}\"\n", generator.display()));
            }
            std::fs::write(dir.join("deploy_config.yaml"), content)
                .expect("Failed to write site config");
        }

        TestEnv {
            base,
            tools,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sitedeploy")),
        }
    }
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");
    }
    path
}

/// A local port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("addr").port()
}
