//! pkgcheck command line
//!
//! Exit status is 0 when the report stays below the failure threshold, 1 when
//! it reaches it, and 2 when the run could not complete.

use clap::Parser;
use pkgcheck::domain::Severity;
use pkgcheck::infrastructure::logging::init_logging;
use pkgcheck::infrastructure::{AppConfig, ConfigLoader, ReportFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for pkgcheck
#[derive(Parser, Debug)]
#[command(name = "pkgcheck")]
#[command(about = "Register schema documents and run policy checks over content packages")]
#[command(version)]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schema document to register (URL or file path)
    #[arg(long = "cnd", value_name = "URL")]
    documents: Vec<String>,

    /// Directory searched recursively for schema documents
    #[arg(long = "cnd-dir", value_name = "DIR")]
    directories: Vec<PathBuf>,

    /// Schema document registered once after the main set
    #[arg(long = "post-install-cnd", value_name = "URL")]
    post_install: Vec<String>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Lowest severity that fails the run
    #[arg(long, value_name = "SEVERITY", value_parser = parse_severity)]
    fail_on: Option<Severity>,

    /// Package descriptor files
    #[arg(required = true, value_name = "PACKAGE")]
    packages: Vec<PathBuf>,
}

fn parse_severity(value: &str) -> Result<Severity, String> {
    value.parse().map_err(|e: pkgcheck::domain::Error| e.to_string())
}

impl Cli {
    /// Apply command line overrides on top of loaded configuration
    fn apply(&self, config: &mut AppConfig) {
        config.schema.documents.extend(self.documents.iter().cloned());
        config
            .schema
            .directories
            .extend(self.directories.iter().cloned());
        config
            .schema
            .post_install
            .extend(self.post_install.iter().cloned());
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(severity) = self.fail_on {
            config.report.fail_on = severity.to_string();
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<bool> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    cli.apply(&mut config);

    init_logging(config.logging.clone())?;

    let outcome = pkgcheck::run(&config, &cli.packages)?;
    println!("{}", outcome.render(config.report.format));
    Ok(outcome.failed())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
