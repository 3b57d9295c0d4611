//! # cluster-config
//!
//! Command-line front end for the cluster configuration validator.
//!
//! ```bash
//! # Validate and print the defaulted document
//! cluster-config validate config.yaml
//!
//! # Also check git settings, printing JSON
//! cluster-config validate config.yaml --git --output json
//!
//! # JSON Schema of the document
//! cluster-config schema
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use cluster_config::{
    load_config, ClusterSpec, ConfigError, Engine, OutputFormat, ProcessEnvironment, RuntimeConfig,
    ValidationOptions,
};

/// Cluster configuration validator
#[derive(Parser)]
#[command(name = "cluster-config")]
#[command(about = "Validate and default cluster configuration documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration document and print it with defaults applied
    Validate {
        /// Path to the configuration document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Validate git provider settings
        #[arg(long, conflicts_with = "git_from_spec")]
        git: bool,

        /// Validate git provider settings only when the document names a provider or URL
        #[arg(long)]
        git_from_spec: bool,

        /// Output format (defaults to CLUSTER_CONFIG_OUTPUT, then yaml)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Print the JSON Schema of the configuration document
    Schema,
    /// Print version and build information
    Version,
}

fn main() -> Result<ExitCode> {
    let config = RuntimeConfig::from_env();
    init_tracing(&config);

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            file,
            git,
            git_from_spec,
            output,
        } => validate_command(&config, file, git, git_from_spec, output),
        Commands::Schema => {
            let schema = schemars::schema_for!(ClusterSpec);
            println!(
                "{}",
                serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            println!(
                "cluster-config {} ({}, built {})",
                env!("CARGO_PKG_VERSION"),
                env!("BUILD_GIT_HASH"),
                env!("BUILD_DATETIME")
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(config: &RuntimeConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_filter().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn validate_command(
    config: &RuntimeConfig,
    file: PathBuf,
    git: bool,
    git_from_spec: bool,
    output: Option<OutputFormat>,
) -> Result<ExitCode> {
    let spec = match load_config(&file) {
        Ok(spec) => spec,
        Err(e) => return Ok(reject(&e)),
    };

    let options = if git {
        ValidationOptions { validate_git: true }
    } else if git_from_spec {
        ValidationOptions::from_git_intent(&spec)
    } else {
        ValidationOptions {
            validate_git: config.validate_git,
        }
    };

    let spec = match Engine::new(ProcessEnvironment).with_options(options).validate(spec) {
        Ok(spec) => spec,
        Err(e) => return Ok(reject(&e)),
    };
    info!("Validated {}", file.display());

    let rendered = match output.unwrap_or(config.output) {
        OutputFormat::Yaml => {
            serde_yaml::to_string(&spec).context("Failed to serialize configuration as YAML")?
        }
        OutputFormat::Json => serde_json::to_string_pretty(&spec)
            .context("Failed to serialize configuration as JSON")?,
    };
    println!("{}", rendered.trim_end());
    Ok(ExitCode::SUCCESS)
}

/// Report a configuration error and pick the failure exit code
fn reject(e: &ConfigError) -> ExitCode {
    debug!(kind = ?e.kind(), "Cluster configuration rejected: {}", e);
    eprintln!("{e}");
    ExitCode::FAILURE
}
