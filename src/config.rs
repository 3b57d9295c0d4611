//! # Runtime Configuration
//!
//! Process-level settings for the command-line tool, loaded from environment
//! variables. These never change validation rules; they only pick the log
//! shape, the output format and whether git settings are checked by default.

use std::fmt;
use std::str::FromStr;

use crate::env::{Environment, ProcessEnvironment};

/// Output encoding for the defaulted document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Runtime configuration
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Log level used when `RUST_LOG` is unset (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Validate git settings unless the command line says otherwise
    pub validate_git: bool,
    pub output: OutputFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            log_format: "text".to_string(),
            validate_git: false,
            output: OutputFormat::Yaml,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from the process environment with defaults
    pub fn from_env() -> Self {
        Self::from_environment(&ProcessEnvironment)
    }

    pub fn from_environment<E: Environment + ?Sized>(env: &E) -> Self {
        let defaults = Self::default();
        Self {
            log_level: env_var_or_default_str(env, "LOG_LEVEL", &defaults.log_level),
            log_format: env_var_or_default_str(env, "LOG_FORMAT", &defaults.log_format),
            validate_git: env_var_or_default_bool(
                env,
                "CLUSTER_CONFIG_VALIDATE_GIT",
                defaults.validate_git,
            ),
            output: env_var_or_default(env, "CLUSTER_CONFIG_OUTPUT", defaults.output),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub fn default_filter(&self) -> String {
        format!("cluster_config={}", self.log_level.to_lowercase())
    }
}

/// Read environment variable or return default value
fn env_var_or_default<E, T>(env: &E, key: &str, default: T) -> T
where
    E: Environment + ?Sized,
    T: FromStr,
{
    env.var(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool<E: Environment + ?Sized>(env: &E, key: &str, default: bool) -> bool {
    env.var(key)
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}

/// Read environment variable as string or return default
fn env_var_or_default_str<E: Environment + ?Sized>(env: &E, key: &str, default: &str) -> String {
    env.var(key).unwrap_or_else(|| default.to_string())
}
