//! # Loader
//!
//! Reads a cluster configuration document into a [`ClusterSpec`].
//!
//! Loading only parses. Unknown keys are ignored and absent fields take their
//! defaults; checking the result is the engine's job.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::spec::ClusterSpec;

/// Parse a YAML document
///
/// An empty document yields an empty specification.
pub fn from_yaml_str(content: &str) -> Result<ClusterSpec, ConfigError> {
    if content.trim().is_empty() {
        return Ok(ClusterSpec::default());
    }
    let spec: Option<ClusterSpec> = serde_yaml::from_str(content)?;
    Ok(spec.unwrap_or_default())
}

/// Read and parse the YAML document at `path`
pub fn load_config(path: impl AsRef<Path>) -> Result<ClusterSpec, ConfigError> {
    let path = path.as_ref();
    debug!("Loading cluster configuration from {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::io(&path.display().to_string(), e))?;
    from_yaml_str(&content)
}
