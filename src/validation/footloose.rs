//! # Footloose Validation
//!
//! Checks the node layout for the wks-footloose track.

use crate::constants::{FOOTLOOSE_BACKEND_DOCKER, FOOTLOOSE_BACKEND_IGNITE};
use crate::error::ConfigError;
use crate::spec::{FootlooseBackend, FootlooseConfig};

/// Validate footlooseConfig
pub fn check_required_footloose_values(
    footloose: &FootlooseConfig,
) -> Result<FootlooseBackend, ConfigError> {
    if footloose.backend.is_empty() {
        return Err(ConfigError::MissingField(
            "A footloose backend must be specified".to_string(),
        ));
    }

    let Some(backend) = FootlooseBackend::parse(&footloose.backend) else {
        return Err(ConfigError::InvalidEnum(format!(
            "A footloose backend must be either '{FOOTLOOSE_BACKEND_DOCKER}' or '{FOOTLOOSE_BACKEND_IGNITE}'"
        )));
    };

    if footloose.control_plane_nodes < 1 {
        return Err(ConfigError::CountConstraint(
            "A footloose specification must have at least one control plane node".to_string(),
        ));
    }

    if footloose.worker_nodes < 1 {
        return Err(ConfigError::CountConstraint(
            "A footloose specification must have at least one worker node".to_string(),
        ));
    }

    Ok(backend)
}
