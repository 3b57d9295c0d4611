//! # EKS Validation
//!
//! Checks the managed EKS track settings.

use crate::constants::EKS_KUBERNETES_VERSIONS;
use crate::error::ConfigError;
use crate::spec::{non_empty, EksConfig};

use super::primitives::validate_file_exists;

/// Validate eksConfig
pub fn check_required_eks_values(eks: &EksConfig) -> Result<(), ConfigError> {
    if eks.kubernetes_version.is_empty() {
        return Err(ConfigError::MissingField(
            "A Kubernetes version must be specified".to_string(),
        ));
    }

    if eks.cluster_region.is_empty() {
        return Err(ConfigError::must_be_specified("clusterRegion"));
    }

    if !EKS_KUBERNETES_VERSIONS.contains(&eks.kubernetes_version.as_str()) {
        let allowed = EKS_KUBERNETES_VERSIONS
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(ConfigError::OutOfRange(format!(
            "Kubernetes version must be one of: {allowed}"
        )));
    }

    if let Some(path) = non_empty(eks.managed_node_group_file.as_ref()) {
        validate_file_exists(path, "managedNodeGroupFile")?;
    }

    if eks
        .node_groups
        .iter()
        .any(|group| group.desired_capacity.is_some_and(|capacity| capacity < 1))
    {
        return Err(ConfigError::CountConstraint(
            "A node group must have a capacity of at least 1".to_string(),
        ));
    }

    Ok(())
}
