//! # EKS Configuration
//!
//! Settings for the managed EKS track.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// EKS cluster settings (`eksConfig`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EksConfig {
    /// Kubernetes release, exactly "1.14" or "1.15"
    #[serde(default)]
    pub kubernetes_version: String,
    /// AWS region the cluster is created in
    #[serde(default)]
    pub cluster_region: String,
    /// Path to an eksctl managed node group definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_node_group_file: Option<String>,
    /// Unmanaged node groups; one default group is created when empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_groups: Vec<NodeGroup>,
}

/// Pool of worker instances sharing an instance type and capacity
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroup {
    /// Group name (default: "ng-<index>")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// EC2 instance type
    #[serde(default)]
    pub instance_type: String,
    /// Desired number of instances, at least 1 (default: 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i64>,
}
