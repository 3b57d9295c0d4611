//! # Global Defaults
//!
//! Cluster name, applied for every track.

use tracing::warn;

use crate::constants::{CLUSTER_NAME_PREFIX, DEFAULT_CLUSTER_NAME_COMPONENT, ENV_USER};
use crate::env::Environment;
use crate::spec::ClusterSpec;

/// Default the cluster name to `wk-<user>`, or `wk-cluster` when the user is unknown
pub fn set_default_global_values<E: Environment + ?Sized>(spec: &mut ClusterSpec, env: &E) {
    if spec.cluster_name.is_empty() {
        let component = env
            .var(ENV_USER)
            .unwrap_or_else(|| DEFAULT_CLUSTER_NAME_COMPONENT.to_string());
        spec.cluster_name = format!("{CLUSTER_NAME_PREFIX}{component}");
        warn!("clusterName not set, defaulting to {}", spec.cluster_name);
    }
}
