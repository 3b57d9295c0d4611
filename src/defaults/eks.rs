//! # EKS Defaults
//!
//! Node group names and capacities for the eks track.

use tracing::warn;

use crate::constants::{
    DEFAULT_NODE_GROUP_CAPACITY, DEFAULT_NODE_GROUP_INSTANCE_TYPE, NODE_GROUP_NAME_PREFIX,
};
use crate::spec::{non_empty, EksConfig, NodeGroup};

/// Default EKS node groups
///
/// With no node groups, one `ng-0` group of three `m5.large` instances is
/// created. Otherwise unnamed groups become `ng-<index>` and groups without a
/// capacity get three instances; instance types are left as given.
pub fn set_default_eks_values(eks: &mut EksConfig) {
    if eks.node_groups.is_empty() {
        let name = node_group_name(0);
        warn!(
            "nodeGroups not set, defaulting to {} with {} x {}",
            name, DEFAULT_NODE_GROUP_CAPACITY, DEFAULT_NODE_GROUP_INSTANCE_TYPE
        );
        eks.node_groups.push(NodeGroup {
            name: Some(name),
            instance_type: DEFAULT_NODE_GROUP_INSTANCE_TYPE.to_string(),
            desired_capacity: Some(DEFAULT_NODE_GROUP_CAPACITY),
        });
        return;
    }

    for (index, group) in eks.node_groups.iter_mut().enumerate() {
        if non_empty(group.name.as_ref()).is_none() {
            let name = node_group_name(index);
            warn!("nodeGroups[{}].name not set, defaulting to {}", index, name);
            group.name = Some(name);
        }
        if group.desired_capacity.is_none() {
            warn!(
                "nodeGroups[{}].desiredCapacity not set, defaulting to {}",
                index, DEFAULT_NODE_GROUP_CAPACITY
            );
            group.desired_capacity = Some(DEFAULT_NODE_GROUP_CAPACITY);
        }
    }
}

fn node_group_name(index: usize) -> String {
    format!("{NODE_GROUP_NAME_PREFIX}{index}")
}
