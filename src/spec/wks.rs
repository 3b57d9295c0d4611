//! # WKS Configuration
//!
//! Fleet settings shared by the two self-managed tracks, plus the
//! track-specific SSH machine list and footloose node layout.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};
use crate::constants::{
    FOOTLOOSE_BACKEND_DOCKER, FOOTLOOSE_BACKEND_IGNITE, ROLE_MASTER, ROLE_WORKER,
};

/// WKS fleet settings (`wksConfig`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WksConfig {
    /// Kubernetes version, 1.14.x through 1.15.x
    #[serde(default)]
    pub kubernetes_version: String,
    /// Service network CIDR blocks
    #[serde(default, rename = "serviceCIDRBlocks", deserialize_with = "null_as_default")]
    pub service_cidr_blocks: Vec<String>,
    /// Pod network CIDR blocks
    #[serde(default, rename = "podCIDRBlocks", deserialize_with = "null_as_default")]
    pub pod_cidr_blocks: Vec<String>,
    /// IPv4 address or domain name of the control plane load balancer
    #[serde(
        default,
        rename = "controlPlaneLbAddress",
        alias = "controlPlaneLoadBalancerAddress",
        skip_serializing_if = "Option::is_none"
    )]
    pub control_plane_lb_address: Option<String>,
    /// Machines for the "wks-ssh" track
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_default"
    )]
    pub ssh_config: SshConfig,
    /// Node layout for the "wks-footloose" track
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_default"
    )]
    pub footloose_config: FootlooseConfig,
}

/// SSH access and machine inventory (`sshConfig`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SshConfig {
    /// Remote user (default: "root")
    #[serde(default, rename = "sshUser", skip_serializing_if = "Option::is_none")]
    pub ssh_user: Option<String>,
    /// Private key used to reach the machines (default: "$HOME/.ssh/id_rsa")
    #[serde(default, rename = "sshKeyFile", skip_serializing_if = "Option::is_none")]
    pub ssh_key_file: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub machines: Vec<Machine>,
}

/// A machine in the SSH inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    /// "master" or "worker"
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub public_address: String,
    /// Address used inside the cluster network (default: the public address)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_address: Option<String>,
    /// SSH port on the public address (default: 22)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_port: Option<u16>,
    /// SSH port on the private address (default: 22)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_port: Option<u16>,
}

/// Footloose node layout (`footlooseConfig`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FootlooseConfig {
    /// "docker" (containers) or "ignite" (micro-VMs)
    #[serde(default)]
    pub backend: String,
    /// Number of control plane nodes, at least 1
    #[serde(default, alias = "controlPlaneNodeCount")]
    pub control_plane_nodes: i64,
    /// Number of worker nodes, at least 1
    #[serde(default, alias = "workerNodeCount")]
    pub worker_nodes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineRole {
    Master,
    Worker,
}

impl MachineRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineRole::Master => ROLE_MASTER,
            MachineRole::Worker => ROLE_WORKER,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            ROLE_MASTER => Some(MachineRole::Master),
            ROLE_WORKER => Some(MachineRole::Worker),
            _ => None,
        }
    }
}

/// Runtime footloose uses for its nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FootlooseBackend {
    /// Nodes are docker containers
    Docker,
    /// Nodes are ignite micro-VMs
    Ignite,
}

impl FootlooseBackend {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FootlooseBackend::Docker => FOOTLOOSE_BACKEND_DOCKER,
            FootlooseBackend::Ignite => FOOTLOOSE_BACKEND_IGNITE,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            FOOTLOOSE_BACKEND_DOCKER => Some(FootlooseBackend::Docker),
            FOOTLOOSE_BACKEND_IGNITE => Some(FootlooseBackend::Ignite),
            _ => None,
        }
    }
}
