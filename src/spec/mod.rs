//! # Cluster Specification
//!
//! In-memory form of the cluster configuration document.
//!
//! These types are a raw, untrusted parse result: every field defaults when
//! absent and nothing is checked at deserialization time. Invariants hold only
//! after the matching validator in [`crate::validation`] has returned `Ok`.
//!
//! ## Module Structure
//!
//! - `cluster.rs` - Root `ClusterSpec`, track selection and git settings
//! - `eks.rs` - Managed EKS configuration and node groups
//! - `wks.rs` - WKS fleet configuration (SSH machines, footloose nodes)

use serde::{Deserialize, Deserializer};

mod cluster;
mod eks;
mod wks;

pub use cluster::{ClusterSpec, GitProvider, Track, TrackConfig};
pub use eks::{EksConfig, NodeGroup};
pub use wks::{FootlooseBackend, FootlooseConfig, Machine, MachineRole, SshConfig, WksConfig};

/// Non-empty contents of an optional string field
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Deserialize an explicit `null` (e.g. a bare `sshConfig:` key) as the default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
