//! # Primitive Validation
//!
//! Standalone syntax checks shared by the track validators: CIDR blocks,
//! IPv4 addresses, DNS names, Kubernetes versions and file existence.

use ipnet::IpNet;
use regex::Regex;
use std::net::Ipv4Addr;
use std::path::Path;

use crate::constants::MAX_DOMAIN_NAME_LENGTH;
use crate::error::ConfigError;

/// Parsed `major.minor.patch` Kubernetes version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KubernetesVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl KubernetesVersion {
    /// Parse a strict `X.Y.Z` version (no `v` prefix, no pre-release suffix)
    pub fn parse(version: &str) -> Result<Option<Self>, ConfigError> {
        let version_regex = Regex::new(r"^(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)$")?;

        let Some(captures) = version_regex.captures(version) else {
            return Ok(None);
        };

        let component = |name: &str| {
            captures
                .name(name)
                .and_then(|m| m.as_str().parse::<u64>().ok())
        };

        Ok(match (component("major"), component("minor"), component("patch")) {
            (Some(major), Some(minor), Some(patch)) => Some(Self {
                major,
                minor,
                patch,
            }),
            _ => None,
        })
    }

    /// Whether the (major, minor) release lies in `min..=max`, any patch level
    pub fn in_release_range(&self, min: (u64, u64), max: (u64, u64)) -> bool {
        let release = (self.major, self.minor);
        release >= min && release <= max
    }
}

/// Parse a CIDR block (`address/prefix`), IPv4 or IPv6
///
/// Host bits may be set, as in `192.168.1.0/16`.
pub fn parse_cidr(value: &str) -> Option<IpNet> {
    value.parse::<IpNet>().ok()
}

/// Validate that every entry is a CIDR block, reporting the first bad entry
pub fn validate_cidr_blocks(blocks: &[String]) -> Result<(), ConfigError> {
    match blocks.iter().find(|block| parse_cidr(block).is_none()) {
        Some(block) => Err(ConfigError::OutOfRange(format!(
            "{block} is not a valid CIDR specification"
        ))),
        None => Ok(()),
    }
}

pub fn is_ipv4_address(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// DNS name check
///
/// Labels are 1-63 alphanumerics with internal hyphens only; the whole name is
/// at most 253 characters. The top-level label may not be all digits, which
/// keeps malformed dotted quads such as `192.1680.1.0` from passing as names.
pub fn is_domain_name(value: &str) -> Result<bool, ConfigError> {
    if value.is_empty() || value.len() > MAX_DOMAIN_NAME_LENGTH {
        return Ok(false);
    }

    let label = r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?";
    let domain_regex = Regex::new(&format!(r"^{label}(?:\.{label})*$"))?;

    if !domain_regex.is_match(value) {
        return Ok(false);
    }

    let top_level = value.rsplit('.').next().unwrap_or(value);
    Ok(!top_level.chars().all(|c| c.is_ascii_digit()))
}

/// Validate a control plane load balancer address (IPv4 or domain name)
pub fn validate_lb_address(address: &str) -> Result<(), ConfigError> {
    if is_ipv4_address(address) || is_domain_name(address)? {
        return Ok(());
    }
    Err(ConfigError::OutOfRange(format!(
        "{address} is not a valid control plane load balancer address; must be a valid IP address or a domain name"
    )))
}

/// Validate that `path` exists on the local filesystem
pub fn validate_file_exists(path: &str, field_name: &'static str) -> Result<(), ConfigError> {
    if Path::new(path).exists() {
        Ok(())
    } else {
        Err(ConfigError::file_not_found(path, field_name))
    }
}
