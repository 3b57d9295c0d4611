//! # WKS Validation
//!
//! Checks the fleet settings shared by the SSH and footloose tracks.

use crate::constants::{WKS_MAX_KUBERNETES_VERSION, WKS_MIN_KUBERNETES_VERSION};
use crate::error::ConfigError;
use crate::spec::{non_empty, WksConfig};

use super::primitives::{validate_cidr_blocks, validate_lb_address, KubernetesVersion};

/// Validate wksConfig
pub fn check_required_wks_values(wks: &WksConfig) -> Result<(), ConfigError> {
    if wks.kubernetes_version.is_empty() {
        return Err(ConfigError::MissingField(
            "A Kubernetes version must be specified".to_string(),
        ));
    }

    if wks.service_cidr_blocks.is_empty() {
        return Err(ConfigError::MissingField(
            "At least one service CIDR block must be specified".to_string(),
        ));
    }

    if wks.pod_cidr_blocks.is_empty() {
        return Err(ConfigError::MissingField(
            "At least one pod CIDR block must be specified".to_string(),
        ));
    }

    validate_kubernetes_version_range(&wks.kubernetes_version)?;
    validate_cidr_blocks(&wks.service_cidr_blocks)?;
    validate_cidr_blocks(&wks.pod_cidr_blocks)?;

    if let Some(address) = non_empty(wks.control_plane_lb_address.as_ref()) {
        validate_lb_address(address)?;
    }

    Ok(())
}

/// Validate that `version` is a 1.14.x or 1.15.x release
pub fn validate_kubernetes_version_range(version: &str) -> Result<(), ConfigError> {
    let in_range = KubernetesVersion::parse(version)?.is_some_and(|parsed| {
        parsed.in_release_range(WKS_MIN_KUBERNETES_VERSION, WKS_MAX_KUBERNETES_VERSION)
    });

    if in_range {
        return Ok(());
    }

    let (min_major, min_minor) = WKS_MIN_KUBERNETES_VERSION;
    let (max_major, max_minor) = WKS_MAX_KUBERNETES_VERSION;
    Err(ConfigError::OutOfRange(format!(
        "{version} is not a valid Kubernetes version; must be {min_major}.{min_minor}.x-{max_major}.{max_minor}.x"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wks(version: &str, service: &[&str], pod: &[&str]) -> WksConfig {
        WksConfig {
            kubernetes_version: version.to_string(),
            service_cidr_blocks: service.iter().map(ToString::to_string).collect(),
            pod_cidr_blocks: pod.iter().map(ToString::to_string).collect(),
            ..WksConfig::default()
        }
    }

    fn with_lb(address: &str) -> WksConfig {
        WksConfig {
            control_plane_lb_address: Some(address.to_string()),
            ..wks("1.14.1", &["10.96.0.0/12"], &["192.168.1.0/16"])
        }
    }

    #[test]
    fn test_invalid_wks_values() {
        let cases = [
            (wks("1.14.1", &["10.96.0.0/12"], &["192.168.1.0/16"]), None),
            (
                wks("", &["10.96.0.0/12"], &["192.168.1.0/16"]),
                Some("A Kubernetes version must be specified"),
            ),
            (
                wks("1.14.1", &[], &["192.168.1.0/16"]),
                Some("At least one service CIDR block must be specified"),
            ),
            (
                wks("1.14.1", &["10.96.0.0/12"], &[]),
                Some("At least one pod CIDR block must be specified"),
            ),
            (
                wks("1.16.1", &["10.96.0.0/12"], &["192.168.1.0/16"]),
                Some("1.16.1 is not a valid Kubernetes version; must be 1.14.x-1.15.x"),
            ),
            (
                wks("1.14.1", &["1000.96.0.0/12"], &["192.168.1.0/16"]),
                Some("1000.96.0.0/12 is not a valid CIDR specification"),
            ),
            (
                wks("1.14.1", &["10.96.0.0/12"], &["192.1680.1.0/16"]),
                Some("192.1680.1.0/16 is not a valid CIDR specification"),
            ),
            (
                with_lb("192.1680.1.0"),
                Some("192.1680.1.0 is not a valid control plane load balancer address; must be a valid IP address or a domain name"),
            ),
            (
                with_lb("hello-World-.com"),
                Some("hello-World-.com is not a valid control plane load balancer address; must be a valid IP address or a domain name"),
            ),
        ];

        for (input, expected) in cases {
            let result = check_required_wks_values(&input);
            assert_eq!(
                result.err().map(|e| e.to_string()).as_deref(),
                expected,
                "wksConfig {input:?}"
            );
        }
    }

    #[test]
    fn test_valid_lb_addresses() {
        for address in ["192.168.1.0", "hello-World.com"] {
            assert!(
                check_required_wks_values(&with_lb(address)).is_ok(),
                "Address '{address}' should be valid"
            );
        }
    }

    #[test]
    fn test_version_checked_before_cidrs() {
        let err = check_required_wks_values(&wks("1.13.0", &["bad"], &["bad"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1.13.0 is not a valid Kubernetes version; must be 1.14.x-1.15.x"
        );
    }

    #[test]
    fn test_service_blocks_checked_before_pod_blocks() {
        let err = check_required_wks_values(&wks("1.15.0", &["bad-service"], &["bad-pod"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "bad-service is not a valid CIDR specification");
    }
}
