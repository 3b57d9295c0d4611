//! # Validation
//!
//! Validates cluster specifications, one function per scope. Each returns the
//! first violated rule as a [`crate::error::ConfigError`] and never collects
//! more than one.

pub mod eks;
pub mod footloose;
pub mod git;
pub mod globals;
pub mod primitives;
pub mod sealed_secrets;
pub mod ssh;
pub mod wks;

pub use eks::check_required_eks_values;
pub use footloose::check_required_footloose_values;
pub use git::check_required_git_values;
pub use globals::check_required_global_values;
pub use primitives::{
    is_domain_name, is_ipv4_address, parse_cidr, validate_cidr_blocks, validate_file_exists,
    validate_lb_address, KubernetesVersion,
};
pub use sealed_secrets::{validate_sealed_secrets_values, verify_key_pair};
pub use ssh::check_required_ssh_values;
pub use wks::{check_required_wks_values, validate_kubernetes_version_range};
