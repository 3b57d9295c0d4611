//! # Constants
//!
//! Shared constants used throughout validation and defaulting.
//!
//! Identifier tables here are matched verbatim against the configuration
//! document, and several of them are echoed back in error messages.

/// Track identifier for the managed EKS offering
pub const TRACK_EKS: &str = "eks";

/// Track identifier for WKS on machines reached over SSH
pub const TRACK_WKS_SSH: &str = "wks-ssh";

/// Track identifier for WKS on footloose-managed nodes
pub const TRACK_WKS_FOOTLOOSE: &str = "wks-footloose";

/// Git provider identifiers
pub const GIT_PROVIDER_GITHUB: &str = "github";
pub const GIT_PROVIDER_GITLAB: &str = "gitlab";

/// Machine role identifiers for SSH machines
pub const ROLE_MASTER: &str = "master";
pub const ROLE_WORKER: &str = "worker";

/// Footloose backend identifiers
pub const FOOTLOOSE_BACKEND_DOCKER: &str = "docker";
pub const FOOTLOOSE_BACKEND_IGNITE: &str = "ignite";

/// Kubernetes versions accepted for EKS (exact match)
pub const EKS_KUBERNETES_VERSIONS: [&str; 2] = ["1.14", "1.15"];

/// Lowest (major, minor) Kubernetes release accepted for WKS, any patch level
pub const WKS_MIN_KUBERNETES_VERSION: (u64, u64) = (1, 14);

/// Highest (major, minor) Kubernetes release accepted for WKS, any patch level
pub const WKS_MAX_KUBERNETES_VERSION: (u64, u64) = (1, 15);

/// Default EKS node group instance type when no node groups are given
pub const DEFAULT_NODE_GROUP_INSTANCE_TYPE: &str = "m5.large";

/// Default EKS node group capacity
pub const DEFAULT_NODE_GROUP_CAPACITY: i64 = 3;

/// Prefix for generated node group names (`ng-0`, `ng-1`, ...)
pub const NODE_GROUP_NAME_PREFIX: &str = "ng-";

/// Default SSH user for WKS machines
pub const DEFAULT_SSH_USER: &str = "root";

/// Default SSH key location, relative to the home directory
pub const DEFAULT_SSH_KEY_RELATIVE_PATH: &str = ".ssh/id_rsa";

/// Default SSH port for both public and private machine addresses
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Prefix for the generated cluster name (`wk-<user>`)
pub const CLUSTER_NAME_PREFIX: &str = "wk-";

/// Cluster name component used when the current user is unknown
pub const DEFAULT_CLUSTER_NAME_COMPONENT: &str = "cluster";

/// Environment variable naming the current user
pub const ENV_USER: &str = "USER";

/// Environment variable naming the home directory
pub const ENV_HOME: &str = "HOME";

/// Maximum length of a DNS name (RFC 1035)
pub const MAX_DOMAIN_NAME_LENGTH: usize = 253;
