//! Cluster Configuration Library
//!
//! Validates and defaults the cluster configuration document that drives
//! provisioning for three tracks:
//!
//! - `eks` - a managed EKS cluster
//! - `wks-ssh` - a WKS cluster on machines reached over SSH
//! - `wks-footloose` - a WKS cluster on local footloose containers or VMs
//!
//! ```no_run
//! use cluster_config::{load_config, Engine, ProcessEnvironment, ValidationOptions};
//!
//! # fn main() -> Result<(), cluster_config::ConfigError> {
//! let spec = load_config("config.yaml")?;
//! let spec = Engine::new(ProcessEnvironment)
//!     .with_options(ValidationOptions { validate_git: true })
//!     .validate(spec)?;
//! println!("{}", spec.cluster_name);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod defaults;
pub mod engine;
pub mod env;
pub mod error;
pub mod loader;
pub mod spec;
pub mod validation;

pub use config::{OutputFormat, RuntimeConfig};
pub use engine::{validate, Engine, Stage, Validation, ValidationOptions};
pub use env::{Environment, ProcessEnvironment, StaticEnvironment};
pub use error::{ConfigError, ErrorKind};
pub use loader::{from_yaml_str, load_config};
pub use spec::{
    ClusterSpec, EksConfig, FootlooseBackend, FootlooseConfig, GitProvider, Machine, MachineRole,
    NodeGroup, SshConfig, Track, TrackConfig, WksConfig,
};
