//! # Cluster Specification Root
//!
//! Global fields, the track selector and the per-track sections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::eks::EksConfig;
use super::wks::{FootlooseConfig, SshConfig, WksConfig};
use super::{is_default, non_empty, null_as_default};
use crate::constants::{
    GIT_PROVIDER_GITHUB, GIT_PROVIDER_GITLAB, TRACK_EKS, TRACK_WKS_FOOTLOOSE, TRACK_WKS_SSH,
};

/// Cluster configuration document
///
/// Created once per invocation by the loader, validated and defaulted in
/// place by the engine, then handed to provisioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Provisioning track: "eks", "wks-ssh" or "wks-footloose"
    #[serde(default)]
    pub track: String,
    /// Cluster name (default: "wk-<user>")
    #[serde(default)]
    pub cluster_name: String,
    /// Container registry user
    #[serde(default, rename = "dockerIOUser", alias = "registryUser")]
    pub registry_user: String,
    /// Path to a file holding the container registry password
    #[serde(
        default,
        rename = "dockerIOPasswordFile",
        alias = "registryPasswordFile"
    )]
    pub registry_password_file: String,
    /// Git provider hosting the cluster repository: "github" or "gitlab"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_provider: Option<String>,
    /// URL of the cluster repository (required for gitlab)
    #[serde(
        default,
        rename = "gitUrl",
        alias = "gitRepositoryURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub git_repository_url: Option<String>,
    /// Organization the repository is created in (required for github)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_provider_org: Option<String>,
    /// Sealed secrets controller certificate (PEM file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed_secrets_certificate: Option<String>,
    /// Sealed secrets controller private key (PEM file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed_secrets_private_key: Option<String>,
    /// Settings for the "eks" track
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_default"
    )]
    pub eks_config: EksConfig,
    /// Settings shared by the "wks-ssh" and "wks-footloose" tracks
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_default"
    )]
    pub wks_config: WksConfig,
}

impl ClusterSpec {
    /// Whether the document asks for a managed git repository
    ///
    /// True when either the git provider or the repository URL is set.
    pub fn declares_git_intent(&self) -> bool {
        non_empty(self.git_provider.as_ref()).is_some()
            || non_empty(self.git_repository_url.as_ref()).is_some()
    }

    /// Section of the document that belongs to `track`
    pub fn track_config(&self, track: Track) -> TrackConfig<'_> {
        match track {
            Track::Eks => TrackConfig::Eks(&self.eks_config),
            Track::WksSsh => TrackConfig::WksSsh {
                wks: &self.wks_config,
                ssh: &self.wks_config.ssh_config,
            },
            Track::WksFootloose => TrackConfig::WksFootloose {
                wks: &self.wks_config,
                footloose: &self.wks_config.footloose_config,
            },
        }
    }
}

/// Provisioning track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Managed EKS cluster
    Eks,
    /// WKS on machines reached over SSH
    WksSsh,
    /// WKS on footloose-managed containers or micro-VMs
    WksFootloose,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Eks, Track::WksSsh, Track::WksFootloose];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Eks => TRACK_EKS,
            Track::WksSsh => TRACK_WKS_SSH,
            Track::WksFootloose => TRACK_WKS_FOOTLOOSE,
        }
    }

    /// Exact, case-sensitive match against the track identifiers
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Whether the track runs WKS and therefore reads `wksConfig`
    pub fn is_wks(&self) -> bool {
        matches!(self, Track::WksSsh | Track::WksFootloose)
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of the sections a track reads
#[derive(Debug, Clone, Copy)]
pub enum TrackConfig<'a> {
    Eks(&'a EksConfig),
    WksSsh {
        wks: &'a WksConfig,
        ssh: &'a SshConfig,
    },
    WksFootloose {
        wks: &'a WksConfig,
        footloose: &'a FootlooseConfig,
    },
}

/// Git provider hosting the cluster repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitProvider {
    Github,
    Gitlab,
}

impl GitProvider {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GitProvider::Github => GIT_PROVIDER_GITHUB,
            GitProvider::Gitlab => GIT_PROVIDER_GITLAB,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            GIT_PROVIDER_GITHUB => Some(GitProvider::Github),
            GIT_PROVIDER_GITLAB => Some(GitProvider::Gitlab),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_parse_is_exact() {
        assert_eq!(Track::parse("eks"), Some(Track::Eks));
        assert_eq!(Track::parse("wks-ssh"), Some(Track::WksSsh));
        assert_eq!(Track::parse("wks-footloose"), Some(Track::WksFootloose));
        assert_eq!(Track::parse("EKS"), None);
        assert_eq!(Track::parse("footlose"), None);
        assert_eq!(Track::parse(""), None);
    }

    #[test]
    fn test_declares_git_intent() {
        let mut spec = ClusterSpec::default();
        assert!(!spec.declares_git_intent());

        spec.git_repository_url = Some(String::new());
        assert!(!spec.declares_git_intent());

        spec.git_repository_url = Some("foo".to_string());
        assert!(spec.declares_git_intent());

        let spec = ClusterSpec {
            git_provider: Some("gitlab".to_string()),
            ..ClusterSpec::default()
        };
        assert!(spec.declares_git_intent());

        let spec = ClusterSpec {
            git_provider: Some(String::new()),
            git_repository_url: None,
            ..ClusterSpec::default()
        };
        assert!(!spec.declares_git_intent());
    }

    #[test]
    fn test_track_config_selects_section() {
        let spec = ClusterSpec::default();
        assert!(matches!(spec.track_config(Track::Eks), TrackConfig::Eks(_)));
        assert!(matches!(
            spec.track_config(Track::WksFootloose),
            TrackConfig::WksFootloose { .. }
        ));
        assert!(Track::WksSsh.is_wks());
        assert!(!Track::Eks.is_wks());
    }
}
