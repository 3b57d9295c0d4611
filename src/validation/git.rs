//! # Git Settings Validation
//!
//! Checks the repository provider configuration for GitOps delivery.

use crate::error::ConfigError;
use crate::spec::{non_empty, ClusterSpec, GitProvider};

/// Validate gitProvider and the provider-specific field it requires
///
/// gitlab needs the repository URL; github needs the organization the
/// repository is created in.
pub fn check_required_git_values(spec: &ClusterSpec) -> Result<GitProvider, ConfigError> {
    let provider = non_empty(spec.git_provider.as_ref()).and_then(GitProvider::parse);
    let Some(provider) = provider else {
        return Err(ConfigError::InvalidEnum(
            "gitProvider must be one of: 'github' or 'gitlab'".to_string(),
        ));
    };

    match provider {
        GitProvider::Gitlab => {
            if non_empty(spec.git_repository_url.as_ref()).is_none() {
                return Err(ConfigError::MissingField(
                    "Please provide the url to your gitlab git repository in: gitUrl".to_string(),
                ));
            }
        }
        GitProvider::Github => {
            if non_empty(spec.git_provider_org.as_ref()).is_none() {
                return Err(ConfigError::MissingField(
                    "Please provide the gitProviderOrg where the repository will be created"
                        .to_string(),
                ));
            }
        }
    }

    Ok(provider)
}
