//! # Global Validation
//!
//! Checks the fields every track reads: the track selector and the registry
//! credentials.

use crate::constants::{TRACK_EKS, TRACK_WKS_FOOTLOOSE, TRACK_WKS_SSH};
use crate::error::ConfigError;
use crate::spec::{ClusterSpec, Track};

/// Validate the global fields and resolve the track
///
/// The password file is only required to be named here; its existence is
/// checked by whoever reads it.
pub fn check_required_global_values(spec: &ClusterSpec) -> Result<Track, ConfigError> {
    if spec.track.is_empty() {
        return Err(ConfigError::must_be_specified("track"));
    }

    let Some(track) = Track::parse(&spec.track) else {
        return Err(ConfigError::InvalidEnum(format!(
            "track must be one of: '{TRACK_EKS}', '{TRACK_WKS_SSH}', or '{TRACK_WKS_FOOTLOOSE}'"
        )));
    };

    if spec.registry_user.is_empty() {
        return Err(ConfigError::must_be_specified("dockerIOUser"));
    }

    if spec.registry_password_file.is_empty() {
        return Err(ConfigError::must_be_specified("dockerIOPasswordFile"));
    }

    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(track: &str, user: &str, password_file: &str) -> ClusterSpec {
        ClusterSpec {
            track: track.to_string(),
            registry_user: user.to_string(),
            registry_password_file: password_file.to_string(),
            ..ClusterSpec::default()
        }
    }

    #[test]
    fn test_required_globals() {
        let cases = [
            (spec("eks", "TheodoreLogan", "testdata/passwordFile"), None),
            (spec("wks-ssh", "TheodoreLogan", "testdata/passwordFile"), None),
            (spec("wks-footloose", "TheodoreLogan", "testdata/passwordFile"), None),
            (
                spec("footlose", "TheodoreLogan", "testdata/passwordFile"),
                Some("track must be one of: 'eks', 'wks-ssh', or 'wks-footloose'"),
            ),
            (
                spec("", "TheodoreLogan", "testdata/passwordFile"),
                Some("track must be specified"),
            ),
            (
                spec("wks-ssh", "", "testdata/passwordFile"),
                Some("dockerIOUser must be specified"),
            ),
            (
                spec("wks-ssh", "TheodoreLogan", ""),
                Some("dockerIOPasswordFile must be specified"),
            ),
        ];

        for (input, expected) in cases {
            let result = check_required_global_values(&input);
            assert_eq!(
                result.as_ref().err().map(ToString::to_string).as_deref(),
                expected,
                "track '{}'",
                input.track
            );
        }
    }

    #[test]
    fn test_track_is_checked_before_credentials() {
        let err = check_required_global_values(&spec("bogus", "", "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "track must be one of: 'eks', 'wks-ssh', or 'wks-footloose'"
        );
    }

    #[test]
    fn test_resolves_track() {
        let track = check_required_global_values(&spec("wks-footloose", "u", "p")).unwrap();
        assert_eq!(track, Track::WksFootloose);
    }
}
