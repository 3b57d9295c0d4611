//! # Sealed Secrets Validation
//!
//! Checks the optional sealed secrets controller key pair.

use rustls::crypto::ring::default_provider;
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use tracing::debug;

use crate::error::ConfigError;
use crate::spec::{non_empty, ClusterSpec};

/// Validate the sealed secrets certificate and private key
///
/// Both unset disables the feature. When both are set the key must belong to
/// the certificate.
pub fn validate_sealed_secrets_values(spec: &ClusterSpec) -> Result<(), ConfigError> {
    let certificate = non_empty(spec.sealed_secrets_certificate.as_ref());
    let private_key = non_empty(spec.sealed_secrets_private_key.as_ref());

    match (certificate, private_key) {
        (None, None) => Ok(()),
        (Some(certificate), Some(private_key)) => verify_key_pair(certificate, private_key),
        _ => Err(ConfigError::MissingField(
            "please provide both the private key and certificate for the sealed secrets controller"
                .to_string(),
        )),
    }
}

/// Load a PEM certificate and private key and check that they match
///
/// Unreadable files surface as [`ConfigError::Io`]; anything wrong with their
/// contents, including a key that belongs to another certificate, is a
/// [`ConfigError::CryptoMismatch`].
pub fn verify_key_pair(cert_path: &str, key_path: &str) -> Result<(), ConfigError> {
    let cert_pem = std::fs::read(cert_path).map_err(|e| ConfigError::io(cert_path, e))?;
    let key_pem = std::fs::read(key_path).map_err(|e| ConfigError::io(key_path, e))?;

    let certs = CertificateDer::pem_slice_iter(&cert_pem)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| mismatch(format!("failed to parse certificate {cert_path}: {e:?}")))?;
    if certs.is_empty() {
        return Err(mismatch(format!("no certificate found in {cert_path}")));
    }

    let key = PrivateKeyDer::from_pem_slice(&key_pem)
        .map_err(|e| mismatch(format!("failed to parse private key {key_path}: {e:?}")))?;

    let signing_key = default_provider()
        .key_provider
        .load_private_key(key)
        .map_err(|e| mismatch(format!("unsupported private key {key_path}: {e}")))?;

    CertifiedKey::new(certs, signing_key)
        .keys_match()
        .map_err(|e| mismatch(format!("{key_path} does not match {cert_path}: {e}")))?;

    debug!("Sealed secrets key pair verified: {}", cert_path);
    Ok(())
}

fn mismatch(reason: String) -> ConfigError {
    debug!("Sealed secrets key pair rejected: {}", reason);
    ConfigError::CryptoMismatch { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_pair(dir: &Path, name: &str) -> (String, String) {
        let generated = rcgen::generate_simple_self_signed(vec!["sealed-secrets".to_string()])
            .unwrap();
        let cert = dir.join(format!("{name}.crt"));
        let key = dir.join(format!("{name}.key"));
        std::fs::write(&cert, generated.cert.pem()).unwrap();
        std::fs::write(&key, generated.key_pair.serialize_pem()).unwrap();
        (
            cert.to_str().unwrap().to_string(),
            key.to_str().unwrap().to_string(),
        )
    }

    fn sealed(cert: Option<&str>, key: Option<&str>) -> ClusterSpec {
        ClusterSpec {
            sealed_secrets_certificate: cert.map(ToString::to_string),
            sealed_secrets_private_key: key.map(ToString::to_string),
            ..ClusterSpec::default()
        }
    }

    #[test]
    fn test_disabled_when_both_unset() {
        assert!(validate_sealed_secrets_values(&sealed(None, None)).is_ok());
        assert!(validate_sealed_secrets_values(&sealed(Some(""), Some(""))).is_ok());
    }

    #[test]
    fn test_requires_both() {
        let expected =
            "please provide both the private key and certificate for the sealed secrets controller";
        for input in [
            sealed(None, Some("key")),
            sealed(Some(""), Some("key")),
            sealed(Some("cert"), None),
        ] {
            let err = validate_sealed_secrets_values(&input).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_matching_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = write_pair(dir.path(), "sealed");
        assert!(validate_sealed_secrets_values(&sealed(Some(&cert), Some(&key))).is_ok());
    }

    #[test]
    fn test_mismatched_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, _) = write_pair(dir.path(), "first");
        let (_, other_key) = write_pair(dir.path(), "second");

        let err = validate_sealed_secrets_values(&sealed(Some(&cert), Some(&other_key)))
            .unwrap_err();
        assert_eq!(err.to_string(), "could not load key and certificate pair");
        assert_eq!(err.kind(), crate::error::ErrorKind::CryptoMismatch);
    }

    #[test]
    fn test_garbage_key_is_a_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, _) = write_pair(dir.path(), "sealed");
        let key = dir.path().join("garbage.key");
        std::fs::write(&key, "not a key").unwrap();

        let err = verify_key_pair(&cert, key.to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::CryptoMismatch);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let (_, key) = write_pair(dir.path(), "sealed");
        let missing = dir.path().join("missing.crt");

        let err = verify_key_pair(missing.to_str().unwrap(), &key).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Io);
    }
}
