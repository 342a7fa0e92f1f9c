//! Bundled CA certificates

use std::path::{Path, PathBuf};

/// Location of the CA bundle relative to the crate root
pub const TRUST_STORE_RELATIVE_PATH: &str = "certs/cacert.pem";

/// Absolute path of the CA bundle shipped with this crate
pub fn bundled_ca_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TRUST_STORE_RELATIVE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_ca_path_points_at_existing_bundle() {
        let path = bundled_ca_path();
        assert!(path.ends_with("certs/cacert.pem"));
        assert!(path.is_file(), "CA bundle missing at {}", path.display());
    }

    #[test]
    fn test_bundle_contains_certificates() {
        let pem = std::fs::read(bundled_ca_path()).expect("CA bundle should be readable");
        let certs =
            reqwest::Certificate::from_pem_bundle(&pem).expect("CA bundle should parse as PEM");
        assert!(!certs.is_empty());
    }
}
