//! Admin session authentication.
//!
//! The access model is a binary gate: a request either presents a valid admin
//! session token or it is anonymous. Tokens are compared against the SHA-256
//! hash of the configured session secret in constant time; the plaintext
//! secret is never retained.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::debug;

use crate::application::repos::ReadScope;

/// An authenticated admin identity attached to the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub label: &'static str,
}

impl AdminPrincipal {
    fn new() -> Self {
        Self { label: "admin" }
    }

    pub fn scope(&self) -> ReadScope {
        ReadScope::Authenticated
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("no session token provided")]
    Missing,
    #[error("session token invalid")]
    Invalid,
    #[error("admin session secret not configured")]
    Unconfigured,
}

/// Validates bearer tokens against the configured admin session secret.
pub struct AdminSessionService {
    hashed_secret: Option<Vec<u8>>,
}

impl AdminSessionService {
    pub fn new(session_secret: Option<&str>) -> Self {
        Self {
            hashed_secret: session_secret.map(hash_secret),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.hashed_secret.is_some()
    }

    /// Authenticate a bearer token.
    pub fn authenticate(&self, token: &str) -> Result<AdminPrincipal, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Missing);
        }

        let Some(hashed_secret) = &self.hashed_secret else {
            debug!("Admin authentication rejected: no session secret configured");
            return Err(AuthError::Unconfigured);
        };

        if verify_shared_secret(hashed_secret, token) {
            Ok(AdminPrincipal::new())
        } else {
            Err(AuthError::Invalid)
        }
    }
}

/// Hash a shared secret for storage-free comparison.
pub fn hash_secret(secret: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.finalize().to_vec()
}

/// Compare a presented secret against a stored SHA-256 hash in constant time.
pub fn verify_shared_secret(hashed: &[u8], presented: &str) -> bool {
    let hashed_input = hash_secret(presented);
    hashed.ct_eq(&hashed_input).unwrap_u8() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_token_authenticates() {
        let service = AdminSessionService::new(Some("correct horse battery staple"));
        let principal = service
            .authenticate("correct horse battery staple")
            .expect("valid token");
        assert_eq!(principal.label, "admin");
        assert_eq!(principal.scope(), ReadScope::Authenticated);
    }

    #[test]
    fn wrong_token_is_rejected() {
        let service = AdminSessionService::new(Some("right"));
        assert_eq!(service.authenticate("wrong"), Err(AuthError::Invalid));
    }

    #[test]
    fn empty_token_is_missing() {
        let service = AdminSessionService::new(Some("secret"));
        assert_eq!(service.authenticate(""), Err(AuthError::Missing));
    }

    #[test]
    fn unconfigured_service_rejects_everything() {
        let service = AdminSessionService::new(None);
        assert!(!service.is_configured());
        assert_eq!(
            service.authenticate("anything"),
            Err(AuthError::Unconfigured)
        );
    }

    #[test]
    fn verify_shared_secret_roundtrip() {
        let hashed = hash_secret("token-value");
        assert!(verify_shared_secret(&hashed, "token-value"));
        assert!(!verify_shared_secret(&hashed, "token-valuE"));
    }
}
