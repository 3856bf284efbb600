//! JWT token service.
//!
//! Extracts bearer tokens from request headers, validates them, decodes
//! their claims, and issues new tokens at login.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::Role;
use crate::{FreeboardError, Result};

/// Prefix of the `Authorization` header value.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject: the username of the requester.
    pub sub: String,
    /// Role at the time the token was issued.
    pub auth: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// Unique token identifier.
    pub jti: String,
}

/// Issues and checks HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenService {
    /// Create a token service from a shared secret and token lifetime.
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs,
        }
    }

    /// Token lifetime in seconds.
    pub fn expiry_secs(&self) -> u64 {
        self.expiry_secs
    }

    /// Issue an access token for a member.
    pub fn create_token(&self, username: &str, role: Role) -> Result<String> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = AuthClaims {
            sub: username.to_string(),
            auth: role.as_str().to_string(),
            iat: now,
            exp: now + self.expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| FreeboardError::Internal(format!("failed to encode token: {e}")))
    }

    /// Extract the bearer token from the `Authorization` header.
    ///
    /// Returns `None` when the header is missing, not valid UTF-8, lacks the
    /// `Bearer ` prefix, or carries an empty token.
    pub fn resolve_token(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }

    /// Check the token signature and expiry.
    pub fn validate_token(&self, token: &str) -> bool {
        match decode::<AuthClaims>(token, &self.decoding_key, &self.validation) {
            Ok(_) => true,
            Err(e) => {
                debug!("JWT validation failed: {}", e);
                false
            }
        }
    }

    /// Decode the claims of a token.
    ///
    /// Callers validate first; an invalid token yields an `Auth` error.
    pub fn get_claims(&self, token: &str) -> Result<AuthClaims> {
        decode::<AuthClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| FreeboardError::Auth(format!("invalid token: {e}")))
    }

    /// Format a token as an `Authorization` header value.
    pub fn bearer(token: &str) -> String {
        format!("{BEARER_PREFIX}{token}")
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiry_secs", &self.expiry_secs)
            .finish_non_exhaustive()
    }
}
