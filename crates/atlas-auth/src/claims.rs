//! Gateway token claims
//!
//! The upstream API gateway authenticates callers and verifies token
//! signatures before requests reach this platform. This module extracts a
//! typed claim set from those already-verified tokens; it performs no
//! signature validation of its own.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Typed claims extracted from a gateway-verified token.
///
/// Replaces ad-hoc inspection of raw claim maps with a validated structure:
/// downstream code never branches on the shape of claim data, it asks this
/// type and receives a value or a typed error.
///
/// # Example
///
/// ```
/// use atlas_auth::GatewayClaims;
///
/// let claims = GatewayClaims::new("j.doe").with_roles(["hr-viewer", "auditor"]);
/// assert_eq!(claims.username().unwrap(), "j.doe");
/// assert_eq!(claims.roles().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayClaims {
    /// Subject identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Preferred username, the principal's identifier in this platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,

    /// Role identifiers claimed for the principal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Expiration time (Unix timestamp); enforced by the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Remaining claims, preserved for consumers that need them
    #[serde(default, flatten)]
    pub custom: HashMap<String, serde_json::Value>,
}

impl GatewayClaims {
    /// Create claims for a username, issued now with a one-hour expiry.
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let now = Utc::now();
        Self {
            sub: Some(username.clone()),
            preferred_username: Some(username),
            roles: Some(Vec::new()),
            exp: Some((now + chrono::Duration::hours(1)).timestamp()),
            iat: Some(now.timestamp()),
            custom: HashMap::new(),
        }
    }

    /// Set the claimed role identifiers.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Extract claims from an `Authorization` header value.
    ///
    /// Expects the `Bearer <token>` scheme used by the gateway.
    pub fn from_bearer(header: &str) -> AuthResult<Self> {
        match header.split_once(' ') {
            Some(("Bearer", token)) if !token.is_empty() => Self::from_token(token),
            _ => Err(AuthError::InvalidAuthorization(
                "expected 'Bearer <token>'".to_string(),
            )),
        }
    }

    /// Extract claims from a raw JWT string without verifying its signature.
    ///
    /// Safe only because the gateway has already verified the signature and
    /// expiry; this is pure payload decoding, the platform's equivalent of
    /// parsing a trusted document.
    pub fn from_token(token: &str) -> AuthResult<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        let token_data = decode::<GatewayClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| AuthError::InvalidAuthorization(e.to_string()))?;

        Ok(token_data.claims)
    }

    /// The principal's username.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingClaim`] if `preferred_username` is absent.
    pub fn username(&self) -> AuthResult<&str> {
        self.preferred_username
            .as_deref()
            .ok_or_else(|| AuthError::MissingClaim("preferred_username".to_string()))
    }

    /// The claimed role identifiers.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingClaim`] if the `roles` claim is absent.
    pub fn roles(&self) -> AuthResult<&[String]> {
        self.roles
            .as_deref()
            .ok_or_else(|| AuthError::MissingClaim("roles".to_string()))
    }

    /// Check whether the token is past its expiry.
    ///
    /// Informational only — the gateway enforces expiry before requests
    /// reach this platform. Tokens without an `exp` claim are not expired.
    pub fn is_expired(&self) -> bool {
        self.exp
            .map(|exp| Utc::now().timestamp() >= exp)
            .unwrap_or(false)
    }
}
