//! Error types for the authorization boundary
//!
//! This module defines all failures that can occur between receiving a
//! gateway-verified request and producing an access decision. Every error
//! resolves to a deny for the caller; nothing passes through on failure.

use thiserror::Error;

/// Authorization boundary error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No Authorization header was supplied
    #[error("Missing Authorization header")]
    MissingAuthorization,

    /// Authorization header or token payload could not be parsed
    #[error("Invalid Authorization header: {0}")]
    InvalidAuthorization(String),

    /// Token is missing a required claim
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// A claimed role could not be resolved from the role store.
    ///
    /// The principal profile is not constructed in this case; the request
    /// fails closed. Distinct from [`AuthError::AccessDenied`], which is a
    /// completed-but-negative evaluation.
    #[error("Permission check failed: could not resolve role '{0}'")]
    UnresolvableRole(String),

    /// Evaluation completed and denied the request.
    ///
    /// Carries the requested path only — permission details are never
    /// surfaced to the consumer.
    #[error("Access denied for '{path}'")]
    AccessDenied {
        /// The requested action path
        path: String,
    },
}

/// Result type for authorization operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorization(_)
            | AuthError::MissingClaim(_) => 401,

            AuthError::UnresolvableRole(_) | AuthError::AccessDenied { .. } => 403,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::InvalidAuthorization(_) => "INVALID_AUTHORIZATION",
            AuthError::MissingClaim(_) => "MISSING_CLAIM",
            AuthError::UnresolvableRole(_) => "UNRESOLVABLE_ROLE",
            AuthError::AccessDenied { .. } => "ACCESS_DENIED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::MissingAuthorization.status_code(), 401);
        assert_eq!(
            AuthError::InvalidAuthorization("bad".into()).status_code(),
            401
        );
        assert_eq!(AuthError::UnresolvableRole("r".into()).status_code(), 403);
        assert_eq!(
            AuthError::AccessDenied {
                path: "hr:payroll:view".into()
            }
            .status_code(),
            403
        );
    }

    #[test]
    fn test_access_denied_surfaces_path_only() {
        let err = AuthError::AccessDenied {
            path: "hr:payroll:view".into(),
        };
        assert_eq!(err.to_string(), "Access denied for 'hr:payroll:view'");
        assert_eq!(err.error_code(), "ACCESS_DENIED");
    }
}
