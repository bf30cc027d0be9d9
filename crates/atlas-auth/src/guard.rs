//! Request guard
//!
//! The guard is what HTTP layers consume: given an Authorization header
//! and an endpoint's requirement, it runs the full claims → profile →
//! decision flow and returns either the principal or a typed error that
//! maps onto a status code. It holds no transport concerns itself.

use atlas_geo::GeoRegistry;
use atlas_rbac::Requirement;

use crate::claims::GatewayClaims;
use crate::error::{AuthError, AuthResult};
use crate::principal::Principal;
use crate::store::RoleStore;

/// Authorization guard for protected resources.
///
/// One guard is shared per process; each `authorize` call builds a fresh
/// request-scoped [`Principal`] and evaluates it against the endpoint's
/// requirement. On allow, the principal is returned so handlers can reuse
/// the resolved profile without a second store round-trip.
///
/// # Example
///
/// ```no_run
/// use atlas_auth::{MemoryRoleStore, PermissionGuard};
/// use atlas_rbac::Requirement;
///
/// # async fn example(authorization: Option<&str>) -> Result<(), atlas_auth::AuthError> {
/// let guard = PermissionGuard::new(MemoryRoleStore::new());
/// let requirement = Requirement::new("hr:payroll:view", "TH");
///
/// let principal = guard.authorize(authorization, &requirement).await?;
/// println!("allowed: {}", principal.id());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PermissionGuard<'r, S> {
    store: S,
    registry: &'r GeoRegistry,
}

impl<S: RoleStore> PermissionGuard<'static, S> {
    /// Create a guard over the shared built-in geography registry.
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: GeoRegistry::builtin(),
        }
    }
}

impl<'r, S: RoleStore> PermissionGuard<'r, S> {
    /// Create a guard over a custom geography registry.
    pub fn with_registry(store: S, registry: &'r GeoRegistry) -> Self {
        Self { store, registry }
    }

    /// The geography registry decisions are resolved against.
    pub fn registry(&self) -> &'r GeoRegistry {
        self.registry
    }

    /// Authorize a request against an endpoint requirement.
    ///
    /// Flow: extract claims from the Authorization header (the gateway has
    /// already verified the signature), build the principal profile (fails
    /// closed if any claimed role cannot be resolved), then evaluate.
    ///
    /// # Errors
    ///
    /// Every failure class denies the request; see [`AuthError`] for the
    /// status-code mapping. Denials surface the requested path only.
    pub async fn authorize(
        &self,
        authorization: Option<&str>,
        requirement: &Requirement,
    ) -> AuthResult<Principal> {
        let header = authorization.ok_or(AuthError::MissingAuthorization)?;
        let claims = GatewayClaims::from_bearer(header)?;
        let principal = Principal::resolve(&claims, &self.store, self.registry).await?;

        if !principal.is_allowed(requirement, self.registry) {
            tracing::info!(
                principal = %principal.id(),
                profile_id = %principal.profile_id(),
                path = %requirement.path,
                country = %requirement.country,
                "Access denied"
            );
            return Err(AuthError::AccessDenied {
                path: requirement.path.to_string(),
            });
        }

        tracing::debug!(
            principal = %principal.id(),
            profile_id = %principal.profile_id(),
            path = %requirement.path,
            "Access granted"
        );
        Ok(principal)
    }
}
