//! Principal profiles
//!
//! A principal profile is built once per authenticated request from the
//! caller's claimed roles, carries the derived allowed-country pre-check
//! set, and is discarded when the request completes. It is never persisted.

use atlas_geo::GeoRegistry;
use atlas_rbac::{AllowedCountries, Evaluator, Requirement, Role};
use uuid::Uuid;

use crate::claims::GatewayClaims;
use crate::error::{AuthError, AuthResult};
use crate::store::RoleStore;

/// The authenticated caller, materialized for one request.
///
/// Construction fails closed: if ANY claimed role cannot be resolved from
/// the store, no profile is built and no decision is made.
///
/// `allowed_countries` is derived from the roles and is a pre-check only —
/// membership there can still be denied by a specific permission's
/// exclusions during evaluation.
#[derive(Debug, Clone)]
pub struct Principal {
    id: String,
    profile_id: Uuid,
    roles: Vec<Role>,
    allowed_countries: AllowedCountries,
}

impl Principal {
    /// Build a principal profile from gateway claims.
    ///
    /// Resolves every claimed role identifier through the store and
    /// computes the allowed-country set.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingClaim`] if the username or roles claim is absent
    /// - [`AuthError::UnresolvableRole`] if any role lookup fails, for any
    ///   reason — not-found and store outages alike deny the whole request
    pub async fn resolve(
        claims: &GatewayClaims,
        store: &dyn RoleStore,
        registry: &GeoRegistry,
    ) -> AuthResult<Self> {
        let id = claims.username()?.to_string();
        let role_ids = claims.roles()?;

        let mut roles = Vec::with_capacity(role_ids.len());
        for role_id in role_ids {
            match store.resolve(role_id).await {
                Ok(role) => roles.push(role),
                Err(err) => {
                    tracing::warn!(
                        principal = %id,
                        role_id = %role_id,
                        error = %err,
                        "Failed to resolve claimed role"
                    );
                    return Err(AuthError::UnresolvableRole(role_id.clone()));
                }
            }
        }

        let allowed_countries = AllowedCountries::from_roles(&roles, registry);
        tracing::debug!(
            principal = %id,
            roles = roles.len(),
            "Principal profile constructed"
        );

        Ok(Self {
            id,
            profile_id: Uuid::now_v7(),
            roles,
            allowed_countries,
        })
    }

    /// Build a profile directly from already-resolved roles.
    ///
    /// For callers that materialize roles themselves (tests, batch tools).
    pub fn from_roles(id: impl Into<String>, roles: Vec<Role>, registry: &GeoRegistry) -> Self {
        let allowed_countries = AllowedCountries::from_roles(&roles, registry);
        Self {
            id: id.into(),
            profile_id: Uuid::now_v7(),
            roles,
            allowed_countries,
        }
    }

    /// The principal's identifier (the gateway's preferred username).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Unique id of this request-scoped profile, for log correlation.
    pub fn profile_id(&self) -> Uuid {
        self.profile_id
    }

    /// The resolved roles.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The derived allowed-country pre-check set.
    pub fn allowed_countries(&self) -> &AllowedCountries {
        &self.allowed_countries
    }

    /// Evaluate a requirement against this profile.
    pub fn is_allowed(&self, requirement: &Requirement, registry: &GeoRegistry) -> bool {
        Evaluator::new(registry).is_allowed(&self.roles, &self.allowed_countries, requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRoleStore;
    use atlas_rbac::Permission;

    fn hr_viewer() -> Role {
        Role::new("hr-viewer")
            .with_permission(Permission::for_path("hr:*:view").with_regions(["ASIA"]))
    }

    #[tokio::test]
    async fn test_resolve_builds_profile() {
        let store = MemoryRoleStore::from_roles([hr_viewer()]);
        let claims = GatewayClaims::new("j.doe").with_roles(["hr-viewer"]);

        let principal = Principal::resolve(&claims, &store, GeoRegistry::builtin())
            .await
            .unwrap();

        assert_eq!(principal.id(), "j.doe");
        assert_eq!(principal.roles().len(), 1);
        assert!(principal.allowed_countries().contains("TH"));
        assert!(!principal.allowed_countries().contains("US"));
    }

    #[tokio::test]
    async fn test_resolve_fails_closed_on_unknown_role() {
        let store = MemoryRoleStore::from_roles([hr_viewer()]);
        let claims = GatewayClaims::new("j.doe").with_roles(["hr-viewer", "ghost"]);

        let err = Principal::resolve(&claims, &store, GeoRegistry::builtin())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UnresolvableRole(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_resolve_requires_roles_claim() {
        let store = MemoryRoleStore::new();
        let mut claims = GatewayClaims::new("j.doe");
        claims.roles = None;

        let err = Principal::resolve(&claims, &store, GeoRegistry::builtin())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingClaim(claim) if claim == "roles"));
    }

    #[tokio::test]
    async fn test_profile_evaluation() {
        let store = MemoryRoleStore::from_roles([hr_viewer()]);
        let claims = GatewayClaims::new("j.doe").with_roles(["hr-viewer"]);
        let registry = GeoRegistry::builtin();

        let principal = Principal::resolve(&claims, &store, registry).await.unwrap();

        assert!(principal.is_allowed(&Requirement::new("hr:profile:view", "TH"), registry));
        assert!(!principal.is_allowed(&Requirement::new("hr:profile:edit", "TH"), registry));
        assert!(!principal.is_allowed(&Requirement::new("hr:profile:view", "US"), registry));
    }

    #[test]
    fn test_from_roles() {
        let registry = GeoRegistry::builtin();
        let principal = Principal::from_roles("batch", vec![hr_viewer()], registry);
        assert_eq!(principal.id(), "batch");
        assert!(principal.allowed_countries().contains("JP"));
    }
}
