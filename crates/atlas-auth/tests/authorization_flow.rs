//! End-to-end authorization flow tests
//!
//! Drives the guard the way an HTTP layer would: forged gateway tokens in,
//! allow/deny verdicts out, with role documents served from the in-memory
//! store.

use async_trait::async_trait;
use atlas_auth::{
    AuthError, GatewayClaims, MemoryRoleStore, PermissionGuard, RoleStore, RoleStoreError,
};
use atlas_geo::GeoRegistry;
use atlas_rbac::{Permission, Requirement, Role};
use jsonwebtoken::{encode, EncodingKey, Header};

/// Sign a token the way the gateway would; this platform never checks the key.
fn bearer(claims: &GatewayClaims) -> String {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"gateway-secret"),
    )
    .unwrap();
    format!("Bearer {token}")
}

fn sea_registry() -> GeoRegistry {
    GeoRegistry::new().with_region(
        "SEA",
        ["TH", "SG", "MY", "ID", "PH", "VN", "KH", "LA", "MM", "BN", "TL"],
    )
}

fn role_catalog() -> MemoryRoleStore {
    MemoryRoleStore::from_roles([
        Role::new("payroll-sea").with_permission(
            Permission::for_path("hr:payroll:view")
                .with_regions(["SEA"])
                .with_except_countries(["MM"]),
        ),
        Role::new("admin-global")
            .with_permission(Permission::for_path("*:*:*").with_regions(["GLOBAL"])),
        Role::new("hr-th")
            .with_permission(Permission::for_path("hr:*:view").with_countries(["TH"])),
        Role::new("payroll-blocked").with_permission(
            Permission::for_path("hr:payroll:view").with_except_paths(["hr:payroll:*"]),
        ),
    ])
}

#[tokio::test]
async fn region_grant_with_country_exclusion() {
    let registry = sea_registry();
    let guard = PermissionGuard::with_registry(role_catalog(), &registry);
    let header = bearer(&GatewayClaims::new("j.doe").with_roles(["payroll-sea"]));

    let principal = guard
        .authorize(Some(&header), &Requirement::new("hr:payroll:view", "TH"))
        .await
        .unwrap();
    assert_eq!(principal.id(), "j.doe");

    let err = guard
        .authorize(Some(&header), &Requirement::new("hr:payroll:view", "MM"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AccessDenied { .. }));
}

#[tokio::test]
async fn global_admin_reaches_everything() {
    let guard = PermissionGuard::new(role_catalog());
    let header = bearer(&GatewayClaims::new("root").with_roles(["admin-global"]));

    for (path, country) in [
        ("admin:items:view", "US"),
        ("hr:payroll:view", "TH"),
        ("hr:profile:view", "GLOBAL"),
    ] {
        guard
            .authorize(Some(&header), &Requirement::new(path, country))
            .await
            .unwrap_or_else(|e| panic!("{path}/{country} should be allowed: {e}"));
    }
}

#[tokio::test]
async fn veto_wins_across_roles() {
    // hr-th would grant hr:payroll:view in TH; payroll-blocked vetoes the
    // path for the whole principal.
    let guard = PermissionGuard::new(role_catalog());
    let header = bearer(&GatewayClaims::new("j.doe").with_roles(["hr-th", "payroll-blocked"]));

    let err = guard
        .authorize(Some(&header), &Requirement::new("hr:payroll:view", "TH"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AccessDenied { .. }));

    // Unvetoed paths granted by hr-th still work.
    guard
        .authorize(Some(&header), &Requirement::new("hr:profile:view", "TH"))
        .await
        .unwrap();
}

#[tokio::test]
async fn country_outside_profile_is_rejected_by_pre_check() {
    let guard = PermissionGuard::new(role_catalog());
    let header = bearer(&GatewayClaims::new("j.doe").with_roles(["hr-th"]));

    let err = guard
        .authorize(Some(&header), &Requirement::new("hr:profile:view", "US"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AccessDenied { .. }));
}

#[tokio::test]
async fn unknown_claimed_role_fails_closed() {
    let guard = PermissionGuard::new(role_catalog());
    let header = bearer(&GatewayClaims::new("j.doe").with_roles(["admin-global", "ghost"]));

    // A universal role elsewhere in the claim list must not rescue the request.
    let err = guard
        .authorize(Some(&header), &Requirement::new("hr:profile:view", "GLOBAL"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnresolvableRole(id) if id == "ghost"));
}

struct UnavailableStore;

#[async_trait]
impl RoleStore for UnavailableStore {
    async fn resolve(&self, _role_id: &str) -> Result<Role, RoleStoreError> {
        Err(RoleStoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn store_outage_fails_closed() {
    let guard = PermissionGuard::new(UnavailableStore);
    let header = bearer(&GatewayClaims::new("j.doe").with_roles(["hr-th"]));

    let err = guard
        .authorize(Some(&header), &Requirement::new("hr:profile:view", "TH"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnresolvableRole(_)));
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn token_without_bearer_scheme_is_rejected() {
    let guard = PermissionGuard::new(role_catalog());

    let err = guard
        .authorize(
            Some("Token abc.def.ghi"),
            &Requirement::new("hr:profile:view", "GLOBAL"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidAuthorization(_)));
    assert_eq!(err.status_code(), 401);
}
