//! # Atlas Authorization Boundary
//!
//! This crate connects the pure evaluation engine in `atlas-rbac` to the
//! outside world: gateway-verified tokens on one side, the role store on
//! the other, and a request guard on top.
//!
//! ## Overview
//!
//! The atlas-auth crate handles:
//! - **Claims**: typed extraction from tokens the upstream gateway has
//!   already authenticated (no signature validation here)
//! - **Role store**: the async collaborator interface for loading role
//!   documents, with an in-memory implementation for tests and
//!   single-process deployments
//! - **Principals**: request-scoped profiles with the derived
//!   allowed-country pre-check set, built fail-closed
//! - **Guard**: the end-to-end authorize flow HTTP layers consume
//!
//! ## Trust model
//!
//! The upstream gateway authenticates callers, verifies token signatures,
//! and enforces expiry. Everything arriving here is treated as an
//! authenticated assertion; what remains is authorization: resolving the
//! claimed roles and deciding the request. Any failure along the way —
//! malformed header, missing claim, unresolvable role, or a negative
//! evaluation — denies the request. There is no pass-through on error.
//!
//! ## Usage
//!
//! ```rust
//! use atlas_auth::{MemoryRoleStore, PermissionGuard};
//! use atlas_rbac::{Permission, Requirement, Role};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryRoleStore::from_roles([Role::new("hr-viewer")
//!     .with_permission(Permission::for_path("hr:*:view").with_regions(["ASIA"]))]);
//! let guard = PermissionGuard::new(store);
//!
//! // Endpoint configuration
//! let requirement = Requirement::new("hr:profile:view", "TH");
//!
//! let verdict = guard.authorize(None, &requirement).await;
//! assert_eq!(verdict.unwrap_err().status_code(), 401);
//! # }
//! ```
//!
//! ## Integration
//!
//! This crate integrates with:
//! - `atlas-rbac`: permission evaluation over the resolved roles
//! - `atlas-geo`: the shared geography registry

pub mod claims;
pub mod error;
pub mod guard;
pub mod principal;
pub mod store;

// Re-export main types
pub use claims::GatewayClaims;
pub use error::{AuthError, AuthResult};
pub use guard::PermissionGuard;
pub use principal::Principal;
pub use store::{MemoryRoleStore, RoleStore, RoleStoreError};
