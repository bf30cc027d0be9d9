//! Role store collaborator
//!
//! Role definitions live in external storage. The engine consumes them
//! through the [`RoleStore`] trait so that evaluation code never touches a
//! database handle and tests can substitute an in-memory store.

use std::collections::HashMap;

use async_trait::async_trait;
use atlas_rbac::Role;
use thiserror::Error;
use tokio::sync::RwLock;

/// Role store error types.
///
/// Callers translate every variant into a fail-closed authorization
/// failure; an unreachable store must never grant by default.
#[derive(Debug, Error)]
pub enum RoleStoreError {
    /// No role record exists for the identifier
    #[error("role not found: {0}")]
    NotFound(String),

    /// The backing store could not be reached
    #[error("role store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent collaborator resolving role identifiers to role records.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Resolve a role identifier to its stored definition.
    async fn resolve(&self, role_id: &str) -> Result<Role, RoleStoreError>;
}

/// In-memory role store.
///
/// Suitable for single-process deployments and testing; production
/// deployments implement [`RoleStore`] over their document database.
///
/// # Example
///
/// ```
/// use atlas_auth::MemoryRoleStore;
/// use atlas_rbac::{Permission, Role};
///
/// let store = MemoryRoleStore::from_roles([Role::new("hr-viewer")
///     .with_permission(Permission::for_path("hr:*:view").with_regions(["ASIA"]))]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    roles: RwLock<HashMap<String, Role>>,
}

impl MemoryRoleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with role definitions.
    pub fn from_roles<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            roles: RwLock::new(
                roles
                    .into_iter()
                    .map(|role| (role.id.clone(), role))
                    .collect(),
            ),
        }
    }

    /// Insert or replace a role definition.
    pub async fn insert(&self, role: Role) {
        self.roles.write().await.insert(role.id.clone(), role);
    }

    /// Remove a role definition.
    pub async fn remove(&self, role_id: &str) -> bool {
        self.roles.write().await.remove(role_id).is_some()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn resolve(&self, role_id: &str) -> Result<Role, RoleStoreError> {
        self.roles
            .read()
            .await
            .get(role_id)
            .cloned()
            .ok_or_else(|| RoleStoreError::NotFound(role_id.to_string()))
    }
}
