//! Role definitions
//!
//! A role bundles an ordered list of permissions under a stable identifier.
//! Roles are materialized from the role store before evaluation and are
//! immutable for a request's lifetime.

use serde::{Deserialize, Serialize};

use crate::permissions::Permission;

/// A named set of permission rules.
///
/// Permission order carries no granting semantics — any permission may
/// grant — but each permission's own `except_paths` veto is checked before
/// its grant during the evaluation scan.
///
/// The serialized field name `role_id` matches the stored role documents.
///
/// # Example
///
/// ```
/// use atlas_rbac::{Permission, Role};
///
/// let role = Role::new("hr-viewer")
///     .with_permission(Permission::for_path("hr:*:view").with_regions(["ASIA"]));
/// assert_eq!(role.id, "hr-viewer");
/// assert_eq!(role.permissions.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Stable role identifier, as claimed in gateway tokens.
    #[serde(rename = "role_id")]
    pub id: String,

    /// Permissions attached to this role.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Create an empty role with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            permissions: Vec::new(),
        }
    }

    /// Append a permission.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.push(permission);
        self
    }

    /// Append multiple permissions.
    pub fn with_permissions<I>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.permissions.extend(permissions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_builder() {
        let role = Role::new("auditor")
            .with_permission(Permission::for_path("hr:payroll:view").with_countries(["TH"]))
            .with_permission(Permission::for_path("hr:profile:view").with_regions(["GLOBAL"]));
        assert_eq!(role.id, "auditor");
        assert_eq!(role.permissions.len(), 2);
    }

    #[test]
    fn test_deserializes_from_stored_document() {
        let role: Role = serde_json::from_str(
            r#"{
                "role_id": "hr-admin",
                "permissions": [
                    {"path": "hr:*:*", "regions": ["GLOBAL"], "except_paths": ["hr:payroll:*"]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(role.id, "hr-admin");
        assert_eq!(role.permissions[0].regions, vec!["GLOBAL"]);
        assert_eq!(role.permissions[0].except_paths.len(), 1);
    }

    #[test]
    fn test_missing_permissions_defaults_empty() {
        let role: Role = serde_json::from_str(r#"{"role_id": "empty"}"#).unwrap();
        assert!(role.permissions.is_empty());
    }
}
