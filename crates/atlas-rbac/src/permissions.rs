//! Permission rules
//!
//! A permission grants a path pattern within a geographic scope, expressed
//! as included/excluded regions and countries plus excluded path patterns.

use atlas_geo::GeoRegistry;
use serde::{Deserialize, Serialize};

use crate::path::PermissionPath;

/// A single grant/deny rule attached to a role.
///
/// Geography is resolved per country code: exclusions always take
/// precedence over inclusions within the same permission, regardless of
/// declaration order, so a permission that both includes and excludes a
/// country denies it. `except_paths` carves path patterns out of the grant
/// and acts as an absolute veto during evaluation.
///
/// All fields default to empty, matching how role documents are stored.
///
/// # Example
///
/// ```
/// use atlas_geo::GeoRegistry;
/// use atlas_rbac::Permission;
///
/// let perm = Permission::for_path("hr:payroll:view")
///     .with_regions(["ASIA"])
///     .with_except_countries(["MM"]);
///
/// let registry = GeoRegistry::builtin();
/// assert!(perm.permits_country("TH", registry));
/// assert!(!perm.permits_country("MM", registry));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Path pattern this permission grants.
    #[serde(default)]
    pub path: PermissionPath,

    /// Region names whose member countries are included.
    #[serde(default)]
    pub regions: Vec<String>,

    /// Individual country codes included.
    #[serde(default)]
    pub countries: Vec<String>,

    /// Region names whose member countries are excluded.
    #[serde(default)]
    pub except_regions: Vec<String>,

    /// Individual country codes excluded.
    #[serde(default)]
    pub except_countries: Vec<String>,

    /// Path patterns vetoed by this permission.
    #[serde(default)]
    pub except_paths: Vec<PermissionPath>,
}

impl Permission {
    /// Create a permission for a path pattern with no geographic scope.
    ///
    /// Without regions or countries the permission grants nothing; add
    /// scope with the `with_*` builders.
    pub fn for_path(path: impl Into<PermissionPath>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the included regions.
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the included countries.
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the excluded regions.
    pub fn with_except_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except_regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the excluded countries.
    pub fn with_except_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except_countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the vetoed path patterns.
    pub fn with_except_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionPath>,
    {
        self.except_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Decide whether this permission's geography admits a country.
    ///
    /// Evaluation order is fixed and short-circuiting:
    /// 1. country listed in `except_countries` → deny
    /// 2. country member of any `except_regions` entry (universal regions
    ///    exclude everything) → deny
    /// 3. country listed in `countries` → allow
    /// 4. country member of any `regions` entry (a universal region allows
    ///    any country unconditionally) → allow
    /// 5. otherwise deny
    pub fn permits_country(&self, country: &str, registry: &GeoRegistry) -> bool {
        if list_contains(&self.except_countries, country) {
            return false;
        }
        if self
            .except_regions
            .iter()
            .any(|region| registry.region_contains(region, country))
        {
            return false;
        }
        if list_contains(&self.countries, country) {
            return true;
        }
        self.regions
            .iter()
            .any(|region| registry.region_contains(region, country))
    }

    /// Check whether any `except_paths` pattern matches the target path.
    pub fn vetoes_path(&self, target: &PermissionPath) -> bool {
        self.except_paths.iter().any(|pattern| pattern.matches(target))
    }

    /// Check whether this permission grants the requested path and country.
    ///
    /// Does not consider `except_paths`; the veto is evaluated separately
    /// by the access decision because it aborts the whole evaluation rather
    /// than this permission alone.
    pub fn grants(&self, path: &PermissionPath, country: &str, registry: &GeoRegistry) -> bool {
        self.path.matches(path) && self.permits_country(country, registry)
    }
}

/// Case-insensitive membership test with support for the `*` wildcard entry.
fn list_contains(list: &[String], target: &str) -> bool {
    list.iter()
        .any(|entry| entry == "*" || entry.eq_ignore_ascii_case(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static GeoRegistry {
        GeoRegistry::builtin()
    }

    #[test]
    fn test_included_country_allows() {
        let perm = Permission::for_path("hr:payroll:view").with_countries(["TH"]);
        assert!(perm.permits_country("TH", registry()));
        assert!(perm.permits_country("th", registry()));
        assert!(!perm.permits_country("US", registry()));
    }

    #[test]
    fn test_included_region_allows_members_only() {
        let perm = Permission::for_path("hr:payroll:view").with_regions(["ASIA"]);
        assert!(perm.permits_country("TH", registry()));
        assert!(perm.permits_country("JP", registry()));
        assert!(!perm.permits_country("US", registry()));
    }

    #[test]
    fn test_exclusion_beats_inclusion() {
        let perm = Permission::for_path("hr:payroll:view")
            .with_countries(["TH"])
            .with_except_countries(["TH"]);
        assert!(!perm.permits_country("TH", registry()));
    }

    #[test]
    fn test_excluded_region_beats_included_country() {
        let perm = Permission::for_path("hr:payroll:view")
            .with_countries(["TH"])
            .with_except_regions(["ASIA"]);
        assert!(!perm.permits_country("TH", registry()));
        // Countries outside the excluded region are unaffected.
        let perm = perm.with_countries(["US"]);
        assert!(perm.permits_country("US", registry()));
    }

    #[test]
    fn test_universal_region_permits_every_country() {
        let perm = Permission::for_path("*:*:*").with_regions(["GLOBAL"]);
        for country in ["TH", "US", "ZZ"] {
            assert!(perm.permits_country(country, registry()));
        }
    }

    #[test]
    fn test_universal_except_region_denies_every_country() {
        let perm = Permission::for_path("*:*:*")
            .with_regions(["GLOBAL"])
            .with_except_regions(["GLOBAL"]);
        assert!(!perm.permits_country("TH", registry()));
    }

    #[test]
    fn test_unknown_region_grants_nothing() {
        let perm = Permission::for_path("hr:payroll:view").with_regions(["ATLANTIS"]);
        assert!(!perm.permits_country("TH", registry()));
    }

    #[test]
    fn test_wildcard_country_entry() {
        let perm = Permission::for_path("hr:payroll:view").with_countries(["*"]);
        assert!(perm.permits_country("ZZ", registry()));
    }

    #[test]
    fn test_empty_permission_denies() {
        let perm = Permission::for_path("hr:payroll:view");
        assert!(!perm.permits_country("TH", registry()));
    }

    #[test]
    fn test_vetoes_path() {
        let perm = Permission::for_path("hr:payroll:view").with_except_paths(["hr:payroll:*"]);
        assert!(perm.vetoes_path(&PermissionPath::from_pattern("hr:payroll:view")));
        assert!(!perm.vetoes_path(&PermissionPath::from_pattern("hr:profile:view")));
    }

    #[test]
    fn test_deserializes_from_role_document() {
        let perm: Permission = serde_json::from_str(
            r#"{
                "path": "hr:payroll:view",
                "regions": ["ASIA"],
                "except_countries": ["MM"]
            }"#,
        )
        .unwrap();
        assert_eq!(perm.path, PermissionPath::from_pattern("hr:payroll:view"));
        assert!(perm.countries.is_empty());
        assert!(perm.except_paths.is_empty());
        assert!(perm.permits_country("TH", registry()));
        assert!(!perm.permits_country("MM", registry()));
    }
}
