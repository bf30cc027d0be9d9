//! Access decision engine
//!
//! Pure, synchronous evaluation of a principal's roles against an
//! endpoint's requirement. All inputs are immutable; concurrent
//! evaluations share nothing but the read-only geography registry.

use std::collections::HashSet;

use atlas_geo::GeoRegistry;
use serde::{Deserialize, Serialize};

use crate::path::PermissionPath;
use crate::roles::Role;

/// Requirement country denoting "no geographic restriction requested".
pub const GLOBAL: &str = "GLOBAL";

/// The access condition an endpoint demands: a path plus a target country.
///
/// Requirements come from endpoint configuration, not runtime input, and
/// are trusted as-is.
///
/// # Example
///
/// ```
/// use atlas_rbac::Requirement;
///
/// let req = Requirement::new("hr:payroll:view", "th");
/// assert_eq!(req.country, "TH");
/// assert!(!req.is_global());
/// assert!(Requirement::new("hr:profile:view", "GLOBAL").is_global());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Requested action path.
    pub path: PermissionPath,

    /// Target country code, or `GLOBAL` for no geographic restriction.
    pub country: String,
}

impl Requirement {
    /// Create a requirement, normalizing the country code to uppercase.
    pub fn new(path: impl Into<PermissionPath>, country: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            country: country.into().to_ascii_uppercase(),
        }
    }

    /// Check whether this requirement carries no geographic restriction.
    pub fn is_global(&self) -> bool {
        self.country.eq_ignore_ascii_case(GLOBAL) || self.country == "*"
    }
}

/// The set of countries reachable through any permission of any role.
///
/// Computed once per principal as a fast pre-check. It deliberately
/// ignores `except_*` fields — exclusions are path-scoped and cannot be
/// soundly hoisted into a role-wide set — so membership here can only
/// shrink the candidate space, never finalize an allow.
///
/// Universal regions (and `*` country entries) set a wildcard marker
/// instead of enumerating every country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowedCountries {
    universal: bool,
    countries: HashSet<String>,
}

impl AllowedCountries {
    /// Compute the allowed-country set for a list of resolved roles.
    pub fn from_roles(roles: &[Role], registry: &GeoRegistry) -> Self {
        let mut set = Self::default();
        for role in roles {
            for perm in &role.permissions {
                for region in &perm.regions {
                    if registry.is_universal(region) {
                        set.universal = true;
                    } else {
                        set.countries.extend(
                            registry
                                .countries_of(region)
                                .iter()
                                .map(|c| c.to_ascii_uppercase()),
                        );
                    }
                }
                for country in &perm.countries {
                    if country == "*" {
                        set.universal = true;
                    } else {
                        set.countries.insert(country.to_ascii_uppercase());
                    }
                }
            }
        }
        set
    }

    /// Check membership; the wildcard marker matches everything.
    pub fn contains(&self, country: &str) -> bool {
        self.universal || self.countries.contains(&country.to_ascii_uppercase())
    }

    /// Whether the wildcard marker is set.
    pub fn is_universal(&self) -> bool {
        self.universal
    }

    /// The enumerated country codes (excludes the wildcard marker).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }
}

/// The access decision: evaluates a principal's roles against a requirement.
///
/// Evaluation is side-effect-free and borrows the shared immutable
/// [`GeoRegistry`], so any number of decisions may run in parallel.
///
/// # Example
///
/// ```
/// use atlas_geo::GeoRegistry;
/// use atlas_rbac::{AllowedCountries, Evaluator, Permission, Requirement, Role};
///
/// let roles = vec![Role::new("admin")
///     .with_permission(Permission::for_path("*:*:*").with_regions(["GLOBAL"]))];
/// let registry = GeoRegistry::builtin();
/// let allowed = AllowedCountries::from_roles(&roles, registry);
///
/// let evaluator = Evaluator::new(registry);
/// assert!(evaluator.is_allowed(&roles, &allowed, &Requirement::new("admin:items:view", "US")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    registry: &'r GeoRegistry,
}

impl Evaluator<'static> {
    /// Evaluator over the shared built-in registry.
    pub fn builtin() -> Self {
        Self {
            registry: GeoRegistry::builtin(),
        }
    }
}

impl<'r> Evaluator<'r> {
    /// Create an evaluator over a specific registry.
    pub fn new(registry: &'r GeoRegistry) -> Self {
        Self { registry }
    }

    /// The registry this evaluator resolves regions against.
    pub fn registry(&self) -> &'r GeoRegistry {
        self.registry
    }

    /// Compute the allowed-country pre-check set for resolved roles.
    pub fn allowed_countries(&self, roles: &[Role]) -> AllowedCountries {
        AllowedCountries::from_roles(roles, self.registry)
    }

    /// Decide whether the roles satisfy the requirement.
    ///
    /// 1. Pre-check: a non-GLOBAL requirement country absent from the
    ///    allowed set is rejected before any path matching. A GLOBAL
    ///    requirement always passes the pre-check — it requests no
    ///    geographic restriction.
    /// 2. Scan every permission of every role, in role order then
    ///    permission order:
    ///    - an `except_paths` hit anywhere denies the whole evaluation
    ///      immediately (absolute veto, not merely "this permission does
    ///      not grant");
    ///    - otherwise the first permission whose path and geography both
    ///      match allows immediately.
    /// 3. Default deny.
    pub fn is_allowed(
        &self,
        roles: &[Role],
        allowed: &AllowedCountries,
        requirement: &Requirement,
    ) -> bool {
        if !requirement.is_global() && !allowed.contains(&requirement.country) {
            return false;
        }

        for role in roles {
            for perm in &role.permissions {
                if perm.vetoes_path(&requirement.path) {
                    return false;
                }
                if perm.grants(&requirement.path, &requirement.country, self.registry) {
                    return true;
                }
            }
        }
        false
    }
}
