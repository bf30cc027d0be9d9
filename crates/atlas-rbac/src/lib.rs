//! # Atlas RBAC (Role-Based Access Control)
//!
//! This crate provides the geography-scoped permission evaluation engine
//! for the Atlas platform.
//!
//! ## Overview
//!
//! The atlas-rbac crate handles:
//! - **Paths**: hierarchical action identifiers with per-segment wildcards
//! - **Permissions**: path patterns scoped by included/excluded regions,
//!   countries, and vetoed path patterns
//! - **Roles**: ordered permission lists materialized from the role store
//! - **Decisions**: the aggregate multi-role allow/deny evaluation
//!
//! ## Architecture
//!
//! ```text
//! Permission = Path pattern + geography (regions/countries ± exclusions)
//!
//! Examples:
//!   path "hr:payroll:view", regions ["ASIA"]       - payroll viewing across Asia
//!   path "hr:*:view", countries ["TH"]             - view any HR resource in Thailand
//!   path "*:*:*", regions ["GLOBAL"]               - everything, everywhere
//! ```
//!
//! Evaluation is a pure function over immutable inputs: the shared
//! [`GeoRegistry`](atlas_geo::GeoRegistry), the principal's resolved roles,
//! and the endpoint's [`Requirement`]. Exclusions always beat inclusions
//! within a permission, an `except_paths` hit vetoes the entire evaluation,
//! and anything not explicitly granted is denied.
//!
//! ## Usage
//!
//! ```rust
//! use atlas_rbac::{Evaluator, Permission, Requirement, Role};
//!
//! let roles = vec![Role::new("hr-asia").with_permission(
//!     Permission::for_path("hr:payroll:view")
//!         .with_regions(["ASIA"])
//!         .with_except_countries(["MM"]),
//! )];
//!
//! let evaluator = Evaluator::builtin();
//! let allowed = evaluator.allowed_countries(&roles);
//!
//! assert!(evaluator.is_allowed(&roles, &allowed, &Requirement::new("hr:payroll:view", "TH")));
//! assert!(!evaluator.is_allowed(&roles, &allowed, &Requirement::new("hr:payroll:view", "MM")));
//! ```
//!
//! ## Integration with atlas-auth
//!
//! `atlas-auth` builds the request-scoped principal profile (roles plus the
//! cached [`AllowedCountries`] pre-check set) and drives this evaluator on
//! every guarded request.

pub mod engine;
pub mod path;
pub mod permissions;
pub mod roles;

// Re-export main types for convenience
pub use engine::{AllowedCountries, Evaluator, Requirement, GLOBAL};
pub use path::{PermissionPath, WILDCARD};
pub use permissions::Permission;
pub use roles::Role;
