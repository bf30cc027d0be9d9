//! # Atlas Geography Registry
//!
//! This crate provides the static region-to-country lookup used by the
//! Atlas authorization engine to scope permissions geographically.
//!
//! ## Overview
//!
//! The atlas-geo crate handles:
//! - **Regions**: built-in continental groupings of ISO 3166-1 alpha-2 codes
//! - **Registry**: immutable region-name lookup shared across evaluations
//! - **Universal membership**: the reserved `GLOBAL` region (synonym `*`)
//!   matching every country without enumerating one
//!
//! ## Usage
//!
//! ```rust
//! use atlas_geo::{GeoRegistry, Region};
//!
//! // The shared process-wide registry
//! let registry = GeoRegistry::builtin();
//! assert!(registry.region_contains("ASIA", "TH"));
//!
//! // Unknown regions grant nothing and never error
//! assert!(registry.countries_of("SEA").is_empty());
//!
//! // Deployments can define their own groupings
//! let registry = GeoRegistry::new().with_region("SEA", ["TH", "SG", "MY", "VN"]);
//! assert!(registry.region_contains("SEA", "VN"));
//!
//! // GLOBAL is universal
//! assert!(registry.is_universal(Region::Global.as_str()));
//! ```
//!
//! ## Integration with atlas-rbac
//!
//! Permission evaluation borrows a `&GeoRegistry` rather than owning one,
//! so concurrent evaluations share a single immutable table.

pub mod regions;
pub mod registry;

// Re-export main types for convenience
pub use regions::Region;
pub use registry::GeoRegistry;
