//! Region-to-country lookup registry
//!
//! The registry is the single authority for expanding region names into
//! country codes during permission evaluation. It is immutable once built
//! and safe to share across concurrent evaluations.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::regions::Region;

const EMPTY: &[String] = &[];

/// Immutable lookup table from region names to member country codes.
///
/// Lookups never fail: an unknown region name yields an empty member list,
/// so role documents may reference regions the registry does not (yet)
/// define — those regions simply grant nothing.
///
/// The universal region (`GLOBAL`, or the literal `*`) is handled through
/// [`GeoRegistry::is_universal`] rather than a materialized country list.
///
/// # Examples
///
/// ```
/// use atlas_geo::GeoRegistry;
///
/// let registry = GeoRegistry::builtin();
/// assert!(registry.region_contains("ASIA", "TH"));
/// assert!(registry.region_contains("GLOBAL", "ZZ"));
/// assert!(registry.countries_of("ATLANTIS").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoRegistry {
    regions: HashMap<String, Vec<String>>,
}

impl GeoRegistry {
    /// Create a registry seeded with the built-in continental regions.
    pub fn new() -> Self {
        let mut regions = HashMap::new();
        for region in Region::ALL {
            if region.is_universal() {
                continue;
            }
            regions.insert(
                region.as_str().to_string(),
                region.countries().iter().map(|c| c.to_string()).collect(),
            );
        }
        Self { regions }
    }

    /// Create an empty registry with no regions defined.
    ///
    /// The universal region is still recognized: universality is a property
    /// of the name, not of registry contents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the shared process-wide registry, initialized on first use.
    ///
    /// Evaluators borrow this instance instead of rebuilding the table per
    /// request; it is immutable and requires no locking.
    pub fn builtin() -> &'static GeoRegistry {
        static REGISTRY: OnceLock<GeoRegistry> = OnceLock::new();
        REGISTRY.get_or_init(GeoRegistry::new)
    }

    /// Add or replace a region definition.
    ///
    /// Region names and country codes are normalized to uppercase. Useful
    /// for deployments with custom groupings and for tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_geo::GeoRegistry;
    ///
    /// let registry = GeoRegistry::new().with_region("SEA", ["TH", "SG", "MY"]);
    /// assert!(registry.region_contains("SEA", "th"));
    /// ```
    pub fn with_region<I, S>(mut self, name: impl Into<String>, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into().to_ascii_uppercase();
        let countries = countries
            .into_iter()
            .map(|c| c.into().to_ascii_uppercase())
            .collect();
        self.regions.insert(name, countries);
        self
    }

    /// Get the member country codes of a region.
    ///
    /// Returns an empty slice for unknown regions and for the universal
    /// region (whose membership is never enumerated).
    pub fn countries_of(&self, region: &str) -> &[String] {
        self.regions
            .get(region.to_ascii_uppercase().as_str())
            .map(Vec::as_slice)
            .unwrap_or(EMPTY)
    }

    /// Check whether a region denotes unconditional universal membership.
    ///
    /// True for `GLOBAL` and the literal `*`, and for any registered region
    /// whose member list carries a `*` entry.
    pub fn is_universal(&self, region: &str) -> bool {
        if region == "*" || region.eq_ignore_ascii_case("GLOBAL") {
            return true;
        }
        self.countries_of(region).iter().any(|c| c == "*")
    }

    /// Check whether a country belongs to a region.
    ///
    /// Universal regions contain every country; otherwise membership is a
    /// case-insensitive comparison against the region's member list.
    pub fn region_contains(&self, region: &str, country: &str) -> bool {
        if self.is_universal(region) {
            return true;
        }
        self.countries_of(region)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country))
    }

    /// Names of all registered regions.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}
