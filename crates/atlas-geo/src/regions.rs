//! Built-in region definitions
//!
//! This module defines the continental regions shipped with the platform
//! and their ISO 3166-1 alpha-2 member country codes.

use serde::{Deserialize, Serialize};

/// A built-in named grouping of country codes.
///
/// Role documents reference regions by name (e.g. `"ASIA"`); the special
/// [`Region::Global`] region denotes unconditional universal membership and
/// is never expanded into an enumerated country list.
///
/// # Examples
///
/// ```
/// use atlas_geo::Region;
///
/// assert_eq!(Region::parse("asia"), Some(Region::Asia));
/// assert_eq!(Region::parse("*"), Some(Region::Global));
/// assert_eq!(Region::Asia.as_str(), "ASIA");
/// assert!(Region::Global.is_universal());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    /// All African countries
    Africa,

    /// All Asian countries, including the Middle East
    Asia,

    /// All European countries
    Europe,

    /// North and Central America plus the Caribbean
    NorthAmerica,

    /// All South American countries
    SouthAmerica,

    /// Australia and the Pacific islands
    Oceania,

    /// Antarctica
    Antarctica,

    /// Universal region matching every country
    Global,
}

impl Region {
    /// All built-in regions, universal region included.
    pub const ALL: [Region; 8] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Oceania,
        Region::Antarctica,
        Region::Global,
    ];

    /// Parse a region from its string name.
    ///
    /// Parsing is case-insensitive; the literal `*` is a synonym for
    /// `GLOBAL`. Unknown names return `None` — role documents are allowed
    /// to reference regions the platform does not define.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_geo::Region;
    ///
    /// assert_eq!(Region::parse("NORTH_AMERICA"), Some(Region::NorthAmerica));
    /// assert_eq!(Region::parse("global"), Some(Region::Global));
    /// assert_eq!(Region::parse("ATLANTIS"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        if s == "*" {
            return Some(Self::Global);
        }
        match s.to_ascii_uppercase().as_str() {
            "AFRICA" => Some(Self::Africa),
            "ASIA" => Some(Self::Asia),
            "EUROPE" => Some(Self::Europe),
            "NORTH_AMERICA" => Some(Self::NorthAmerica),
            "SOUTH_AMERICA" => Some(Self::SouthAmerica),
            "OCEANIA" => Some(Self::Oceania),
            "ANTARCTICA" => Some(Self::Antarctica),
            "GLOBAL" => Some(Self::Global),
            _ => None,
        }
    }

    /// Get the canonical string name of the region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Africa => "AFRICA",
            Self::Asia => "ASIA",
            Self::Europe => "EUROPE",
            Self::NorthAmerica => "NORTH_AMERICA",
            Self::SouthAmerica => "SOUTH_AMERICA",
            Self::Oceania => "OCEANIA",
            Self::Antarctica => "ANTARCTICA",
            Self::Global => "GLOBAL",
        }
    }

    /// Check whether this is the universal region.
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Global)
    }

    /// Get the ISO 3166-1 alpha-2 member codes of this region.
    ///
    /// The universal region returns an empty slice: its membership is a
    /// predicate, not an enumerated list.
    pub fn countries(&self) -> &'static [&'static str] {
        match self {
            Self::Africa => &[
                "DZ", "AO", "BJ", "BW", "BF", "BI", "CV", "CM", "CF", "TD", "KM", "CG", "CD",
                "CI", "DJ", "EG", "GQ", "ER", "SZ", "ET", "GA", "GM", "GH", "GN", "GW", "KE",
                "LS", "LR", "LY", "MG", "MW", "ML", "MR", "MU", "MA", "MZ", "NA", "NE", "NG",
                "RW", "ST", "SN", "SC", "SL", "SO", "ZA", "SS", "SD", "TZ", "TG", "TN", "UG",
                "EH", "ZM", "ZW",
            ],
            Self::Asia => &[
                "AF", "AM", "AZ", "BH", "BD", "BT", "BN", "KH", "CN", "CY", "GE", "IN", "ID",
                "IR", "IQ", "IL", "JP", "JO", "KZ", "KW", "KG", "LA", "LB", "MY", "MV", "MN",
                "MM", "NP", "KP", "OM", "PK", "PS", "PH", "QA", "RU", "SA", "SG", "KR", "LK",
                "SY", "TW", "TJ", "TH", "TL", "TR", "TM", "AE", "UZ", "VN", "YE",
            ],
            Self::Europe => &[
                "AL", "AD", "AT", "BY", "BE", "BA", "BG", "HR", "CY", "CZ", "DK", "EE", "FI",
                "FR", "DE", "GR", "HU", "IS", "IE", "IT", "LV", "LI", "LT", "LU", "MT", "MD",
                "MC", "ME", "NL", "MK", "NO", "PL", "PT", "RO", "SM", "RS", "SK", "SI", "ES",
                "SE", "CH", "UA", "UK", "VA",
            ],
            Self::NorthAmerica => &[
                "AG", "BS", "BB", "BZ", "CA", "CR", "CU", "DM", "DO", "SV", "GD", "GT", "HT",
                "HN", "JM", "MX", "NI", "PA", "KN", "LC", "VC", "TT", "US",
            ],
            Self::SouthAmerica => &[
                "AR", "BO", "BR", "CL", "CO", "EC", "GY", "PY", "PE", "SR", "UY", "VE",
            ],
            Self::Oceania => &[
                "AU", "FJ", "KI", "MH", "FM", "NR", "NZ", "PW", "PG", "WS", "SB", "TO", "TV",
                "VU",
            ],
            Self::Antarctica => &["AQ"],
            Self::Global => &[],
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
