//! Hierarchical permission paths
//!
//! Permission paths identify actions as colon-separated segment tuples,
//! conventionally `domain:resource:action` (e.g. `hr:payroll:view`).
//! Patterns may use `*` as a per-segment wildcard.

use serde::{Deserialize, Serialize};

/// The per-segment wildcard, matching any single segment value.
pub const WILDCARD: &str = "*";

/// An ordered tuple of lowercase-normalized path segments.
///
/// A path doubles as a pattern: any segment equal to `*` matches any
/// single segment of the target. Matching is fixed-arity — a pattern and a
/// target match only if they have the same segment count, so
/// `admin:*:*` matches `admin:items:view` but never `admin:items` or
/// `admin:items:view:extra`.
///
/// Construction is infallible; malformed role data produces a path that
/// deterministically fails to match rather than an error.
///
/// # Example
///
/// ```
/// use atlas_rbac::PermissionPath;
///
/// let pattern = PermissionPath::from_pattern("hr:*:view");
/// let target = PermissionPath::from_pattern("HR:Payroll:View");
/// assert!(pattern.matches(&target));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PermissionPath {
    segments: Vec<String>,
}

impl PermissionPath {
    /// Parse a path or pattern from its colon-separated string form.
    ///
    /// Segments are normalized to lowercase, which makes later comparisons
    /// immune to casing inconsistencies between stored role documents and
    /// request paths.
    pub fn from_pattern(pattern: &str) -> Self {
        Self {
            segments: pattern.split(':').map(|s| s.to_ascii_lowercase()).collect(),
        }
    }

    /// The normalized segments of this path.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Check whether this pattern matches a target path.
    ///
    /// Returns true only if both have the same segment count and every
    /// pattern segment is either `*` or equal to the corresponding target
    /// segment (case-insensitively, via normalization at construction).
    ///
    /// # Example
    ///
    /// ```
    /// use atlas_rbac::PermissionPath;
    ///
    /// let pattern = PermissionPath::from_pattern("admin:*:*");
    /// assert!(pattern.matches(&PermissionPath::from_pattern("admin:items:view")));
    /// assert!(!pattern.matches(&PermissionPath::from_pattern("admin:items")));
    /// ```
    pub fn matches(&self, target: &PermissionPath) -> bool {
        if self.segments.len() != target.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(&target.segments)
            .all(|(pattern, segment)| pattern == WILDCARD || pattern == segment)
    }
}

impl From<String> for PermissionPath {
    fn from(s: String) -> Self {
        Self::from_pattern(&s)
    }
}

impl From<&str> for PermissionPath {
    fn from(s: &str) -> Self {
        Self::from_pattern(s)
    }
}

impl From<PermissionPath> for String {
    fn from(path: PermissionPath) -> Self {
        path.to_string()
    }
}

impl std::fmt::Display for PermissionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join(":"))
    }
}
