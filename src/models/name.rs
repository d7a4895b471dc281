use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extractor::NameNormalizer;

/// Canonical song name used as the aggregation key.
///
/// Only constructible through [`NameNormalizer`], so every value already
/// satisfies the normalization rules. Deserialized values are normalized too.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalizes `raw` into a canonical name.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::NormalizedName;
    ///
    /// let name = NormalizedName::new("  Song\u{3000} A ");
    /// assert_eq!(name.as_str(), "Song A");
    /// ```
    pub fn new(raw: &str) -> Self {
        NameNormalizer::normalize(raw)
    }

    /// Wraps a string that is already in canonical form.
    pub(crate) fn from_canonical(canonical: String) -> Self {
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for NormalizedName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for NormalizedName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
