use crate::models::NormalizedName;

/// Post-processing layer for song name canonicalization.
///
/// Ensures visually equivalent names aggregate under one key regardless of
/// OCR spacing artifacts. Case is preserved.
pub struct NameNormalizer;

impl NameNormalizer {
    /// Normalizes a single name.
    ///
    /// # Normalization rules
    ///
    /// - Replaces full-width spaces (U+3000) with regular spaces
    /// - Collapses runs of whitespace into a single space
    /// - Trims leading/trailing whitespace
    ///
    /// The result is idempotent: normalizing a normalized name yields itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::extractor::NameNormalizer;
    ///
    /// assert_eq!(NameNormalizer::normalize("Song\u{3000}A").as_str(), "Song A");
    /// assert_eq!(NameNormalizer::normalize("  Song \t  A  ").as_str(), "Song A");
    /// assert_eq!(NameNormalizer::normalize("song a").as_str(), "song a");
    /// ```
    #[must_use]
    pub fn normalize(name: &str) -> NormalizedName {
        let widened = name.replace('\u{3000}', " ");

        // split_whitespace also drops leading and trailing runs
        let collapsed = widened.split_whitespace().collect::<Vec<_>>().join(" ");

        NormalizedName::from_canonical(collapsed)
    }

    /// Normalizes a collection of names, dropping any that end up empty.
    ///
    /// Order and repeats are preserved; every element is one occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::extractor::NameNormalizer;
    ///
    /// let names = NameNormalizer::normalize_all(["A", "  ", "A\u{3000}"]);
    /// let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    /// assert_eq!(names, vec!["A", "A"]);
    /// ```
    #[must_use]
    pub fn normalize_all<I, S>(names: I) -> Vec<NormalizedName>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| Self::normalize(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect()
    }
}
