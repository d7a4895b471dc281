use std::sync::LazyLock;

use regex::Regex;

/// Shortest accepted candidate, in characters.
pub const MIN_NAME_CHARS: usize = 2;
/// Longest accepted candidate, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Header words that survive extraction but never name a song.
static DENYLIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?i:set\s?list|venue|ticket)|セットリスト|セトリ|会場|チケット)")
        .expect("valid denylist pattern")
});

/// Cleans a raw candidate and decides whether it is acceptable.
pub struct CandidateSanitizer;

impl CandidateSanitizer {
    /// Strips trailing whitespace and periods/commas, then applies the length
    /// window and denylist.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::extractor::CandidateSanitizer;
    ///
    /// assert_eq!(CandidateSanitizer::sanitize("Song A。 ").as_deref(), Some("Song A"));
    /// assert_eq!(CandidateSanitizer::sanitize("X"), None);
    /// assert_eq!(CandidateSanitizer::sanitize("Setlist"), None);
    /// ```
    #[must_use]
    pub fn sanitize(raw: &str) -> Option<String> {
        let trimmed = raw.trim_end_matches(|c: char| {
            c.is_whitespace() || matches!(c, '.' | ',' | '。' | '、' | '．' | '，')
        });

        let length = trimmed.chars().count();
        if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&length) {
            return None;
        }

        if DENYLIST_RE.is_match(trimmed) {
            return None;
        }

        Some(trimmed.to_string())
    }
}
