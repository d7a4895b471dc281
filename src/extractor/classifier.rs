//! Structural noise detection for individual lines.

use std::sync::LazyLock;

use regex::Regex;

/// Year followed by month and day, separated by `/`, `-`, `.` or the 年/月 markers.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}\s*[/\-.年]\s*\d{1,2}\s*[/\-.月]\s*\d{1,2}").expect("valid date pattern")
});

static WEEKDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[月火水木金土日]曜").expect("valid weekday pattern"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\s*[:：]\s*\d{2}").expect("valid time pattern"));

/// Door-open / show-start announcements. The Latin tokens must not run into more letters,
/// so a title such as "Opening Act" is not mistaken for a schedule line.
static SCHEDULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:open|start)(?:[^a-z]|$)|開場|開演)").expect("valid schedule pattern")
});

/// Decides whether a line is structural noise that must never reach the rule set.
pub struct LineClassifier;

impl LineClassifier {
    /// Returns true if the line should be discarded before extraction.
    ///
    /// A line is noise when, after trimming, it is shorter than two characters,
    /// starts with a date, weekday, `HH:MM` time or open/start marker, or contains
    /// an `@` (social handles and addresses).
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::extractor::LineClassifier;
    ///
    /// assert!(LineClassifier::is_noise("2021-12-01"));
    /// assert!(LineClassifier::is_noise("OPEN 17:00 / START 18:00"));
    /// assert!(LineClassifier::is_noise("follow @band_official"));
    /// assert!(!LineClassifier::is_noise("1. Opener"));
    /// ```
    #[must_use]
    pub fn is_noise(line: &str) -> bool {
        let line = line.trim();

        line.chars().count() < 2
            || line.contains(['@', '＠'])
            || DATE_RE.is_match(line)
            || WEEKDAY_RE.is_match(line)
            || TIME_RE.is_match(line)
            || SCHEDULE_RE.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_are_noise() {
        assert!(LineClassifier::is_noise(""));
        assert!(LineClassifier::is_noise("a"));
        assert!(LineClassifier::is_noise("   x   "));
        assert!(LineClassifier::is_noise("曲"));
        assert!(LineClassifier::is_noise("\u{3000}"));
        assert!(!LineClassifier::is_noise("曲名"));
    }

    #[test]
    fn test_dates_are_noise() {
        assert!(LineClassifier::is_noise("2021-12-01"));
        assert!(LineClassifier::is_noise("2021/12/01"));
        assert!(LineClassifier::is_noise("2021/1/5 (Sat)"));
        assert!(LineClassifier::is_noise("2021年12月1日"));
        assert!(LineClassifier::is_noise("  2021 / 12 / 01"));
        assert!(LineClassifier::is_noise("2021.12.01"));
    }

    #[test]
    fn test_weekday_is_noise() {
        assert!(LineClassifier::is_noise("土曜日 公演"));
        assert!(LineClassifier::is_noise("金曜"));
    }

    #[test]
    fn test_times_are_noise() {
        assert!(LineClassifier::is_noise("18:30 start"));
        assert!(LineClassifier::is_noise("9:05"));
        assert!(LineClassifier::is_noise("18：30"));
    }

    #[test]
    fn test_schedule_markers_are_noise() {
        assert!(LineClassifier::is_noise("OPEN 17:00"));
        assert!(LineClassifier::is_noise("open/start"));
        assert!(LineClassifier::is_noise("START"));
        assert!(LineClassifier::is_noise("開場 17:00"));
        assert!(LineClassifier::is_noise("開演18:00"));
    }

    #[test]
    fn test_titles_starting_with_marker_words_survive() {
        assert!(!LineClassifier::is_noise("Opener"));
        assert!(!LineClassifier::is_noise("Starting Over"));
    }

    #[test]
    fn test_at_sign_is_noise() {
        assert!(LineClassifier::is_noise("@venue_tokyo"));
        assert!(LineClassifier::is_noise("mail: info@example.com"));
        assert!(LineClassifier::is_noise("＠band"));
    }

    #[test]
    fn test_item_lines_are_not_noise() {
        assert!(!LineClassifier::is_noise("1. Song A"));
        assert!(!LineClassifier::is_noise("M3 Song B"));
        assert!(!LineClassifier::is_noise("EN: Finale"));
        assert!(!LineClassifier::is_noise("12 Years Later"));
    }
}
