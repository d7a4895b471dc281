//! Ordered pattern rules that pull a raw song name out of a single line.
//!
//! Rules are tried in order and the first match wins; later rules are never
//! consulted once one has matched, even if they would capture more text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which rule produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `1. Song` or `1) Song`
    NumberedList,
    /// `01 Song`
    BareNumbered,
    /// `EN: Song`, `Encore Song`, `アンコール：Song`
    Encore,
    /// `・Song`, `● Song`, `- Song`
    Bullet,
    /// `M3 Song`, `M03. Song`
    TrackMarker,
    /// `[Intro] Song`, `【新曲】Song`
    Bracketed,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberedList => write!(f, "numbered"),
            Self::BareNumbered => write!(f, "bare-numbered"),
            Self::Encore => write!(f, "encore"),
            Self::Bullet => write!(f, "bullet"),
            Self::TrackMarker => write!(f, "track"),
            Self::Bracketed => write!(f, "bracketed"),
        }
    }
}

/// A single extraction rule: a pattern whose first capture group is the candidate.
#[derive(Debug, Clone)]
pub struct PatternRule {
    kind: RuleKind,
    pattern: Regex,
}

impl PatternRule {
    /// Compiles a rule. The pattern must define at least one capture group.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error if `pattern` is invalid.
    pub fn new(kind: RuleKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Attempts to match the line, returning the captured remainder.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::extractor::{PatternRule, RuleKind};
    ///
    /// let rule = PatternRule::new(RuleKind::TrackMarker, r"^M(\d+)").unwrap();
    /// assert_eq!(rule.attempt("M12"), Some("12".to_string()));
    /// assert_eq!(rule.attempt("Song"), None);
    /// ```
    pub fn attempt(&self, line: &str) -> Option<String> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

static STANDARD_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let table = [
        (RuleKind::NumberedList, r"^\d+[.)．）]\s*(.+)$"),
        (RuleKind::BareNumbered, r"^\d+\s+(\S.+)$"),
        (
            RuleKind::Encore,
            r"(?i)^(?:encore|en\d*|アンコール)\s*[:：\s]\s*(.+)$",
        ),
        (RuleKind::Bullet, r"^[・•●○◆◇■□★☆▶▷►\-*]\s*(.+)$"),
        (RuleKind::TrackMarker, r"^M0*\d+[\s.:：)\-]\s*(.+)$"),
        (
            RuleKind::Bracketed,
            r"^(?:\[[^\]]*\]|【[^】]*】|\([^)]*\)|（[^）]*）|「[^」]*」)\s*(.+)$",
        ),
    ];

    let rules = table
        .into_iter()
        .map(|(kind, pattern)| PatternRule::new(kind, pattern).expect("valid built-in rule"))
        .collect();

    RuleSet::new(rules)
});

/// Ordered collection of extraction rules with first-match-wins precedence.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// The six built-in rules, in precedence order.
    pub fn standard() -> Self {
        STANDARD_RULES.clone()
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Appends a rule with the lowest precedence.
    pub fn push(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Returns the first matching rule and its capture.
    ///
    /// The line is trimmed before matching.
    pub fn first_match(&self, line: &str) -> Option<(RuleKind, String)> {
        let line = line.trim();
        self.rules
            .iter()
            .find_map(|rule| rule.attempt(line).map(|captured| (rule.kind, captured)))
    }

    /// Returns the raw candidate for a line, if any rule matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::extractor::RuleSet;
    ///
    /// let rules = RuleSet::standard();
    /// assert_eq!(rules.extract("1. Song A").as_deref(), Some("Song A"));
    /// assert_eq!(rules.extract("Thank you!"), None);
    /// ```
    pub fn extract(&self, line: &str) -> Option<String> {
        self.first_match(line).map(|(_, captured)| captured)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
