//! Per-document extraction: classifier, rules, sanitizer and normalizer chained line by line.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::models::{Candidate, Document, DocumentId, NormalizedName};

use super::classifier::LineClassifier;
use super::normalizer::NameNormalizer;
use super::rules::{RuleKind, RuleSet};
use super::sanitizer::CandidateSanitizer;

/// Non-fatal conditions raised while extracting a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The document's text is empty or whitespace only.
    #[error("document {document} has no text")]
    EmptyInput { document: DocumentId },
}

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LineOutcome {
    /// Discarded by the classifier before any rule ran.
    Noise,
    /// No rule matched.
    NoMatch,
    /// A rule matched but the sanitizer refused the capture.
    Rejected { rule: RuleKind, raw: String },
    /// Accepted and normalized.
    Accepted { rule: RuleKind, name: NormalizedName },
}

impl LineOutcome {
    pub fn name(&self) -> Option<&NormalizedName> {
        match self {
            Self::Accepted { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn into_name(self) -> Option<NormalizedName> {
        match self {
            Self::Accepted { name, .. } => Some(name),
            _ => None,
        }
    }
}

fn log_outcome(document: &DocumentId, line_number: usize, outcome: &LineOutcome) {
    match outcome {
        LineOutcome::Noise => debug!(%document, line = line_number, "line dropped as noise"),
        LineOutcome::NoMatch => debug!(%document, line = line_number, "no rule matched"),
        LineOutcome::Rejected { rule, raw } => {
            debug!(%document, line = line_number, %rule, raw = %raw, "candidate rejected");
        }
        LineOutcome::Accepted { rule, name } => {
            trace!(%document, line = line_number, %rule, %name, "name accepted");
        }
    }
}

/// Turns raw document text into the sequence of song names it mentions.
///
/// Stateless apart from its rule table, so one instance can be shared across
/// threads and documents.
///
/// # Examples
///
/// ```
/// use setlist_stats::{Document, SetlistExtractor};
///
/// let extractor = SetlistExtractor::new();
/// let doc = Document::new("a.txt", "2021/12/01\n1. Opener\n2. Second Song\nEN: Finale");
/// let names = extractor.extract_document(&doc).unwrap();
/// let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
/// assert_eq!(names, vec!["Opener", "Second Song", "Finale"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SetlistExtractor {
    rules: RuleSet,
}

impl SetlistExtractor {
    /// Creates an extractor with the standard rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with a custom rule set.
    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs one line through the whole chain.
    pub fn extract_line(&self, line: &str) -> LineOutcome {
        if LineClassifier::is_noise(line) {
            return LineOutcome::Noise;
        }

        let Some((rule, raw)) = self.rules.first_match(line) else {
            return LineOutcome::NoMatch;
        };

        match CandidateSanitizer::sanitize(&raw) {
            Some(clean) => LineOutcome::Accepted {
                rule,
                name: NameNormalizer::normalize(&clean),
            },
            None => LineOutcome::Rejected { rule, raw },
        }
    }

    /// Outcome for every line of a document, paired with its 1-based line number.
    pub fn inspect<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, &'a str, LineOutcome)> + 'a {
        text.lines()
            .enumerate()
            .map(move |(index, line)| (index + 1, line, self.extract_line(line)))
    }

    /// Raw rule captures for a document, before sanitization.
    pub fn candidates(&self, document: &Document) -> Vec<Candidate> {
        document
            .text()
            .lines()
            .enumerate()
            .filter(|(_, line)| !LineClassifier::is_noise(line))
            .filter_map(|(index, line)| {
                self.rules
                    .extract(line)
                    .map(|raw| Candidate::new(document.id().clone(), index + 1, raw))
            })
            .collect()
    }

    /// Extracts every accepted song name from a document, in line order.
    ///
    /// Each line goes through [`extract_line`](Self::extract_line); dropped lines
    /// are logged at debug level with their line number.
    ///
    /// Repeats within the document are kept; each is one occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::EmptyInput` when the document has no text.
    pub fn extract_document(
        &self,
        document: &Document,
    ) -> Result<Vec<NormalizedName>, ExtractionError> {
        if document.is_blank() {
            return Err(ExtractionError::EmptyInput {
                document: document.id().clone(),
            });
        }

        let names: Vec<NormalizedName> = self
            .inspect(document.text())
            .filter_map(|(line_number, _, outcome)| {
                log_outcome(document.id(), line_number, &outcome);
                outcome.into_name()
            })
            .collect();

        debug!(document = %document.id(), names = names.len(), "extracted document");

        Ok(names)
    }
}
