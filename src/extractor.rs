//! Line-level extraction of song names from recognized program text.
//!
//! Each line of a document passes through four stages:
//!
//! 1. [`LineClassifier`] discards structural noise (dates, times, open/start
//!    announcements, handles).
//! 2. [`RuleSet`] applies the ordered pattern rules; the first rule that matches
//!    produces the raw candidate.
//! 3. [`CandidateSanitizer`] strips trailing punctuation and rejects candidates
//!    outside the length window or on the header denylist.
//! 4. [`NameNormalizer`] canonicalizes whitespace so equivalent names aggregate.
//!
//! [`SetlistExtractor`] chains the stages for whole documents.
//!
//! # Examples
//!
//! ```
//! use setlist_stats::extractor::{LineOutcome, RuleKind, SetlistExtractor};
//!
//! let extractor = SetlistExtractor::new();
//!
//! match extractor.extract_line("M3 Song B") {
//!     LineOutcome::Accepted { rule, name } => {
//!         assert_eq!(rule, RuleKind::TrackMarker);
//!         assert_eq!(name.as_str(), "Song B");
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```
//!
//! Every stage is a total function over strings; the only condition the
//! extractor reports is a document with no text at all
//! ([`ExtractionError::EmptyInput`]).

mod classifier;
mod normalizer;
mod pipeline;
mod rules;
mod sanitizer;

pub use classifier::LineClassifier;
pub use normalizer::NameNormalizer;
pub use pipeline::{ExtractionError, LineOutcome, SetlistExtractor};
pub use rules::{PatternRule, RuleKind, RuleSet};
pub use sanitizer::{CandidateSanitizer, MAX_NAME_CHARS, MIN_NAME_CHARS};
