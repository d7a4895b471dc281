use serde::{Deserialize, Serialize};

use super::DocumentId;

/// One recognized text block, corresponding to one photographed program.
///
/// Documents are immutable once handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    text: String,
}

impl Document {
    /// Creates a new document from its identifier and raw text.
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::Document;
    ///
    /// let doc = Document::new("IMG_0001.txt", "1. Opener\n2. Closer");
    /// assert_eq!(doc.id().as_str(), "IMG_0001.txt");
    /// assert!(!doc.is_blank());
    /// ```
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            text: text.into(),
        }
    }

    /// Returns the document's identifier.
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the raw recognized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A raw match pulled from a single line, before sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    document: DocumentId,
    line_number: usize,
    raw: String,
}

impl Candidate {
    pub fn new(document: DocumentId, line_number: usize, raw: impl Into<String>) -> Self {
        Self {
            document,
            line_number,
            raw: raw.into(),
        }
    }

    /// Returns the document this candidate came from.
    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    /// Returns the 1-based line number within the document.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the raw captured text.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
