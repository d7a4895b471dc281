use rayon::prelude::*;
use tracing::{debug, info};

use crate::aggregator::AggregatorState;
use crate::extractor::{ExtractionError, SetlistExtractor};
use crate::models::{Document, DocumentId, NormalizedName, StatisticsReport};

/// Service layer running extraction and aggregation over a whole corpus.
///
/// AnalysisService owns a SetlistExtractor and turns a batch of documents into
/// one StatisticsReport. Documents are extracted in parallel; each worker folds
/// its own AggregatorState and the partial states are merged at the end.
///
/// # Examples
///
/// ```
/// use setlist_stats::{AnalysisService, Document};
///
/// let service = AnalysisService::new();
/// let documents = vec![
///     Document::new("night1.txt", "1. Opener\n2. Ballad"),
///     Document::new("night2.txt", "1. Opener\nEN: Finale"),
/// ];
///
/// let report = service.analyze(&documents, documents.len());
/// assert_eq!(report.ranked_results[0].name.as_str(), "Opener");
/// assert_eq!(report.ranked_results[0].percentage, 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisService {
    extractor: SetlistExtractor,
}

impl AnalysisService {
    /// Creates a service with the standard extraction rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service around a preconfigured extractor.
    pub fn with_extractor(extractor: SetlistExtractor) -> Self {
        Self { extractor }
    }

    /// Returns a reference to the underlying extractor.
    pub fn extractor(&self) -> &SetlistExtractor {
        &self.extractor
    }

    /// Extracts one document, treating empty text as zero names.
    ///
    /// Empty documents are logged at info level; they still count toward the
    /// caller's document total.
    pub fn extract(&self, document: &Document) -> Vec<NormalizedName> {
        match self.extractor.extract_document(document) {
            Ok(names) => names,
            Err(ExtractionError::EmptyInput { document }) => {
                info!(%document, "document has no text, skipping");
                Vec::new()
            }
        }
    }

    /// Per-document names, in input order.
    pub fn extract_all(&self, documents: &[Document]) -> Vec<(DocumentId, Vec<NormalizedName>)> {
        documents
            .par_iter()
            .map(|document| (document.id().clone(), self.extract(document)))
            .collect()
    }

    /// Folds every document into a single accumulator state.
    pub fn accumulate(&self, documents: &[Document]) -> AggregatorState {
        documents
            .par_iter()
            .fold(AggregatorState::new, |state, document| {
                state.accumulate(self.extract(document))
            })
            .reduce(AggregatorState::new, AggregatorState::merge)
    }

    /// Runs the whole analysis.
    ///
    /// `total_documents` is passed separately because callers may count
    /// documents that produced no text; percentages are computed against it.
    pub fn analyze(&self, documents: &[Document], total_documents: usize) -> StatisticsReport {
        let state = self.accumulate(documents);

        debug!(
            documents = documents.len(),
            total_documents,
            unique_names = state.unique_names(),
            occurrences = state.total_occurrences(),
            "aggregated corpus"
        );

        state.into_report(total_documents)
    }
}
