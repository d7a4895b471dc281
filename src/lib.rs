pub mod aggregator;
pub mod config;
pub mod corpus;
pub mod extractor;
pub mod models;
pub mod service;

pub use aggregator::{AggregatorState, aggregate};
pub use extractor::{ExtractionError, LineOutcome, SetlistExtractor};
pub use models::{
    Candidate, Document, DocumentId, NormalizedName, SongStatistic, StatisticsReport,
};
pub use service::AnalysisService;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_accessible_from_crate_root() {
        let service = AnalysisService::new();
        let report = service.analyze(&[Document::new("a", "1. Song")], 1);
        assert_eq!(report.total_occurrences, 1);
    }

    #[test]
    fn types_accessible_from_crate_root() {
        let name = NormalizedName::new("Song\u{3000}A");
        assert_eq!(name.as_str(), "Song A");

        let id = DocumentId::new("doc");
        assert_eq!(format!("{}", id), "doc");

        let state = AggregatorState::new().accumulate([name]);
        let report: StatisticsReport = state.into_report(1);
        let first: &SongStatistic = &report.ranked_results[0];
        assert_eq!(first.rank, 1);

        let outcome = SetlistExtractor::new().extract_line("1. Song");
        assert!(matches!(outcome, LineOutcome::Accepted { .. }));
    }
}
