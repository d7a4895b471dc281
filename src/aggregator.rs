//! Folding normalized names into ranked frequency statistics.
//!
//! Counting is per occurrence: a name extracted twice from one document counts
//! twice. Equal counts are ordered by name ascending so the ranking does not
//! depend on input or thread scheduling order.

use std::collections::BTreeMap;

use crate::models::{NormalizedName, SongStatistic, StatisticsReport};

/// Running occurrence counts for one analysis run.
///
/// States are independent and mergeable, so workers can each fold their own
/// share of documents and combine the results at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorState {
    counts: BTreeMap<NormalizedName, u64>,
}

impl AggregatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence. Empty names are ignored.
    pub fn record(&mut self, name: NormalizedName) {
        if name.is_empty() {
            return;
        }
        *self.counts.entry(name).or_insert(0) += 1;
    }

    /// Counts every name and hands the state back.
    #[must_use]
    pub fn accumulate<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = NormalizedName>,
    {
        for name in names {
            self.record(name);
        }
        self
    }

    /// Combines two partial states by adding counts per name.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (name, count) in other.counts {
            *self.counts.entry(name).or_insert(0) += count;
        }
        self
    }

    /// Current count for a name.
    pub fn count(&self, name: &NormalizedName) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn unique_names(&self) -> usize {
        self.counts.len()
    }

    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Ranks the counts and computes percentages against `total_documents`.
    ///
    /// With zero documents every percentage is reported as 0.
    pub fn into_report(self, total_documents: usize) -> StatisticsReport {
        let total_unique_names = self.unique_names();
        let total_occurrences = self.total_occurrences();

        // BTreeMap yields names in ascending order; the stable sort keeps that
        // order among equal counts.
        let mut entries: Vec<(NormalizedName, u64)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        let ranked_results = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, count))| SongStatistic {
                rank: index + 1,
                name,
                count,
                percentage: percentage(count, total_documents),
            })
            .collect();

        StatisticsReport {
            total_documents,
            total_unique_names,
            total_occurrences,
            ranked_results,
        }
    }
}

/// `count / total_documents * 100` rounded to one decimal place, or 0 with no documents.
fn percentage(count: u64, total_documents: usize) -> f64 {
    if total_documents == 0 {
        return 0.0;
    }
    let raw = count as f64 / total_documents as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Aggregates a flat sequence of occurrences into a report.
///
/// # Examples
///
/// ```
/// use setlist_stats::{aggregate, NormalizedName};
///
/// let names = ["A", "B", "A", "A", "B", "C"].map(NormalizedName::new);
/// let report = aggregate(names, 3);
///
/// assert_eq!(report.total_unique_names, 3);
/// assert_eq!(report.total_occurrences, 6);
/// assert_eq!(report.ranked_results[1].percentage, 66.7);
/// ```
pub fn aggregate<I>(names: I, total_documents: usize) -> StatisticsReport
where
    I: IntoIterator<Item = NormalizedName>,
{
    AggregatorState::new()
        .accumulate(names)
        .into_report(total_documents)
}
