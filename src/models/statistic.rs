use serde::{Deserialize, Serialize};

use super::NormalizedName;

/// One row of the ranked frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongStatistic {
    /// 1-based position in the ranked results.
    pub rank: usize,
    pub name: NormalizedName,
    /// Occurrences summed across all documents, repeats within a document included.
    pub count: u64,
    /// `count / total_documents * 100`, rounded to one decimal; 0 when there are no documents.
    pub percentage: f64,
}

/// Final output of a run: totals plus the ranked table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub total_documents: usize,
    pub total_unique_names: usize,
    pub total_occurrences: u64,
    pub ranked_results: Vec<SongStatistic>,
}

impl StatisticsReport {
    /// Returns the first `n` ranked entries (fewer if the table is shorter).
    ///
    /// # Examples
    ///
    /// ```
    /// use setlist_stats::{aggregate, NormalizedName};
    ///
    /// let names = ["A", "B", "A"].map(NormalizedName::new);
    /// let report = aggregate(names, 2);
    /// assert_eq!(report.top(1)[0].name.as_str(), "A");
    /// assert_eq!(report.top(10).len(), 2);
    /// ```
    pub fn top(&self, n: usize) -> &[SongStatistic] {
        &self.ranked_results[..n.min(self.ranked_results.len())]
    }

    /// Returns entries whose percentage is at or above `threshold`, in rank order.
    pub fn at_least(&self, threshold: f64) -> impl Iterator<Item = &SongStatistic> {
        self.ranked_results
            .iter()
            .filter(move |stat| stat.percentage >= threshold)
    }

    /// Looks up the entry for a name.
    pub fn get(&self, name: &str) -> Option<&SongStatistic> {
        self.ranked_results
            .iter()
            .find(|stat| stat.name.as_str() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.ranked_results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(rank: usize, name: &str, count: u64, percentage: f64) -> SongStatistic {
        SongStatistic {
            rank,
            name: NormalizedName::new(name),
            count,
            percentage,
        }
    }

    fn sample_report() -> StatisticsReport {
        StatisticsReport {
            total_documents: 4,
            total_unique_names: 3,
            total_occurrences: 7,
            ranked_results: vec![
                stat(1, "Opener", 4, 100.0),
                stat(2, "Ballad", 2, 50.0),
                stat(3, "Rarity", 1, 25.0),
            ],
        }
    }

    #[test]
    fn top_clamps_to_available_rows() {
        let report = sample_report();
        assert_eq!(report.top(2).len(), 2);
        assert_eq!(report.top(0).len(), 0);
        assert_eq!(report.top(99).len(), 3);
    }

    #[test]
    fn at_least_is_inclusive() {
        let report = sample_report();
        let names: Vec<&str> = report.at_least(50.0).map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Opener", "Ballad"]);
    }

    #[test]
    fn get_finds_by_name() {
        let report = sample_report();
        assert_eq!(report.get("Ballad").map(|s| s.rank), Some(2));
        assert!(report.get("Missing").is_none());
    }

    #[test]
    fn report_serializes_with_totals() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["total_documents"], 4);
        assert_eq!(json["total_unique_names"], 3);
        assert_eq!(json["ranked_results"][0]["name"], "Opener");
        assert_eq!(json["ranked_results"][1]["percentage"], 50.0);
    }
}
