use std::fs;
use std::path::Path;

use anyhow::Result;
use setlist_stats::config::ConfigBuilder;
use setlist_stats::{AnalysisService, StatisticsReport, corpus};
use tempfile::TempDir;

/// Helper function that mimics the core logic of the analyze command.
///
/// This is used for integration testing without invoking the full CLI.
fn analyze_dir(dir: &Path, extension: &str) -> Result<StatisticsReport> {
    let config = ConfigBuilder::new()
        .documents_dir(dir)
        .extension(extension)
        .build()?;

    let documents = corpus::load_documents(&config.documents_dir, &config.extension)?;
    Ok(AnalysisService::new().analyze(&documents, documents.len()))
}

fn write_doc(dir: &TempDir, name: &str, text: &str) {
    fs::write(dir.path().join(name), text).expect("failed to write document");
}

#[test]
fn test_analyze_tour_of_three_shows() -> Result<()> {
    // Arrange: three nights with overlapping setlists and typical OCR noise
    let dir = TempDir::new()?;
    write_doc(
        &dir,
        "tokyo.txt",
        "SETLIST\n2023/05/01 (Mon)\nOPEN 17:00 / START 18:00\n1. Overture\n2. Blue Night\n3. Ember\nEN: Long Road Home\nphoto by @crew\n",
    );
    write_doc(
        &dir,
        "osaka.txt",
        "2023年5月3日\n開場 17:00\nM01 Overture\nM02 Blue\u{3000}Night\nM03 Paper Moon\nアンコール：Long Road Home\n",
    );
    write_doc(
        &dir,
        "nagoya.txt",
        "・Overture\n・Ember。\n・Blue  Night\n・Ember\n",
    );

    // Act
    let report = analyze_dir(dir.path(), "txt")?;

    // Assert: totals
    assert_eq!(report.total_documents, 3);
    assert_eq!(report.total_unique_names, 5);
    assert_eq!(report.total_occurrences, 12);

    // Assert: ranking with name order breaking ties
    let rows: Vec<(usize, &str, u64, f64)> = report
        .ranked_results
        .iter()
        .map(|s| (s.rank, s.name.as_str(), s.count, s.percentage))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "Blue Night", 3, 100.0),
            (2, "Ember", 3, 100.0),
            (3, "Overture", 3, 100.0),
            (4, "Long Road Home", 2, 66.7),
            (5, "Paper Moon", 1, 33.3),
        ]
    );

    Ok(())
}

#[test]
fn test_analyze_counts_empty_documents() -> Result<()> {
    let dir = TempDir::new()?;
    write_doc(&dir, "a.txt", "1. Only Song");
    write_doc(&dir, "b.txt", "");
    write_doc(&dir, "c.txt", "   \n\n");
    write_doc(&dir, "d.txt", "1. Only Song");

    let report = analyze_dir(dir.path(), "txt")?;

    assert_eq!(report.total_documents, 4);
    assert_eq!(report.ranked_results.len(), 1);
    assert_eq!(report.ranked_results[0].count, 2);
    assert_eq!(report.ranked_results[0].percentage, 50.0);

    Ok(())
}

#[test]
fn test_analyze_empty_directory() -> Result<()> {
    let dir = TempDir::new()?;

    let report = analyze_dir(dir.path(), "txt")?;

    assert_eq!(report.total_documents, 0);
    assert!(report.is_empty());

    Ok(())
}

#[test]
fn test_analyze_respects_extension() -> Result<()> {
    let dir = TempDir::new()?;
    write_doc(&dir, "a.txt", "1. Text Song");
    write_doc(&dir, "b.ocr", "1. Ocr Song");

    let report = analyze_dir(dir.path(), ".ocr")?;

    assert_eq!(report.total_documents, 1);
    assert_eq!(report.ranked_results[0].name.as_str(), "Ocr Song");

    Ok(())
}

#[test]
fn test_analyze_missing_directory_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");

    let result = analyze_dir(&dir.path().join("nope"), "txt");

    assert!(result.is_err());
}

#[test]
fn test_report_json_shape() -> Result<()> {
    let dir = TempDir::new()?;
    write_doc(&dir, "a.txt", "1. Song A\n2. Song B");

    let report = analyze_dir(dir.path(), "txt")?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["total_documents"], 1);
    assert_eq!(json["total_unique_names"], 2);
    assert_eq!(json["total_occurrences"], 2);
    assert_eq!(json["ranked_results"][0]["rank"], 1);
    assert_eq!(json["ranked_results"][0]["name"], "Song A");
    assert_eq!(json["ranked_results"][0]["count"], 1);
    assert_eq!(json["ranked_results"][0]["percentage"], 100.0);

    let back: StatisticsReport = serde_json::from_value(json)?;
    assert_eq!(back, report);

    Ok(())
}
