/// Tests to verify that required dependencies (regex, rayon) behave as the extractor assumes.
///
/// These tests ensure that:
/// - regex `\s` and `\d` are Unicode-aware, so full-width spaces act as separators
/// - rayon fold/reduce produces the same result as a sequential fold
use rayon::prelude::*;
use regex::Regex;

#[test]
fn regex_whitespace_class_matches_full_width_space() {
    let re = Regex::new(r"^\d+\s+(.+)$").expect("Failed to compile pattern");

    let caps = re.captures("01\u{3000}曲名").expect("full-width space should separate");
    assert_eq!(&caps[1], "曲名");
}

#[test]
fn str_trim_removes_full_width_space() {
    assert_eq!("\u{3000}Song\u{3000}".trim(), "Song");
}

#[test]
fn rayon_fold_reduce_matches_sequential_sum() {
    let values: Vec<u64> = (1..=1000).collect();

    let parallel = values
        .par_iter()
        .fold(|| 0u64, |acc, v| acc + v)
        .reduce(|| 0u64, |a, b| a + b);

    assert_eq!(parallel, values.iter().sum::<u64>());
}
