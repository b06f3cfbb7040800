//! # Template Scanning
//!
//! Extraction of `{{$json.<identifier>}}` substitution placeholders from template
//! documents and cross-document aggregation of their usage.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// The placeholder shape is fixed: `{{$json.<identifier>}}` where the identifier
/// follows the usual `[a-zA-Z_][a-zA-Z0-9_]*` grammar.
fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"\{\{\$json\.([a-zA-Z_][a-zA-Z0-9_]*)\}\}").expect("Invalid regex")
    })
}

/// Extracts every placeholder identifier from `content`.
///
/// Identifiers are returned in document order, duplicates included.
pub fn extract_variables(content: &str) -> Vec<String> {
    placeholder_re()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Collapses an occurrence list into `(identifier, count)` pairs,
/// sorted alphabetically by identifier.
pub fn variable_counts(occurrences: &[String]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for var in occurrences {
        *counts.entry(var).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(var, count)| (var.to_string(), count))
        .collect()
}

/// Aggregated result of scanning a template tree.
///
/// Documents are keyed by their root-relative path; each entry holds the
/// document's occurrence list in order of appearance. Documents without any
/// placeholder are not recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    files: BTreeMap<String, Vec<String>>,
}

impl ScanReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one document's occurrence list under `path`.
    ///
    /// Documents with an empty occurrence list are skipped.
    pub fn record(&mut self, path: impl Into<String>, occurrences: Vec<String>) {
        if !occurrences.is_empty() {
            self.files.insert(path.into(), occurrences);
        }
    }

    /// Per-document occurrence lists, keyed by path (sorted).
    pub fn files(&self) -> &BTreeMap<String, Vec<String>> {
        &self.files
    }

    /// Number of documents that contributed at least one placeholder.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sorted, deduplicated identifiers across all documents.
    pub fn unique_variables(&self) -> Vec<&str> {
        self.files
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Total occurrence count per identifier across all documents.
    pub fn frequency(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for occurrences in self.files.values() {
            for var in occurrences {
                *counts.entry(var).or_default() += 1;
            }
        }
        counts
    }

    /// The `limit` most frequent identifiers, descending by total occurrence
    /// count. Ties break alphabetically so the ranking is deterministic.
    pub fn top_variables(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.frequency().into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_in_document_order_with_repeats() {
        let doc = "Hello {{$json.name}}, your code is {{$json.otp}}. {{$json.name}} again.";
        assert_eq!(extract_variables(doc), vec!["name", "otp", "name"]);
    }

    #[test]
    fn test_extract_rejects_bad_identifiers() {
        // Leading digit, missing `$json.` prefix, unbalanced braces.
        let doc = "{{$json.9lives}} {{json.name}} {{$json.ok}y}} {{$json.fine}}";
        assert_eq!(extract_variables(doc), vec!["fine"]);
    }

    #[test]
    fn test_extract_underscore_identifiers() {
        let doc = "{{$json._private}} and {{$json.snake_case_2}}";
        assert_eq!(extract_variables(doc), vec!["_private", "snake_case_2"]);
    }

    #[test]
    fn test_extract_empty_document() {
        assert!(extract_variables("").is_empty());
        assert!(extract_variables("<p>no placeholders here</p>").is_empty());
    }

    #[test]
    fn test_variable_counts_sorted_alphabetically() {
        let occurrences: Vec<String> = ["otp", "name", "name"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            variable_counts(&occurrences),
            vec![("name".to_string(), 2), ("otp".to_string(), 1)]
        );
    }

    #[test]
    fn test_record_skips_empty_documents() {
        let mut report = ScanReport::new();
        report.record("empty.html", vec![]);
        report.record("used.html", vec!["name".to_string()]);

        assert_eq!(report.file_count(), 1);
        assert!(report.files().contains_key("used.html"));
    }

    #[test]
    fn test_unique_variables_is_union_of_documents() {
        let mut report = ScanReport::new();
        report.record(
            "a.html",
            vec!["name".to_string(), "otp".to_string(), "name".to_string()],
        );
        report.record("b.html", vec!["email".to_string(), "name".to_string()]);

        assert_eq!(report.unique_variables(), vec!["email", "name", "otp"]);
    }

    #[test]
    fn test_frequency_totals_across_documents() {
        let mut report = ScanReport::new();
        report.record("a.html", vec!["name".to_string(), "name".to_string()]);
        report.record("b.html", vec!["name".to_string(), "otp".to_string()]);

        let freq = report.frequency();
        assert_eq!(freq.get("name"), Some(&3));
        assert_eq!(freq.get("otp"), Some(&1));
    }

    #[test]
    fn test_top_variables_ranking_and_tie_break() {
        let mut report = ScanReport::new();
        report.record(
            "a.html",
            vec![
                "zeta".to_string(),
                "alpha".to_string(),
                "mid".to_string(),
                "mid".to_string(),
            ],
        );

        // `mid` wins on count; `alpha` and `zeta` tie and order alphabetically.
        assert_eq!(
            report.top_variables(10),
            vec![("mid", 2), ("alpha", 1), ("zeta", 1)]
        );
        assert_eq!(report.top_variables(1), vec![("mid", 2)]);
    }

    #[test]
    fn test_report_is_deterministic() {
        let build = || {
            let mut report = ScanReport::new();
            report.record("b.html", vec!["otp".to_string()]);
            report.record("a.html", vec!["name".to_string(), "otp".to_string()]);
            report
        };

        assert_eq!(build(), build());
        assert_eq!(build().top_variables(10), build().top_variables(10));
    }
}
