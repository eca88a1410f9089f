//! Integrity metrics computed from a validation run.
//!
//! Metrics are a pure function of the row count and the issue collection:
//! computing them twice on the same input yields identical snapshots.

use catalog_core::IssueRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Number of issue types shown by default in rankings.
pub const DEFAULT_TOP_ISSUES: usize = 5;

/// Occurrence count of one issue type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueFrequency {
    /// Issue type
    pub issue_type: String,
    /// Number of issues of this type
    pub count: usize,
    /// Share of all issues, in percent
    pub percentage: f64,
}

/// Summary metrics for one validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    total_records: usize,
    valid_records: usize,
    invalid_records: usize,
    total_errors: usize,
    integrity_score: f64,
    issue_frequency: Vec<IssueFrequency>,
}

impl MetricsSnapshot {
    /// Computes the snapshot for `total_records` rows and their issues.
    ///
    /// A row counts as invalid once no matter how many issues it has; rows
    /// are told apart by their identifier.
    pub fn compute(total_records: usize, issues: &[IssueRecord]) -> Self {
        let distinct: HashSet<&str> = issues.iter().map(IssueRecord::identifier).collect();
        let invalid_records = distinct.len().min(total_records);

        let integrity_score = if total_records == 0 {
            100.0
        } else {
            let valid = (total_records - invalid_records) as f64;
            (100.0 * valid / total_records as f64).clamp(0.0, 100.0)
        };

        Self {
            total_records,
            valid_records: total_records - invalid_records,
            invalid_records,
            total_errors: issues.len(),
            integrity_score,
            issue_frequency: issue_frequency(issues),
        }
    }

    /// Number of rows validated.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Number of rows with no issue.
    pub fn valid_records(&self) -> usize {
        self.valid_records
    }

    /// Number of distinct identifiers with at least one issue.
    pub fn invalid_records(&self) -> usize {
        self.invalid_records
    }

    /// Number of issues.
    pub fn total_errors(&self) -> usize {
        self.total_errors
    }

    /// Percentage of rows with no issue, in `[0, 100]`.
    pub fn integrity_score(&self) -> f64 {
        self.integrity_score
    }

    /// The full issue-type distribution, most frequent first.
    pub fn issue_frequency(&self) -> &[IssueFrequency] {
        &self.issue_frequency
    }

    /// The `n` most frequent issue types.
    pub fn top_issues(&self, n: usize) -> &[IssueFrequency] {
        &self.issue_frequency[..n.min(self.issue_frequency.len())]
    }

    /// The most frequent issue type, if any.
    pub fn top_issue(&self) -> Option<&IssueFrequency> {
        self.issue_frequency.first()
    }

    /// Percentage of rows with at least one issue.
    pub fn invalid_percentage(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            100.0 * self.invalid_records as f64 / self.total_records as f64
        }
    }

    /// Human-readable band of the integrity score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.integrity_score)
    }
}

/// Counts issues per type, most frequent first.
///
/// Types with equal counts keep the order in which they were first seen.
fn issue_frequency(issues: &[IssueRecord]) -> Vec<IssueFrequency> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for issue in issues {
        let count = counts.entry(issue.issue_type()).or_insert_with(|| {
            order.push(issue.issue_type());
            0
        });
        *count += 1;
    }

    let total = issues.len();
    let mut frequency: Vec<IssueFrequency> = order
        .into_iter()
        .map(|issue_type| {
            let count = counts[issue_type];
            IssueFrequency {
                issue_type: issue_type.to_string(),
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    100.0 * count as f64 / total as f64
                },
            }
        })
        .collect();

    // sort_by is stable
    frequency.sort_by(|a, b| b.count.cmp(&a.count));
    frequency
}

/// Computes a snapshot; shorthand for [`MetricsSnapshot::compute`].
pub fn compute_metrics(total_records: usize, issues: &[IssueRecord]) -> MetricsSnapshot {
    MetricsSnapshot::compute(total_records, issues)
}

/// Metrics engine with a configurable ranking length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsEngine {
    top_n: usize,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_ISSUES,
        }
    }
}

impl MetricsEngine {
    /// Creates an engine that ranks the `top_n` most frequent issue types.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Ranking length used by [`top_issues`](Self::top_issues).
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Computes the snapshot for a run.
    pub fn compute(&self, total_records: usize, issues: &[IssueRecord]) -> MetricsSnapshot {
        MetricsSnapshot::compute(total_records, issues)
    }

    /// The configured number of most frequent issue types of a snapshot.
    pub fn top_issues<'a>(&self, snapshot: &'a MetricsSnapshot) -> &'a [IssueFrequency] {
        snapshot.top_issues(self.top_n)
    }
}

/// Presentation band of an integrity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreBand {
    /// 90 and above
    Excellent,
    /// 75 and above
    Good,
    /// 50 and above
    Fair,
    /// Below 50
    Poor,
}

impl ScoreBand {
    /// Bands a score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 75.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Upper-case label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::issue_types;
    use pretty_assertions::assert_eq;

    fn issue(identifier: &str, issue_type: &str) -> IssueRecord {
        IssueRecord::new(identifier, issue_type, "test")
    }

    #[test]
    fn test_zero_rows_scores_full() {
        let snapshot = compute_metrics(0, &[]);
        assert_eq!(snapshot.integrity_score(), 100.0);
        assert_eq!(snapshot.invalid_records(), 0);
        assert!(snapshot.issue_frequency().is_empty());
        assert_eq!(snapshot.invalid_percentage(), 0.0);
    }

    #[test]
    fn test_row_with_many_issues_counts_once() {
        let issues = vec![
            issue("SKU-00001", issue_types::PRICE_TOO_LOW),
            issue("SKU-00001", issue_types::LOW_STOCK_WARNING),
            issue("SKU-00002", issue_types::PRICE_TOO_HIGH),
        ];

        let snapshot = compute_metrics(10, &issues);

        assert_eq!(snapshot.total_errors(), 3);
        assert_eq!(snapshot.invalid_records(), 2);
        assert_eq!(snapshot.valid_records(), 8);
        assert_eq!(snapshot.integrity_score(), 80.0);
    }

    #[test]
    fn test_score_clamped_when_identifiers_exceed_rows() {
        let issues = vec![issue("A", "x"), issue("B", "x"), issue("C", "x")];

        let snapshot = compute_metrics(2, &issues);

        assert_eq!(snapshot.invalid_records(), 2);
        assert_eq!(snapshot.integrity_score(), 0.0);
    }

    #[test]
    fn test_frequency_ties_keep_first_seen_order() {
        let issues = vec![
            issue("1", "b"),
            issue("2", "a"),
            issue("3", "c"),
            issue("4", "c"),
            issue("5", "a"),
            issue("6", "b"),
        ];

        let snapshot = compute_metrics(6, &issues);
        let ranked: Vec<&str> = snapshot
            .issue_frequency()
            .iter()
            .map(|f| f.issue_type.as_str())
            .collect();

        assert_eq!(ranked, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_frequency_sorted_by_count() {
        let issues = vec![
            issue("1", "rare"),
            issue("2", "common"),
            issue("3", "common"),
            issue("4", "common"),
            issue("5", "rare"),
        ];

        let snapshot = compute_metrics(5, &issues);

        assert_eq!(
            snapshot.issue_frequency(),
            &[
                IssueFrequency {
                    issue_type: "common".to_string(),
                    count: 3,
                    percentage: 60.0,
                },
                IssueFrequency {
                    issue_type: "rare".to_string(),
                    count: 2,
                    percentage: 40.0,
                },
            ]
        );
        assert_eq!(snapshot.top_issue().unwrap().issue_type, "common");
    }

    #[test]
    fn test_top_issues_truncates_display_only() {
        let issues: Vec<IssueRecord> = (0..8).map(|i| issue("x", &format!("type_{}", i))).collect();
        let snapshot = compute_metrics(1, &issues);

        assert_eq!(MetricsEngine::default().top_issues(&snapshot).len(), 5);
        assert_eq!(MetricsEngine::new(3).top_issues(&snapshot).len(), 3);
        assert_eq!(snapshot.top_issues(100).len(), 8);
        assert_eq!(snapshot.issue_frequency().len(), 8);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let issues: Vec<IssueRecord> = (0..50)
            .map(|i| issue(&format!("SKU-{:05}", i % 17), &format!("type_{}", i % 7)))
            .collect();

        let first = serde_json::to_string(&compute_metrics(100, &issues)).unwrap();
        let second = serde_json::to_string(&compute_metrics(100, &issues)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(75.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(50.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(49.99), ScoreBand::Poor);
        assert_eq!(ScoreBand::Fair.to_string(), "FAIR");
    }

    #[test]
    fn test_snapshot_serializes_field_names() {
        let snapshot = compute_metrics(4, &[issue("A", "price_too_low")]);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["total_records"], 4);
        assert_eq!(json["invalid_records"], 1);
        assert_eq!(json["total_errors"], 1);
        assert_eq!(json["integrity_score"], 75.0);
        assert_eq!(json["issue_frequency"][0]["issue_type"], "price_too_low");
        assert_eq!(json["issue_frequency"][0]["percentage"], 100.0);
    }
}
