//! Row-wise aggregation of outcomes into a summary report.

#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeMap;

use crate::compare::outcome::{RowOutcome, classify};
use crate::core::errors::{CompareError, Result};
use crate::series::ScoreSeries;

/// Aggregate counts over every row of one comparison.
///
/// `total` is the percentage denominator for every category. Unclassified rows
/// count toward it but have no printed line, so printed percentages can sum
/// to less than 100.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryReport {
    /// Row count of both series.
    pub total: usize,
    /// Rows where computed equals known.
    pub equal_count: usize,
    /// Deficit magnitude to row count, ascending by magnitude.
    pub deficit_counts: BTreeMap<u64, usize>,
    /// Rows where computed is zero below a positive known.
    pub fail_count: usize,
    /// Rows where computed exceeds known.
    pub unclassified_count: usize,
    /// 1-based row of the first unclassified outcome.
    pub first_unclassified_row: Option<usize>,
}

impl SummaryReport {
    /// Fold one row outcome into the aggregate.
    pub fn record(&mut self, outcome: RowOutcome) {
        self.total += 1;
        match outcome {
            RowOutcome::Equal => self.equal_count += 1,
            RowOutcome::Deficit(d) => *self.deficit_counts.entry(d).or_insert(0) += 1,
            RowOutcome::Fail => self.fail_count += 1,
            RowOutcome::Unclassified => {
                self.unclassified_count += 1;
                self.first_unclassified_row.get_or_insert(self.total);
            }
        }
    }

    /// `count` as a percentage of `total`; zero for an empty report.
    #[must_use]
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }

    /// Rows spread across deficit buckets.
    #[must_use]
    pub fn deficit_total(&self) -> usize {
        self.deficit_counts.values().sum()
    }

    /// Rows accounted for by any category, unclassified included.
    #[must_use]
    pub fn accounted(&self) -> usize {
        self.equal_count + self.deficit_total() + self.fail_count + self.unclassified_count
    }

    /// Sum of every percentage the human report prints.
    #[must_use]
    pub fn printed_percent_sum(&self) -> f64 {
        self.percent(self.equal_count)
            + self
                .deficit_counts
                .values()
                .map(|&count| self.percent(count))
                .sum::<f64>()
            + self.percent(self.fail_count)
    }
}

/// Classify every aligned row pair and aggregate the outcomes.
///
/// Rows pair by position, so both series must be the same length.
pub fn compare_series(known: &ScoreSeries, computed: &ScoreSeries) -> Result<SummaryReport> {
    if known.len() != computed.len() {
        return Err(CompareError::LengthMismatch {
            known: known.len(),
            computed: computed.len(),
        });
    }

    let mut report = SummaryReport::default();
    for (&k, &c) in known.iter().zip(computed) {
        report.record(classify(k, c));
    }
    Ok(report)
}
