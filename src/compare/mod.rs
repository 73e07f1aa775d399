//! Known-vs-computed comparison: per-row classification, aggregation, report.

pub mod outcome;
pub mod report;
pub mod summary;

use crate::compare::summary::{SummaryReport, compare_series};
use crate::core::errors::Result;
use crate::core::paths::ScorePaths;
use crate::series::reader::read_series;

/// Read both score files and compare them row by row.
///
/// The known file is read first; a missing file of either kind surfaces as
/// [`CompareError::InputNotFound`](crate::core::errors::CompareError::InputNotFound).
pub fn compare_files(paths: &ScorePaths) -> Result<SummaryReport> {
    let known = read_series(&paths.known)?;
    let computed = read_series(&paths.computed)?;
    compare_series(&known, &computed)
}
