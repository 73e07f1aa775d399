//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use clar_compare::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{CompareError, Result};
pub use crate::core::paths::{ReportContext, ScorePaths};

// Series
pub use crate::series::ScoreSeries;
pub use crate::series::reader::{parse_series, read_series};

// Compare
pub use crate::compare::compare_files;
pub use crate::compare::outcome::{RowOutcome, classify};
pub use crate::compare::report::{PercentStyle, format_report, format_report_with, report_json};
pub use crate::compare::summary::{SummaryReport, compare_series};
