#![forbid(unsafe_code)]

//! clar_compare — summarizes how computed anionic Clar numbers of fullerenes
//! relate to known optimal solutions.
//!
//! Each row pairs a known optimum with a computed score and is classified as
//! one of:
//! 1. **Equal** — computed matches known
//! 2. **Deficit(d)** — computed is positive but `d` short of known
//! 3. **Fail** — computed is zero while known is positive
//! 4. **Unclassified** — computed exceeds known (counted, never printed)
//!
//! # Library usage
//!
//! ```rust,no_run
//! use clar_compare::prelude::*;
//!
//! let ctx = ReportContext::new(60, 2);
//! let paths = ScorePaths::derive(ctx, &Config::default().layout);
//! let report = compare_files(&paths)?;
//! print!("{}", format_report(&report, ctx));
//! # Ok::<(), CompareError>(())
//! ```

pub mod prelude;

pub mod compare;
pub mod core;
pub mod logger;
pub mod series;
