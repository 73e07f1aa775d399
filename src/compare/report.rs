//! Fixed-layout text report and its JSON counterpart.

use std::fmt::Write as _;

use serde_json::{Value, json};

use crate::compare::summary::SummaryReport;
use crate::core::paths::ReportContext;

/// Printed on stdout, in place of a report, when an input file is missing.
pub const MISSING_INPUT_MESSAGE: &str = "Error: One or both directories or files not found";

/// How percentages are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentStyle {
    /// Shortest form that round-trips, always with a fractional part (`100.0`).
    #[default]
    RoundTrip,
    /// Fixed number of decimals.
    Fixed(usize),
}

impl PercentStyle {
    /// Style for an optional configured decimal count.
    #[must_use]
    pub const fn from_decimals(decimals: Option<usize>) -> Self {
        match decimals {
            Some(d) => Self::Fixed(d),
            None => Self::RoundTrip,
        }
    }

    /// Render one percentage value.
    #[must_use]
    pub fn render(self, pct: f64) -> String {
        match self {
            Self::RoundTrip => format!("{pct:?}"),
            Self::Fixed(decimals) => format!("{pct:.decimals$}"),
        }
    }
}

/// Render the report with round-trip percentages.
#[must_use]
pub fn format_report(report: &SummaryReport, ctx: ReportContext) -> String {
    format_report_with(report, ctx, PercentStyle::RoundTrip)
}

/// Render the report: header, equal line, one line per deficit magnitude
/// (ascending), fail line, then a blank line.
#[must_use]
pub fn format_report_with(
    report: &SummaryReport,
    ctx: ReportContext,
    style: PercentStyle,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Summary for fullerenes on {} vertices with non-zero {}-anionic clar number",
        ctx.n, ctx.p
    );
    let _ = writeln!(
        out,
        "Num. sol. that are exactly the same:  {} = {}%",
        report.equal_count,
        style.render(report.percent(report.equal_count))
    );
    for (magnitude, &count) in &report.deficit_counts {
        let _ = writeln!(
            out,
            "Num. sol. of optimal by {magnitude:3}: {count} = {}%",
            style.render(report.percent(count))
        );
    }
    let _ = writeln!(
        out,
        "Num. sol. failed:            {} = {}%",
        report.fail_count,
        style.render(report.percent(report.fail_count))
    );
    out.push('\n');
    out
}

/// Machine-readable form of the same report.
///
/// Unlike the text layout this also carries the unclassified count.
#[must_use]
pub fn report_json(report: &SummaryReport, ctx: ReportContext) -> Value {
    let deficits: Vec<Value> = report
        .deficit_counts
        .iter()
        .map(|(&magnitude, &count)| {
            json!({
                "magnitude": magnitude,
                "count": count,
                "percent": report.percent(count),
            })
        })
        .collect();

    json!({
        "command": "compare",
        "status": "ok",
        "n": ctx.n,
        "p": ctx.p,
        "total": report.total,
        "equal": {
            "count": report.equal_count,
            "percent": report.percent(report.equal_count),
        },
        "deficits": deficits,
        "failed": {
            "count": report.fail_count,
            "percent": report.percent(report.fail_count),
        },
        "unclassified": {
            "count": report.unclassified_count,
            "percent": report.percent(report.unclassified_count),
            "first_row": report.first_unclassified_row,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::summary::compare_series;

    fn summary(known: &[u64], computed: &[u64]) -> SummaryReport {
        compare_series(&known.to_vec().into(), &computed.to_vec().into()).unwrap()
    }

    #[test]
    fn all_equal_report_has_no_deficit_lines() {
        let text = format_report(&summary(&[5, 5, 5], &[5, 5, 5]), ReportContext::new(60, 2));
        assert_eq!(
            text,
            "Summary for fullerenes on 60 vertices with non-zero 2-anionic clar number\n\
             Num. sol. that are exactly the same:  3 = 100.0%\n\
             Num. sol. failed:            0 = 0.0%\n\
             \n"
        );
    }

    #[test]
    fn mixed_report_layout() {
        let text = format_report(&summary(&[10, 8, 0], &[7, 0, 0]), ReportContext::new(70, 4));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "Num. sol. that are exactly the same:  1 = 33.33333333333333%"
        );
        assert_eq!(lines[2], "Num. sol. of optimal by   3: 1 = 33.33333333333333%");
        assert_eq!(lines[3], "Num. sol. failed:            1 = 33.33333333333333%");
        assert_eq!(lines[4], "");
        assert!(text.ends_with("%\n\n"));
    }

    #[test]
    fn deficit_lines_ascend() {
        let report = summary(&[50, 9, 9, 9], &[1, 7, 8, 8]);
        let text = format_report(&report, ReportContext::new(20, 1));
        let by_1 = text.find("optimal by   1:").unwrap();
        let by_2 = text.find("optimal by   2:").unwrap();
        let by_49 = text.find("optimal by  49:").unwrap();
        assert!(by_1 < by_2 && by_2 < by_49);
        assert!(text.contains("optimal by   1: 2 = 50.0%"));
    }

    #[test]
    fn wide_magnitudes_are_not_truncated() {
        let report = summary(&[2000], &[1]);
        let text = format_report(&report, ReportContext::new(20, 1));
        assert!(text.contains("Num. sol. of optimal by 1999: 1 = 100.0%"));
    }

    #[test]
    fn unclassified_rows_have_no_line() {
        let report = summary(&[4, 4], &[6, 2]);
        let text = format_report(&report, ReportContext::new(20, 1));
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("optimal by   2: 1 = 50.0%"));
        assert!(text.contains("exactly the same:  0 = 0.0%"));
        assert!(text.contains("failed:            0 = 0.0%"));
    }

    #[test]
    fn fixed_precision_style() {
        let report = summary(&[3, 3, 3], &[3, 2, 0]);
        let text = format_report_with(&report, ReportContext::new(60, 2), PercentStyle::Fixed(2));
        assert!(text.contains("exactly the same:  1 = 33.33%"));
        assert!(text.contains("failed:            1 = 33.33%"));
        assert_eq!(PercentStyle::Fixed(0).render(66.666), "67");
        assert_eq!(PercentStyle::from_decimals(None), PercentStyle::RoundTrip);
    }

    #[test]
    fn json_carries_every_category() {
        let report = summary(&[4, 4, 9, 5], &[6, 2, 0, 5]);
        let value = report_json(&report, ReportContext::new(60, 2));
        assert_eq!(value["command"], "compare");
        assert_eq!(value["total"], 4);
        assert_eq!(value["equal"]["count"], 1);
        assert_eq!(value["deficits"][0]["magnitude"], 2);
        assert_eq!(value["deficits"][0]["percent"], 25.0);
        assert_eq!(value["failed"]["count"], 1);
        assert_eq!(value["unclassified"]["count"], 1);
        assert_eq!(value["unclassified"]["first_row"], 1);
    }
}
