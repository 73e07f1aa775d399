//! Per-row classification of a computed score against its known optimum.

/// How one computed score relates to the known optimum on the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowOutcome {
    /// Computed matches known exactly.
    Equal,
    /// Computed is positive but short of known by the carried gap (always > 0).
    Deficit(u64),
    /// Computed is zero while known is positive.
    Fail,
    /// Computed exceeds known. Counted in the total, printed nowhere.
    Unclassified,
}

impl RowOutcome {
    /// Deficit magnitude, if this row has one.
    #[must_use]
    pub const fn deficit(self) -> Option<u64> {
        match self {
            Self::Deficit(d) => Some(d),
            _ => None,
        }
    }
}

/// Classify one row. Conditions are checked in order; the first match wins.
#[must_use]
pub const fn classify(known: u64, computed: u64) -> RowOutcome {
    if known == computed {
        RowOutcome::Equal
    } else if known > computed && computed > 0 {
        RowOutcome::Deficit(known - computed)
    } else if known > computed {
        RowOutcome::Fail
    } else {
        RowOutcome::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_values_including_zero() {
        assert_eq!(classify(5, 5), RowOutcome::Equal);
        assert_eq!(classify(0, 0), RowOutcome::Equal);
    }

    #[test]
    fn positive_shortfall_is_deficit() {
        assert_eq!(classify(10, 7), RowOutcome::Deficit(3));
        assert_eq!(classify(4, 2), RowOutcome::Deficit(2));
        assert_eq!(classify(2, 1).deficit(), Some(1));
    }

    #[test]
    fn zero_computed_below_known_is_fail() {
        assert_eq!(classify(8, 0), RowOutcome::Fail);
        assert_eq!(classify(1, 0), RowOutcome::Fail);
    }

    #[test]
    fn computed_above_known_is_unclassified() {
        assert_eq!(classify(4, 6), RowOutcome::Unclassified);
        assert_eq!(classify(0, 1), RowOutcome::Unclassified);
        assert_eq!(RowOutcome::Unclassified.deficit(), None);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(classify(u64::MAX, 1), RowOutcome::Deficit(u64::MAX - 1));
        assert_eq!(classify(u64::MAX, 0), RowOutcome::Fail);
        assert_eq!(classify(0, u64::MAX), RowOutcome::Unclassified);
    }

    proptest! {
        #[test]
        fn equal_pairs_classify_equal(v in any::<u64>()) {
            prop_assert_eq!(classify(v, v), RowOutcome::Equal);
        }

        #[test]
        fn shortfalls_carry_exact_positive_gap(computed in 1u64..1_000_000, gap in 1u64..1_000_000) {
            let outcome = classify(computed + gap, computed);
            prop_assert_eq!(outcome, RowOutcome::Deficit(gap));
            prop_assert!(outcome.deficit().is_some_and(|d| d > 0));
        }

        #[test]
        fn zero_computed_with_positive_known_fails(known in 1u64..) {
            prop_assert_eq!(classify(known, 0), RowOutcome::Fail);
        }

        #[test]
        fn surplus_is_unclassified(known in 0u64..1_000_000, surplus in 1u64..1_000_000) {
            prop_assert_eq!(classify(known, known + surplus), RowOutcome::Unclassified);
        }
    }
}
