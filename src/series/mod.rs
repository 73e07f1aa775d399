//! Score series: one non-negative integer per row, aligned by position.

pub mod reader;

use std::ops::Index;

/// Ordered per-row scores read from one data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSeries {
    values: Vec<u64>,
}

impl ScoreSeries {
    /// Wrap already-parsed values.
    #[must_use]
    pub const fn new(values: Vec<u64>) -> Self {
        Self { values }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the source held no score lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row values in file order.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Iterate row values in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.values.iter()
    }
}

impl From<Vec<u64>> for ScoreSeries {
    fn from(values: Vec<u64>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[u64; N]> for ScoreSeries {
    fn from(values: [u64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<u64> for ScoreSeries {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for ScoreSeries {
    type Output = u64;

    fn index(&self, row: usize) -> &u64 {
        &self.values[row]
    }
}

impl<'a> IntoIterator for &'a ScoreSeries {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        let a = ScoreSeries::from([3, 1, 4]);
        let b: ScoreSeries = vec![3, 1, 4].into();
        let c: ScoreSeries = [3u64, 1, 4].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.len(), 3);
        assert_eq!(a[2], 4);
        assert!(!a.is_empty());
        assert!(ScoreSeries::default().is_empty());
    }
}
