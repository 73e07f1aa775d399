//! Line-oriented score file reader.
//!
//! One non-negative integer per line, no header. Blank lines are skipped and a
//! trailing `\r` is tolerated so files written on any platform parse the same.

use std::fs;
use std::path::Path;

use memchr::memchr_iter;

use crate::core::errors::{CompareError, Result};
use crate::series::ScoreSeries;

/// Read and parse a whole score file.
pub fn read_series(path: &Path) -> Result<ScoreSeries> {
    let bytes = fs::read(path).map_err(|source| CompareError::io(path, source))?;
    parse_series(&bytes, path)
}

/// Parse score lines from an in-memory buffer.
///
/// `origin` only names the source in [`CompareError::DataFormat`].
pub fn parse_series(bytes: &[u8], origin: &Path) -> Result<ScoreSeries> {
    let mut values = Vec::with_capacity(memchr_iter(b'\n', bytes).count() + 1);
    for (index, raw) in lines(bytes).enumerate() {
        let trimmed = raw.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }
        values.push(parse_score(trimmed).ok_or_else(|| CompareError::DataFormat {
            path: origin.to_path_buf(),
            line: index + 1,
            value: String::from_utf8_lossy(trimmed).into_owned(),
        })?);
    }
    Ok(ScoreSeries::new(values))
}

fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    let ends = memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len()));
    ends.filter_map(move |end| {
        if start > bytes.len() {
            return None;
        }
        let line = &bytes[start..end];
        start = end + 1;
        Some(line)
    })
}

fn parse_score(field: &[u8]) -> Option<u64> {
    let text = std::str::from_utf8(field).ok()?;
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}
