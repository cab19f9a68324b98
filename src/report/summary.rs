//! Summary region parsing and rebuilding.
//!
//! `tsc --pretty` ends its report in one of two shapes: a single line
//! (`Found 1 error in src/a.ts:5`) or a table (`Found N errors in M files.`
//! followed by an `Errors  Files` header and one row per file). After
//! filtering, the surviving per-file counts are re-rendered in whichever
//! shape now fits, without re-running the compiler.

use regex::Regex;
use std::sync::LazyLock;

use crate::filter::PathFilter;
use crate::report::error::ReportError;
use crate::report::markers;

/// Header line that distinguishes the table shape from the single-line shape.
const TABLE_HEADER: &str = "Errors  Files";

static TABLE_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<count>\d+)\s+(?P<path>.*?)\x1b\[90m").unwrap());

static SINGLE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<count>\d+).* (?P<path>.*?)\x1b\[90m").unwrap());

/// One per-file error count from the summary region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Number of errors reported for this file, always at least 1.
    pub error_count: usize,
    /// The file path as printed by the compiler.
    pub path: String,
    /// Original row text, reused verbatim when re-rendering the table.
    /// Empty for the single-line shape, which is always rebuilt from scratch.
    pub raw: String,
}

/// Parses the summary region (marker line through end of input) into
/// per-file entries.
pub fn parse_region(region: &[&str]) -> Result<Vec<SummaryEntry>, ReportError> {
    if region.get(2).copied() == Some(TABLE_HEADER) {
        let rows = region
            .get(3..region.len().saturating_sub(1))
            .unwrap_or_default();
        rows.iter().map(|row| parse_table_row(row)).collect()
    } else {
        let marker_line = region.first().copied().unwrap_or_default();
        Ok(vec![parse_single_line(marker_line)?])
    }
}

fn parse_table_row(row: &str) -> Result<SummaryEntry, ReportError> {
    let caps = TABLE_ROW_RE
        .captures(row)
        .ok_or_else(|| ReportError::SummaryRowMismatch {
            line: row.to_string(),
        })?;
    Ok(SummaryEntry {
        error_count: parse_count(&caps["count"], row)?,
        path: caps["path"].to_string(),
        raw: row.to_string(),
    })
}

fn parse_single_line(line: &str) -> Result<SummaryEntry, ReportError> {
    let caps = SINGLE_LINE_RE
        .captures(line)
        .ok_or_else(|| ReportError::SummaryRowMismatch {
            line: line.to_string(),
        })?;
    Ok(SummaryEntry {
        error_count: parse_count(&caps["count"], line)?,
        path: caps["path"].to_string(),
        raw: String::new(),
    })
}

fn parse_count(digits: &str, line: &str) -> Result<usize, ReportError> {
    digits
        .parse()
        .map_err(|_| ReportError::SummaryRowMismatch {
            line: line.to_string(),
        })
}

/// Drops entries whose paths match the exclusion filter.
pub fn filter_entries(entries: Vec<SummaryEntry>, filter: &PathFilter) -> Vec<SummaryEntry> {
    entries
        .into_iter()
        .filter(|entry| !filter.is_excluded(&entry.path))
        .collect()
}

/// Renders the rebuilt summary for the surviving entries, or `None` when
/// nothing survived and no summary should be printed at all.
///
/// A table that collapsed to a single surviving file renders through the
/// same single-file path as genuinely single-file input.
pub fn render(entries: &[SummaryEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    if entries.len() > 1 {
        let total: usize = entries.iter().map(|entry| entry.error_count).sum();
        let mut text = format!(
            "Found {} errors in {} files.\n\n{}\n",
            total,
            entries.len(),
            TABLE_HEADER
        );
        let rows: Vec<&str> = entries.iter().map(|entry| entry.raw.as_str()).collect();
        text.push_str(&rows.join("\n"));
        return Some(text);
    }

    let entry = &entries[0];
    let suffix = format!("{}:5{}", markers::DIM, markers::RESET);
    let text = if entry.error_count == 1 {
        format!("Found 1 error in {}{}\n", entry.path, suffix)
    } else {
        format!(
            "Found {} errors in the same file, starting at: {}{}\n",
            entry.error_count, entry.path, suffix
        )
    };
    Some(text)
}
