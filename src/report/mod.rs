//! Filtering pipeline for `tsc --pretty` reports.
//!
//! A report is a run of per-file diagnostic blocks followed by a trailing
//! summary region. The pipeline makes a single pass: blocks are streamed to
//! the output as soon as their emit-or-drop decision is made, while the
//! summary can only be rebuilt once the whole region has been seen.
//!
//! # Module Structure
//!
//! - [`markers`] - ANSI escapes and line classifiers for the tsc format
//! - [`segmenter`] - block accumulation and streaming (state machine)
//! - [`summary`] - summary region parsing and re-rendering
//! - [`error`] - fatal parse errors

mod error;
pub mod markers;
mod segmenter;
mod summary;

pub use error::ReportError;
pub use segmenter::{Segmenter, SummaryRegion};
pub use summary::SummaryEntry;

use std::io::Write;

use crate::filter::PathFilter;

/// What remains after filtering, drives the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing survived the filter (or there was nothing to begin with).
    Clean,
    /// At least one diagnostic survived; a summary was written.
    DiagnosticsRemain,
}

/// Runs the whole pipeline: streams surviving diagnostic blocks to `out`,
/// then rebuilds and writes the summary for whatever survived.
///
/// Input that never reaches the "Found N errors" marker is treated as clean:
/// already-streamed blocks stay in the output, no summary is written.
pub fn filter_report(
    input: &str,
    filter: &PathFilter,
    out: &mut impl Write,
) -> Result<Outcome, ReportError> {
    if input.is_empty() {
        return Ok(Outcome::Clean);
    }

    // Split on '\n' rather than `lines()` so a trailing newline keeps its
    // empty final element, which the table parser counts on.
    let lines: Vec<&str> = input.split('\n').collect();

    let region = Segmenter::new(filter, out).scan(&lines)?;
    if !region.marker_seen {
        return Ok(Outcome::Clean);
    }

    let entries = summary::parse_region(&lines[region.start..])?;
    let surviving = summary::filter_entries(entries, filter);
    match summary::render(&surviving) {
        Some(text) => {
            writeln!(out, "{text}")?;
            Ok(Outcome::DiagnosticsRemain)
        }
        None => Ok(Outcome::Clean),
    }
}
