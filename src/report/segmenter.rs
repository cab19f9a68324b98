//! Diagnostic block segmentation.
//!
//! Walks the report line by line, grouping lines into per-file diagnostic
//! blocks. Each block is flushed as soon as its end is known: dropped when
//! its path matches the exclusion filter, otherwise written verbatim to the
//! output in encounter order. The scan stops at the "Found N errors" marker;
//! everything from there on belongs to the summary region and is handled by
//! [`super::summary`].

use std::io::Write;

use crate::filter::PathFilter;
use crate::report::error::ReportError;
use crate::report::markers;

/// Scan position within the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Accumulating per-file diagnostic blocks.
    InBlocks,
    /// The summary marker has been seen; the scan is done.
    InSummary,
}

/// Where the trailing summary region starts, if it was found at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRegion {
    /// Line index of the "Found N errors" marker (0 when never seen).
    pub start: usize,
    /// Whether the marker actually appeared in the input.
    pub marker_seen: bool,
}

/// Streams surviving diagnostic blocks to `out` while scanning for the
/// summary marker.
pub struct Segmenter<'a, W: Write> {
    filter: &'a PathFilter,
    out: &'a mut W,
    block: String,
    state: ScanState,
}

impl<'a, W: Write> Segmenter<'a, W> {
    pub fn new(filter: &'a PathFilter, out: &'a mut W) -> Self {
        Self {
            filter,
            out,
            block: String::new(),
            state: ScanState::InBlocks,
        }
    }

    /// Scans `lines` (the input split on `'\n'`), emitting or dropping each
    /// diagnostic block, and returns where the summary region begins.
    ///
    /// Truncated input that never reaches the summary marker leaves the
    /// trailing partial block unflushed; the caller treats the run as clean.
    pub fn scan(mut self, lines: &[&str]) -> Result<SummaryRegion, ReportError> {
        for (index, line) in lines.iter().enumerate() {
            debug_assert_eq!(self.state, ScanState::InBlocks);
            if markers::is_summary_marker(line) {
                self.flush()?;
                self.state = ScanState::InSummary;
                return Ok(SummaryRegion {
                    start: index,
                    marker_seen: true,
                });
            }
            if markers::is_block_start(line) {
                self.flush()?;
            }
            self.block.push_str(line);
            self.block.push('\n');
        }
        tracing::debug!("summary marker never found; trailing block discarded");
        Ok(SummaryRegion {
            start: 0,
            marker_seen: false,
        })
    }

    /// Decide-emit-or-drop for the pending block. No-op when empty.
    fn flush(&mut self) -> Result<(), ReportError> {
        if self.block.is_empty() {
            return Ok(());
        }
        let first_line = self.block.split('\n').next().unwrap_or("");
        let path = markers::block_path(first_line).ok_or_else(|| ReportError::PathMarkerMissing {
            line: first_line.to_string(),
        })?;
        if self.filter.is_excluded(path) {
            tracing::debug!(path, "dropping excluded diagnostic block");
        } else {
            self.out.write_all(self.block.as_bytes())?;
        }
        self.block.clear();
        Ok(())
    }
}
