//! Report parsing errors.
//!
//! Both variants signal that the input does not look like `tsc --pretty`
//! output. They are unrecoverable for the current run: output already
//! streamed stays on stdout, the process aborts with a nonzero exit.

/// Errors that can occur while segmenting or rebuilding a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no file path marker on block line: {line:?}")]
    PathMarkerMissing { line: String },

    #[error("unrecognized summary row: {line:?}")]
    SummaryRowMismatch { line: String },

    #[error("failed to write filtered report: {0}")]
    Io(#[from] std::io::Error),
}
