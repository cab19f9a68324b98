//! ANSI markers used by `tsc --pretty` output.
//!
//! The compiler highlights the file path at the start of each diagnostic
//! block in bright cyan and dims location suffixes like `:5` in gray. These
//! escapes are the only structure available in the stream, so both the
//! segmenter and the summary rebuilder key off them.

use regex::Regex;
use std::sync::LazyLock;

/// Bright cyan SGR prefix, wraps the file path on a block's first line.
pub const BRIGHT_CYAN: &str = "\u{1b}[96m";

/// Dimmed gray SGR prefix, precedes `:line` location suffixes.
pub const DIM: &str = "\u{1b}[90m";

/// SGR reset.
pub const RESET: &str = "\u{1b}[0m";

static PATH_WRAPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[96m(?P<path>.*?)\x1b\[0m").unwrap());

static SUMMARY_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Found \d+ errors?").unwrap());

/// Does this line open a new diagnostic block?
pub fn is_block_start(line: &str) -> bool {
    line.starts_with(BRIGHT_CYAN)
}

/// Does this line open the trailing "Found N errors" summary region?
pub fn is_summary_marker(line: &str) -> bool {
    SUMMARY_MARKER_RE.is_match(line)
}

/// Extracts the file path from a block's first line via the bright-cyan
/// wrapper. Returns `None` when the wrapper is absent.
pub fn block_path(line: &str) -> Option<&str> {
    PATH_WRAPPER_RE
        .captures(line)
        .and_then(|caps| caps.name("path"))
        .map(|m| m.as_str())
}
