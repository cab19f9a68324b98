//! Glob-based path exclusion.
//!
//! Wraps an ordered list of shell-style patterns (from the tsconfig
//! `exclude` field and `--exclude` flags) into a single predicate shared by
//! the segmenter and the summary rebuilder. Immutable after construction.

use glob::Pattern;

/// Predicate over file paths, true when a path should be excluded.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: Vec<Pattern>,
}

impl PathFilter {
    /// Compiles the given glob patterns. Patterns that fail to compile are
    /// skipped with a warning rather than aborting the run; the upstream
    /// tsconfig has already been accepted by tsc itself.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for raw in patterns {
            let raw = raw.as_ref();
            match Pattern::new(raw) {
                Ok(pattern) => compiled.push(pattern),
                Err(err) => tracing::warn!(pattern = raw, %err, "skipping invalid glob pattern"),
            }
        }
        Self { patterns: compiled }
    }

    /// True when any pattern matches `path`. An empty list excludes nothing.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    /// True when no patterns are loaded.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
