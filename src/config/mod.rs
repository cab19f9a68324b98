//! tsconfig.json discovery and parsing.
//!
//! Locates the nearest-ancestor `tsconfig.json` and reads its `exclude`
//! field, which seeds the exclusion filter. tsconfig files are JSONC in
//! practice (comments and trailing commas), so the raw text is normalized
//! to strict JSON before deserialization. No `extends` resolution: only the
//! file that is found (or passed via `--project`) is consulted.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading a tsconfig.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The slice of tsconfig.json this tool cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TsConfig {
    /// Glob patterns for paths the project excludes from compilation.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Walks `start_dir` and its ancestors, returning the first `tsconfig.json`.
pub fn find_tsconfig(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join("tsconfig.json"))
        .find(|candidate| candidate.is_file())
}

/// Reads and parses a tsconfig file, tolerating JSONC constructs.
pub fn load(path: &Path) -> Result<TsConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let json = strip_jsonc(&raw);
    serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the exclusion list: an explicit `--project` path wins, otherwise
/// the nearest ancestor of the current directory is searched. No tsconfig
/// means nothing is excluded.
pub fn resolve_excludes(project: Option<&Path>) -> Result<Vec<String>, ConfigError> {
    let path = match project {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().ok();
            match cwd.as_deref().and_then(find_tsconfig) {
                Some(path) => path,
                None => {
                    tracing::debug!("no tsconfig.json found; excluding nothing");
                    return Ok(Vec::new());
                }
            }
        }
    };
    tracing::debug!(path = %path.display(), "loading tsconfig");
    Ok(load(&path)?.exclude)
}

/// Rewrites JSONC to strict JSON: strips `//` and `/* */` comments outside
/// strings, then drops trailing commas before `]` or `}`.
fn strip_jsonc(raw: &str) -> String {
    let without_comments = strip_comments(raw);
    strip_trailing_commas(&without_comments)
}

fn strip_comments(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\\' {
                // Escaped character, keep it verbatim (handles \" inside strings).
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn strip_trailing_commas(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                // Buffer whitespace after the comma; drop the comma when the
                // next significant character closes a collection.
                let mut pending = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() {
                        pending.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match chars.peek() {
                    Some(&']') | Some(&'}') => out.push_str(&pending),
                    _ => {
                        out.push(',');
                        out.push_str(&pending);
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}
