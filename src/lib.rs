//! tsc-prune - filters `tsc --pretty` output through tsconfig exclude globs.
//!
//! Reads a compiler report from stdin, drops diagnostic blocks for excluded
//! paths, rewrites the trailing "Found N errors" summary to match what
//! survived, and exits 0 (clean) or 2 (diagnostics remain). Library entry
//! point is [`filter_report`]; the binary wires it to stdin/stdout and the
//! nearest tsconfig.json.

pub mod config;
pub mod filter;
pub mod report;

pub use config::TsConfig;
pub use filter::PathFilter;
pub use report::{filter_report, Outcome, ReportError};
