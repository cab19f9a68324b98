//! End-to-end tests for the filtering pipeline (CLI).

use predicates::prelude::*;

use crate::helpers::{block, run, single_summary, table_summary, DIM, RESET};

// ============================================================================
// Empty and clean input
// ============================================================================

#[test]
fn empty_stdin_exits_0_with_no_output() {
    let (stdout, stderr, exit_code) = run(&[], "");

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn input_without_summary_marker_exits_0() {
    let input = format!("{}  truncated mid-stream", block("src/a.ts"));
    let (stdout, _stderr, exit_code) = run(&[], &input);

    assert_eq!(exit_code, 0);
    // The trailing partial block is never flushed.
    assert!(!stdout.contains("truncated"));
}

// ============================================================================
// Scenario A: single file, nothing excluded
// ============================================================================

#[test]
fn single_file_report_passes_through_untouched() {
    let input = format!("{}{}", block("src/a.ts"), single_summary("src/a.ts"));
    let (stdout, _stderr, exit_code) = run(&[], &input);

    assert_eq!(exit_code, 2);
    assert!(stdout.contains("error TS2322"));
    assert!(stdout.contains(&format!("Found 1 error in src/a.ts{DIM}:5{RESET}")));
}

// ============================================================================
// Scenario B: table collapses to one surviving file
// ============================================================================

#[test]
fn excluding_one_of_two_files_collapses_the_table() {
    let input = format!(
        "{}{}{}",
        block("src/a.ts"),
        block("generated/b.ts"),
        table_summary(&[(2, "src/a.ts"), (3, "generated/b.ts")])
    );
    let (stdout, _stderr, exit_code) = run(&["--exclude", "generated/**"], &input);

    assert_eq!(exit_code, 2);
    assert!(stdout.contains("src/a.ts"));
    assert!(!stdout.contains("generated/b.ts"));
    assert!(stdout.contains(&format!(
        "Found 2 errors in the same file, starting at: src/a.ts{DIM}:5{RESET}"
    )));
    assert!(!stdout.contains("Errors  Files"));
}

#[test]
fn table_is_kept_when_multiple_files_survive() {
    let input = format!(
        "{}{}{}",
        block("src/a.ts"),
        block("src/b.ts"),
        table_summary(&[(2, "src/a.ts"), (3, "src/b.ts")])
    );
    let (stdout, _stderr, exit_code) = run(&[], &input);

    assert_eq!(exit_code, 2);
    let has_table = predicate::str::contains("Found 5 errors in 2 files.")
        .and(predicate::str::contains("Errors  Files"));
    assert!(has_table.eval(&stdout));
}

// ============================================================================
// Scenario C: everything excluded
// ============================================================================

#[test]
fn all_excluded_yields_empty_output_and_exit_0() {
    let input = format!(
        "{}{}{}{}",
        block("generated/a.ts"),
        block("generated/b.ts"),
        block("generated/c.ts"),
        table_summary(&[(1, "generated/a.ts"), (2, "generated/b.ts"), (1, "generated/c.ts")])
    );
    let (stdout, _stderr, exit_code) = run(&["--exclude", "generated/**"], &input);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn single_excluded_file_yields_empty_output_and_exit_0() {
    let input = format!("{}{}", block("dist/a.ts"), single_summary("dist/a.ts"));
    let (stdout, _stderr, exit_code) = run(&["--exclude", "dist/**"], &input);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn rerunning_on_own_output_is_a_fixed_point() {
    let input = format!(
        "{}{}{}",
        block("src/a.ts"),
        block("generated/b.ts"),
        table_summary(&[(2, "src/a.ts"), (3, "generated/b.ts")])
    );
    let args = ["--exclude", "generated/**"];

    let (first, _, first_code) = run(&args, &input);
    let (second, _, second_code) = run(&args, &first);

    assert_eq!(first_code, 2);
    assert_eq!(second_code, 2);
    assert_eq!(first, second);
}

#[test]
fn rerunning_preserved_table_is_a_fixed_point() {
    let input = format!(
        "{}{}{}",
        block("src/a.ts"),
        block("src/b.ts"),
        table_summary(&[(2, "src/a.ts"), (3, "src/b.ts")])
    );

    let (first, _, _) = run(&[], &input);
    let (second, _, exit_code) = run(&[], &first);

    assert_eq!(exit_code, 2);
    assert_eq!(first, second);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn block_without_path_marker_fails_loudly() {
    let input = format!(
        "leading junk before any marker\n{}{}",
        block("src/a.ts"),
        single_summary("src/a.ts")
    );
    let (_stdout, stderr, exit_code) = run(&[], &input);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("no file path marker"));
}

#[test]
fn malformed_table_row_fails_loudly() {
    let input = format!(
        "{}Found 2 errors in 2 files.\n\nErrors  Files\nthis row has no markers\n",
        block("src/a.ts")
    );
    let (stdout, stderr, exit_code) = run(&[], &input);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("unrecognized summary row"));
    // Output streamed before the failure stays in place.
    assert!(stdout.contains("src/a.ts"));
}

// ============================================================================
// CLI surface
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run(&["--help"], "");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("tsc-prune"));
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--project"));
}

#[test]
fn version_exits_0() {
    let (stdout, _stderr, exit_code) = run(&["--version"], "");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("tsc-prune"));
}

#[test]
fn exclude_flag_is_repeatable() {
    let input = format!(
        "{}{}{}",
        block("dist/a.ts"),
        block("generated/b.ts"),
        table_summary(&[(1, "dist/a.ts"), (1, "generated/b.ts")])
    );
    let (stdout, _stderr, exit_code) = run(
        &["--exclude", "dist/**", "--exclude", "generated/**"],
        &input,
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}
