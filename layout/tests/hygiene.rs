//! Hygiene — source-level budgets for the layout crate.
//!
//! Scans `src/` (test files excluded) for patterns the crate does not allow
//! in production code. Budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// One forbidden pattern and how many occurrences are tolerated.
struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

// Panics.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, reason: "propagate with ? instead" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, reason: "propagate with ? instead" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, reason: "return an error" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, reason: "make the match exhaustive" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, reason: "finish the stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, reason: "finish the stub" };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, reason: "handle or log the result" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, reason: "errors must reach a Notice or a log line" };

// Output goes through the `log` facade; the host decides where it lands.
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, reason: "use log::" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", max: 0, reason: "use log::" };

// The core must build and test without a browser.
const WEB_SYS: Budget = Budget { pattern: "web_sys", max: 0, reason: "browser glue belongs in the app crate" };

const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "delete unused code" };

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(budget.pattern))
                .count();
            (file.path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, count)| count).sum();

    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {} ({}).\n{listing}",
        budget.pattern,
        budget.max,
        budget.reason,
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
    check(&EPRINTLN);
}

#[test]
fn browser_independence_budget() {
    check(&WEB_SYS);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
