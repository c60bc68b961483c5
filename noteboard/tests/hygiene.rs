//! Hygiene — enforces coding standards at test time
//!
//! Scans the noteboard production sources for patterns that panic or swallow
//! errors. Every budget is zero; the drag path must degrade silently, never
//! crash the host page.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_some_and(|e| e == "rs") && !path_str.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn check(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let count: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits
        .iter()
        .map(|(path, n)| format!("  {path}: {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

macro_rules! budget {
    ($name:ident, $pattern:expr, $max:expr) => {
        #[test]
        fn $name() {
            check($pattern, $max);
        }
    };
}

// Panics.
budget!(unwrap_budget, ".unwrap()", 0);
budget!(expect_budget, ".expect(", 0);
budget!(panic_budget, "panic!(", 0);
budget!(unreachable_budget, "unreachable!(", 0);
budget!(todo_budget, "todo!(", 0);
budget!(unimplemented_budget, "unimplemented!(", 0);

// Silent loss.
budget!(silent_discard_budget, "let _ =", 0);
budget!(dot_ok_budget, ".ok()", 0);

// Structure.
budget!(allow_dead_code_budget, "#[allow(dead_code)]", 0);
