//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! domain is pure, services see only ports, adapters never reach up into
//! presentation, and the live environment is read in exactly one place.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-test, non-comment lines of a file with their 1-based line numbers.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut tracker = CfgTestTracker::new();
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            let comment = trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*');
            (!in_test && !comment).then(|| (i + 1, line.to_string()))
        })
        .collect()
}

fn src(parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), |p, part| p.join(part))
}

fn relative(path: &Path) -> String {
    path.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(path)
        .display()
        .to_string()
        .replace('\\', "/")
}

/// Scan `dir` for any of `forbidden`, skipping files accepted by `skip`.
fn violations_in(dir: &Path, forbidden: &[&str], skip: impl Fn(&str) -> bool) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = relative(&file);
        if skip(&rel) {
            continue;
        }
        for (lineno, line) in production_lines(&file) {
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!("{rel}:{lineno}: `{pattern}`: {}", line.trim()));
                }
            }
        }
    }
    violations
}

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let violations = violations_in(
        &src(&["domain"]),
        &[
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "std::fs",
            "std::process",
            "std::net",
            "std::env",
            "ureq::",
        ],
        |_| false,
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay pure:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_depends_only_on_domain() {
    let violations = violations_in(
        &src(&["application"]),
        &["crate::infra", "crate::commands", "crate::output", "ureq::", "dialoguer::"],
        |_| false,
    );
    assert!(
        violations.is_empty(),
        "application/ must only use domain types and ports:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_does_not_reach_into_presentation() {
    let violations = violations_in(
        &src(&["infra"]),
        &["crate::commands", "crate::output"],
        |_| false,
    );
    assert!(
        violations.is_empty(),
        "infra/ must not import commands or output:\n{}",
        violations.join("\n")
    );
}

#[test]
fn live_environment_is_read_only_by_env_file_capture() {
    let violations = violations_in(
        &src(&[]),
        &["env::var(", "env::vars(", "env::vars_os(", "env::var_os("],
        |rel| rel.ends_with("infra/env_file.rs"),
    );
    assert!(
        violations.is_empty(),
        "the process environment is captured once in infra/env_file.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_inline_json_branching_in_commands() {
    let mut violations = violations_in(&src(&["commands"]), &["json: bool"], |_| false);
    for file in collect_rs_files(&src(&["commands"])) {
        for (lineno, line) in production_lines(&file) {
            let trimmed = line.trim();
            if trimmed.starts_with("if json") || trimmed.starts_with("if !json") {
                violations.push(format!("{}:{lineno}: {trimmed}", relative(&file)));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "Found inline JSON branching in commands/, use app.renderer() instead:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_unwrap_in_production_code() {
    let violations = violations_in(&src(&[]), &[".unwrap()"], |_| false);
    assert!(
        violations.is_empty(),
        "errors must be propagated, not unwrapped:\n{}",
        violations.join("\n")
    );
}
