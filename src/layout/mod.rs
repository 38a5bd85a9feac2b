//! Non-function regions of a script: the leading header and the bootstrap code
//!
//! The header is the shebang/copyright/license block at the top of the file.
//! The bootstrap block gathers loader, `source`, and `trap` lines that sit
//! outside any function so they can be relocated to their own section.

use crate::extract::{brace_delta, function_header};

/// Prefixes (after trimming) that keep a line in the header block
const HEADER_PREFIXES: &[&str] = &["#!", "# Copyright", "# Author:", "# License:", "# Revision:"];

/// Lines already owned by the header; the bootstrap scan ignores them
const HEADER_SKIP_PREFIXES: &[&str] = &[
    "#!/usr/bin/env bash",
    "# Copyright",
    "# Author:",
    "# License:",
    "# Revision:",
];

/// Phrases that open a loader comment region
const LOADER_PHRASES: &[&str] = &["Community-Scripts bootstrap", "Load core"];

/// Markers that open and close a fenced loader comment
const FENCE_MARKERS: &[&str] = &["# ---", "# ==="];

/// Prefixes (after trimming) of dependency-sourcing lines
const SOURCE_PREFIXES: &[&str] = &["source <(", "if command -v curl", "elif command -v wget"];

/// Helper invocations that belong with dependency loading
const LOADER_CALLS: &[&str] = &["load_functions", "catch_errors"];

/// Global array declaration kept verbatim after the last section
const DECLARATION_MARKER: &str = "declare -ag VAR_WHITELIST";
const DECLARATION_NAME: &str = "VAR_WHITELIST";

/// Leading header lines, trailing blank lines removed
pub fn header_block<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut header: Vec<&str> = lines
        .iter()
        .copied()
        .take_while(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || HEADER_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        })
        .collect();

    while header.last().is_some_and(|l| l.trim().is_empty()) {
        header.pop();
    }
    header
}

/// Code found outside any function, split by destination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapBlock<'a> {
    /// Loader comments and dependency-sourcing lines
    pub loader: Vec<&'a str>,
    /// `trap` lines
    pub traps: Vec<&'a str>,
    /// Global declarations appended without a banner
    pub declarations: Vec<&'a str>,
}

impl BootstrapBlock<'_> {
    /// True when there is nothing for the dependency-loading section
    pub fn is_empty(&self) -> bool {
        self.loader.is_empty() && self.traps.is_empty()
    }
}

fn ends_with_content(lines: &[&str]) -> bool {
    lines.last().is_some_and(|l| !l.trim().is_empty())
}

fn is_source_directive(trimmed: &str) -> bool {
    SOURCE_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        || LOADER_CALLS.iter().any(|call| trimmed.contains(call))
}

/// Scan the lines outside function bodies and collect bootstrap code
pub fn extract_bootstrap<'a>(lines: &[&'a str]) -> BootstrapBlock<'a> {
    let mut block = BootstrapBlock::default();
    let mut depth: i64 = 0;
    let mut in_fence = false;

    for &line in lines {
        let trimmed = line.trim();

        if HEADER_SKIP_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            continue;
        }

        if depth > 0 {
            depth += brace_delta(line);
            continue;
        }
        if function_header(line).is_some() {
            depth = brace_delta(line);
            continue;
        }

        if in_fence || LOADER_PHRASES.iter().any(|phrase| line.contains(phrase)) {
            block.loader.push(line);
            if FENCE_MARKERS.iter().any(|m| line.contains(m)) {
                in_fence = !in_fence;
            }
            continue;
        }

        if is_source_directive(trimmed) {
            block.loader.push(line);
            continue;
        }

        if trimmed.starts_with("trap ") {
            block.traps.push(line);
            continue;
        }

        if line.contains(DECLARATION_MARKER)
            || block
                .declarations
                .last()
                .is_some_and(|prev| prev.contains(DECLARATION_NAME))
        {
            block.declarations.push(line);
            continue;
        }

        // Keep single blank separators, never runs
        if trimmed.is_empty() {
            if ends_with_content(&block.loader) {
                block.loader.push(line);
            } else if ends_with_content(&block.traps) {
                block.traps.push(line);
            }
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_header_block() {
        let text = "#!/usr/bin/env bash\n# Copyright (c) 2021-2025 tteck\n# Author: tteck\n# License: MIT\n\n# Revision: 1\n\nvariables() {\n}";
        assert_eq!(
            header_block(&lines(text)),
            vec![
                "#!/usr/bin/env bash",
                "# Copyright (c) 2021-2025 tteck",
                "# Author: tteck",
                "# License: MIT",
                "",
                "# Revision: 1",
            ]
        );
    }

    #[test]
    fn test_header_stops_at_first_other_line() {
        let text = "#!/bin/bash\n# helper library\n# Copyright 2024";
        assert_eq!(header_block(&lines(text)), vec!["#!/bin/bash"]);
    }

    #[test]
    fn test_header_missing() {
        assert!(header_block(&lines("set -e\n")).is_empty());
        assert!(header_block(&lines("\n\n")).is_empty());
    }

    #[test]
    fn test_source_and_trap_lines_outside_functions() {
        let text = "source <(curl -fsSL https://example.com/core.func)\nload_functions\n\nfoo() {\n  trap 'x' EXIT\n  source <(echo)\n}\ntrap cleanup EXIT\n\n";
        let block = extract_bootstrap(&lines(text));

        assert_eq!(
            block.loader,
            vec![
                "source <(curl -fsSL https://example.com/core.func)",
                "load_functions",
                "",
            ]
        );
        assert_eq!(block.traps, vec!["trap cleanup EXIT", ""]);
    }

    #[test]
    fn test_blank_runs_collapse() {
        let text = "catch_errors\n\n\n\nx=1";
        let block = extract_bootstrap(&lines(text));
        assert_eq!(block.loader, vec!["catch_errors", ""]);
    }

    #[test]
    fn test_blank_goes_to_traps_after_loader_blank() {
        let text = "catch_errors\n\ntrap a EXIT\n\n";
        let block = extract_bootstrap(&lines(text));
        assert_eq!(block.loader, vec!["catch_errors", ""]);
        assert_eq!(block.traps, vec!["trap a EXIT", ""]);
    }

    #[test]
    fn test_fenced_loader_comment() {
        let text = "# --- Community-Scripts bootstrap ---\n# fetch core\nif command -v curl >/dev/null; then\n# ---\nx=1\n";
        let block = extract_bootstrap(&lines(text));
        assert_eq!(
            block.loader,
            vec![
                "# --- Community-Scripts bootstrap ---",
                "# fetch core",
                "if command -v curl >/dev/null; then",
                "# ---",
                "",
            ]
        );
    }

    #[test]
    fn test_declaration_and_following_line() {
        let text = "declare -ag VAR_WHITELIST=(\n  CTID HN\n)\n";
        let block = extract_bootstrap(&lines(text));
        assert_eq!(block.declarations, vec!["declare -ag VAR_WHITELIST=(", "  CTID HN"]);
        assert!(block.is_empty());
    }

    #[test]
    fn test_header_lines_are_not_bootstrap() {
        let text = "#!/usr/bin/env bash\n# Copyright Load core\ncatch_errors";
        let block = extract_bootstrap(&lines(text));
        assert_eq!(block.loader, vec!["catch_errors"]);
    }

    #[test]
    fn test_one_line_function_does_not_hide_following_code() {
        let text = "f() { :; }\ntrap g EXIT";
        let block = extract_bootstrap(&lines(text));
        assert_eq!(block.traps, vec!["trap g EXIT"]);
    }
}
