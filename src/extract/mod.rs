//! Top-level function extraction
//!
//! Finds `name() {` headers at column zero and captures each function's text
//! by brace-depth counting. The count is purely textual: braces inside
//! quotes, comments or here-documents are counted like any other brace.

pub mod comments;

pub use comments::leading_comments;

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static FUNCTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z_][a-zA-Z0-9_]*)\s*\(\)\s*\{").expect("function header pattern is valid")
});

/// One top-level function definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Function name from the header line
    pub name: String,
    /// Full text, signature through closing brace
    pub body: String,
    /// 0-based line of the header
    pub start_line: usize,
    /// 0-based line of the closing brace (inclusive)
    pub end_line: usize,
    /// False when end of file was reached before the depth returned to zero
    pub closed: bool,
}

/// A name that was defined more than once; only the last body is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefinition {
    pub name: String,
    /// 0-based header line of the first definition
    pub first_line: usize,
    /// 0-based header line of the definition that replaced it
    pub line: usize,
}

/// Function records keyed by name, iterated in first-appearance order
///
/// Re-inserting an existing name replaces the record in place, so the name
/// keeps its original position but carries the newest body.
#[derive(Debug, Clone, Default)]
pub struct FunctionMap {
    records: Vec<FunctionRecord>,
    index: HashMap<String, usize>,
    redefinitions: Vec<Redefinition>,
}

impl FunctionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; an existing name is replaced in place and logged as a redefinition
    pub fn insert(&mut self, record: FunctionRecord) {
        match self.index.get(&record.name) {
            Some(&slot) => {
                self.redefinitions.push(Redefinition {
                    name: record.name.clone(),
                    first_line: self.records[slot].start_line,
                    line: record.start_line,
                });
                self.records[slot] = record;
            }
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Names that were defined more than once, in the order the collisions occurred
    pub fn redefinitions(&self) -> &[Redefinition] {
        &self.redefinitions
    }

    /// Records whose braces never balanced
    pub fn unclosed(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.records.iter().filter(|r| !r.closed)
    }
}

/// Return the function name if `line` opens a top-level function
pub fn function_header(line: &str) -> Option<&str> {
    FUNCTION_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Net brace count of a line: opening minus closing
pub fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |depth, ch| match ch {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}

/// Extract every top-level function from `content`
pub fn extract_functions(content: &str) -> FunctionMap {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut functions = FunctionMap::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let Some(name) = function_header(line) else {
            i += 1;
            continue;
        };

        let start_line = i;
        // The header's own braces count, so `f() { :; }` closes on its line
        let mut depth = brace_delta(line);
        i += 1;

        while i < lines.len() && depth > 0 {
            depth += brace_delta(lines[i]);
            i += 1;
        }

        let end_line = i - 1;
        functions.insert(FunctionRecord {
            name: name.to_string(),
            body: lines[start_line..=end_line].join("\n"),
            start_line,
            end_line,
            closed: depth <= 0,
        });
    }

    functions
}
