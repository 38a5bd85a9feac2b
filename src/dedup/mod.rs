//! Duplicate function detection
//!
//! Bodies are compared after collapsing whitespace runs. Whole-word uses of
//! the function's own name are replaced by a placeholder first, so
//! `a() { a; }` and `b() {  b; }` are duplicates of each other while
//! `b() { a; }` is not.

use crate::extract::{FunctionMap, FunctionRecord};
use regex::{NoExpand, Regex};
use std::collections::{HashMap, HashSet};

/// Stands in for a function's own name inside its comparison key
const SELF_PLACEHOLDER: &str = "<self>";

/// A function whose body matches an earlier one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// The later function, which gets dropped
    pub name: String,
    /// The first function seen with the same body
    pub original: String,
}

/// Duplicates in detection order, with fast membership checks
#[derive(Debug, Clone, Default)]
pub struct DuplicateSet {
    entries: Vec<Duplicate>,
    names: HashSet<String>,
}

impl DuplicateSet {
    fn push(&mut self, duplicate: Duplicate) {
        self.names.insert(duplicate.name.clone());
        self.entries.push(duplicate);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Duplicate> {
        self.entries.iter()
    }
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text used to compare two functions
///
/// Every whole-word occurrence of the function's own name becomes
/// [`SELF_PLACEHOLDER`], then whitespace is normalized. Calls to other
/// functions are left intact.
pub fn comparison_key(record: &FunctionRecord) -> String {
    let own_name = format!(r"\b{}\b", regex::escape(&record.name));
    match Regex::new(&own_name) {
        Ok(pattern) => {
            normalize_whitespace(&pattern.replace_all(&record.body, NoExpand(SELF_PLACEHOLDER)))
        }
        // Names come from the header pattern, so this only guards the regex size limit
        Err(_) => normalize_whitespace(&record.body),
    }
}

/// Find functions whose bodies repeat an earlier function's body
///
/// Functions are visited in first-appearance order. Names in `excluded`
/// are neither compared nor reported.
pub fn find_duplicates(functions: &FunctionMap, excluded: &[&str]) -> DuplicateSet {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut duplicates = DuplicateSet::default();

    for record in functions.iter() {
        if excluded.contains(&record.name.as_str()) {
            continue;
        }

        let key = comparison_key(record);
        match seen.get(&key) {
            Some(original) => duplicates.push(Duplicate {
                name: record.name.clone(),
                original: original.to_string(),
            }),
            None => {
                seen.insert(key, record.name.as_str());
            }
        }
    }

    duplicates
}
