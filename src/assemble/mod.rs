//! Output assembly
//!
//! Builds the reorganized script from the extracted pieces:
//!
//! 1. the header block
//! 2. one banner per non-empty group, followed by its functions
//! 3. an uncategorized section, if any function matched no group
//! 4. the dependency-loading section (loader lines, then traps)
//! 5. global declarations, without a banner
//!
//! Parts are joined with `\n`; every function is followed by an empty part,
//! which leaves one blank line between functions.

use crate::dedup::DuplicateSet;
use crate::extract::{leading_comments, FunctionMap};
use crate::groups::{
    classify_in, Classification, Group, DEPENDENCY_LOADING_TITLE, UNCATEGORIZED_TITLE,
};
use crate::layout::BootstrapBlock;

const RULE_WIDTH: usize = 78;

/// Banner inserted before each section
pub fn section_header(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n# {rule}\n# {title}\n# {rule}\n")
}

/// Everything the assembler reads
pub struct AssemblyInput<'a> {
    /// Original text split on `\n`
    pub lines: &'a [&'a str],
    pub functions: &'a FunctionMap,
    pub duplicates: &'a DuplicateSet,
    pub header: &'a [&'a str],
    pub bootstrap: &'a BootstrapBlock<'a>,
    /// Group table in output order
    pub groups: &'a [Group],
}

/// One emitted group section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    /// Function names in output order
    pub functions: Vec<String>,
}

/// Assembled output and a description of what went into it
#[derive(Debug, Clone)]
pub struct Assembly {
    pub text: String,
    /// Emitted group sections, in table order
    pub sections: Vec<Section>,
    /// Functions that matched no group
    pub uncategorized: Vec<String>,
    /// Number of functions written (duplicates excluded)
    pub retained: usize,
}

impl Assembly {
    /// Line count of the output, counted as separators plus one
    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }
}

/// Build the reorganized text
pub fn assemble(input: &AssemblyInput<'_>) -> Assembly {
    let mut buckets: Vec<Vec<(&str, String)>> = vec![Vec::new(); input.groups.len()];
    let mut unknown: Vec<(&str, String)> = Vec::new();

    for record in input.functions.iter() {
        if input.duplicates.contains(&record.name) {
            continue;
        }

        let code = leading_comments(input.lines, &record.name) + &record.body;
        let entry = (record.name.as_str(), code);
        match classify_in(input.groups, &record.name) {
            Classification::Group(index) => buckets[index].push(entry),
            Classification::Uncategorized => unknown.push(entry),
        }
    }

    let mut parts: Vec<String> = vec![input.header.join("\n")];
    let mut sections = Vec::new();
    let mut retained = 0;

    for (group, bucket) in input.groups.iter().zip(buckets) {
        if bucket.is_empty() {
            continue;
        }
        parts.push(section_header(group.title));

        let mut names = Vec::with_capacity(bucket.len());
        for (name, code) in bucket {
            parts.push(code);
            parts.push(String::new());
            names.push(name.to_string());
        }
        retained += names.len();
        sections.push(Section {
            title: group.title,
            functions: names,
        });
    }

    let mut uncategorized = Vec::with_capacity(unknown.len());
    if !unknown.is_empty() {
        parts.push(section_header(UNCATEGORIZED_TITLE));
        for (name, code) in unknown {
            parts.push(code);
            parts.push(String::new());
            uncategorized.push(name.to_string());
        }
        retained += uncategorized.len();
    }

    let bootstrap = input.bootstrap;
    if !bootstrap.is_empty() {
        parts.push(section_header(DEPENDENCY_LOADING_TITLE));
        parts.extend(bootstrap.loader.iter().map(|l| l.to_string()));
        parts.extend(bootstrap.traps.iter().map(|l| l.to_string()));
        parts.push(String::new());
    }

    if !bootstrap.declarations.is_empty() {
        parts.extend(bootstrap.declarations.iter().map(|l| l.to_string()));
        parts.push(String::new());
    }

    Assembly {
        text: parts.join("\n"),
        sections,
        uncategorized,
        retained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::find_duplicates;
    use crate::extract::extract_functions;
    use crate::groups::FUNCTION_GROUPS;
    use crate::layout::{extract_bootstrap, header_block};

    fn run(content: &str) -> Assembly {
        let lines: Vec<&str> = content.split('\n').collect();
        let functions = extract_functions(content);
        let duplicates = find_duplicates(&functions, &[]);
        let header = header_block(&lines);
        let bootstrap = extract_bootstrap(&lines);
        assemble(&AssemblyInput {
            lines: &lines,
            functions: &functions,
            duplicates: &duplicates,
            header: &header,
            bootstrap: &bootstrap,
            groups: FUNCTION_GROUPS,
        })
    }

    #[test]
    fn test_section_header_format() {
        let banner = section_header("NETWORK & IP MANAGEMENT");
        let rule = format!("# {}", "=".repeat(78));
        assert_eq!(banner, format!("\n{rule}\n# NETWORK & IP MANAGEMENT\n{rule}\n"));
    }

    #[test]
    fn test_one_line_duplicate_scenario() {
        let content = "#!/usr/bin/env bash\n# Copyright 2024\nvariables() { echo hi }\nvariables2() { echo hi }\n";
        let assembly = run(content);

        assert!(assembly.text.starts_with("#!/usr/bin/env bash\n# Copyright 2024\n"));
        assert!(assembly.text.contains("# CORE INITIALIZATION & VARIABLES\n"));
        assert!(assembly.text.contains("variables() { echo hi }"));
        assert!(!assembly.text.contains("variables2"));
        assert!(assembly.uncategorized.is_empty());
        assert_eq!(assembly.retained, 1);
    }

    #[test]
    fn test_exact_layout() {
        let content = "#!/usr/bin/env bash\n\n# Get IP\nget_current_ip() {\n  hostname -I\n}\n\nstart() {\n  :\n}\n";
        let assembly = run(content);

        let expected = [
            "#!/usr/bin/env bash".to_string(),
            section_header("NETWORK & IP MANAGEMENT"),
            "# Get IP\nget_current_ip() {\n  hostname -I\n}".to_string(),
            String::new(),
            section_header("MAIN ENTRY POINTS & ERROR HANDLING"),
            "start() {\n  :\n}".to_string(),
            String::new(),
        ]
        .join("\n");
        assert_eq!(assembly.text, expected);
    }

    #[test]
    fn test_group_order_follows_table_not_file() {
        let content = "start() {\n}\nvariables() {\n}\nselect_storage() {\n}\n";
        let assembly = run(content);

        let titles: Vec<&str> = assembly.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "CORE INITIALIZATION & VARIABLES",
                "STORAGE DISCOVERY & SELECTION",
                "MAIN ENTRY POINTS & ERROR HANDLING",
            ]
        );
        let core = assembly.text.find("variables() {").unwrap();
        let main = assembly.text.find("start() {").unwrap();
        assert!(core < main);
    }

    #[test]
    fn test_within_group_file_order() {
        let content = "ver_lt() {\n}\npkg_ver() {\n}\n";
        let assembly = run(content);
        assert_eq!(assembly.sections[0].functions, vec!["ver_lt", "pkg_ver"]);
    }

    #[test]
    fn test_uncategorized_section() {
        let content = "helper() {\n  :\n}\nvariables() {\n}\n";
        let assembly = run(content);

        assert_eq!(assembly.uncategorized, vec!["helper"]);
        let banner = assembly.text.find("# UNCATEGORIZED FUNCTIONS").unwrap();
        let core = assembly.text.find("# CORE INITIALIZATION").unwrap();
        assert!(core < banner);
        assert!(assembly.text[banner..].contains("helper() {"));
    }

    #[test]
    fn test_no_functions_emits_no_group_banners() {
        let content = "#!/usr/bin/env bash\n# License: MIT\n\nset -e\n";
        let assembly = run(content);

        assert_eq!(assembly.text, "#!/usr/bin/env bash\n# License: MIT");
        assert!(assembly.sections.is_empty());
        assert_eq!(assembly.retained, 0);
    }

    #[test]
    fn test_bootstrap_and_declarations_trail_functions() {
        let content = "source <(curl -fsSL https://x/core.func)\ntrap cleanup EXIT\ndeclare -ag VAR_WHITELIST=(CTID)\nstart() {\n}\n";
        let assembly = run(content);

        let start = assembly.text.find("start() {").unwrap();
        let loading = assembly.text.find("# DEPENDENCY LOADING").unwrap();
        let source = assembly.text.find("source <(curl").unwrap();
        let trap = assembly.text.find("trap cleanup EXIT").unwrap();
        let declare = assembly.text.find("declare -ag VAR_WHITELIST").unwrap();
        assert!(start < loading && loading < source && source < trap && trap < declare);
    }

    #[test]
    fn test_line_count() {
        let content = "start() {\n}\n";
        let assembly = run(content);
        assert_eq!(assembly.line_count(), assembly.text.split('\n').count());
    }
}
