//! Organizer pipeline
//!
//! read → backup → extract → dedupe → classify → assemble → write
//!
//! [`optimize`] is the pure text transformation; [`Organizer::run`] wraps it
//! with the file handling. Nothing is written when the input is missing, and
//! the input itself is never modified.

use crate::assemble::{assemble, AssemblyInput};
use crate::config::RunPaths;
use crate::dedup::find_duplicates;
use crate::error::OrganizerError;
use crate::extract::{extract_functions, FunctionMap};
use crate::groups::{EXCLUDE_FROM_DEDUP, FUNCTION_GROUPS};
use crate::layout::{extract_bootstrap, header_block};
use crate::output::{Reporter, RunSummary};
use std::fs;

/// Line count as separators plus one, so a trailing newline counts a line
pub fn count_lines(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// Result of transforming one script
#[derive(Debug, Clone)]
pub struct Optimization {
    pub text: String,
    pub summary: RunSummary,
    /// Non-fatal problems found in the input
    pub warnings: Vec<OrganizerError>,
}

fn structure_warnings(functions: &FunctionMap, lines: &[&str]) -> Vec<OrganizerError> {
    let mut warnings: Vec<OrganizerError> = functions
        .redefinitions()
        .iter()
        .map(|r| OrganizerError::redefined(&r.name, r.first_line + 1, r.line + 1))
        .collect();

    warnings.extend(functions.unclosed().map(|record| {
        OrganizerError::unclosed_brace(
            &record.name,
            record.start_line + 1,
            lines[record.start_line],
        )
    }));
    warnings
}

/// Reorganize `content`, reporting each stage to `reporter`
pub fn optimize(content: &str, reporter: &Reporter) -> Optimization {
    let lines: Vec<&str> = content.split('\n').collect();

    let functions = extract_functions(content);
    reporter.extracted(functions.len());

    let duplicates = find_duplicates(&functions, EXCLUDE_FROM_DEDUP);
    reporter.duplicates(&duplicates);

    let header = header_block(&lines);
    reporter.header(header.len());

    reporter.building();
    let bootstrap = extract_bootstrap(&lines);
    let assembly = assemble(&AssemblyInput {
        lines: &lines,
        functions: &functions,
        duplicates: &duplicates,
        header: &header,
        bootstrap: &bootstrap,
        groups: FUNCTION_GROUPS,
    });
    reporter.sections(&assembly.sections);
    reporter.uncategorized(&assembly.uncategorized);
    reporter.remaining_code();

    let warnings = structure_warnings(&functions, &lines);
    for warning in &warnings {
        reporter.warning(warning);
    }

    let summary = RunSummary {
        original_lines: count_lines(content),
        optimized_lines: assembly.line_count(),
        functions: functions.len() - duplicates.len(),
        duplicates_removed: duplicates.len(),
        uncategorized: assembly.uncategorized.clone(),
    };

    Optimization {
        text: assembly.text,
        summary,
        warnings,
    }
}

/// Runs the full pipeline against files on disk
pub struct Organizer {
    reporter: Reporter,
}

impl Organizer {
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Back up `paths.input`, reorganize it, and write `paths.output`
    pub fn run(&self, paths: &RunPaths) -> Result<Optimization, OrganizerError> {
        if paths.input.is_dir() {
            return Err(OrganizerError::is_a_directory(&paths.input));
        }
        if !paths.input.exists() {
            return Err(OrganizerError::file_not_found(&paths.input));
        }

        self.reporter.backup(&paths.backup);
        let bytes =
            fs::read(&paths.input).map_err(|e| OrganizerError::read_failed(&paths.input, &e))?;
        fs::write(&paths.backup, &bytes)
            .map_err(|e| OrganizerError::write_failed(&paths.backup, &e))?;

        let content = String::from_utf8(bytes)
            .map_err(|e| OrganizerError::invalid_utf8(&paths.input, e.utf8_error().valid_up_to()))?;

        self.reporter.start();
        self.reporter.reading(&paths.input, count_lines(&content));

        let mut optimization = optimize(&content, &self.reporter);
        let input_name = paths.input.display().to_string();
        for warning in &mut optimization.warnings {
            if let Some(location) = warning.location.take() {
                warning.location = Some(location.with_filename(input_name.clone()));
            }
        }

        self.reporter.writing(&paths.output);
        fs::write(&paths.output, &optimization.text)
            .map_err(|e| OrganizerError::write_failed(&paths.output, &e))?;

        self.reporter.summary(&optimization.summary);
        self.reporter.next_steps(paths);

        Ok(optimization)
    }
}
