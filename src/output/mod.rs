// Console progress and summary output
// Human-readable only; nothing here is meant to be parsed.

use crate::assemble::Section;
use crate::config::RunPaths;
use crate::dedup::DuplicateSet;
use crate::error::OrganizerError;
use nu_ansi_term::Color;
use std::path::Path;

const BANNER_WIDTH: usize = 80;

/// Counts printed at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub original_lines: usize,
    pub optimized_lines: usize,
    /// Functions written to the output
    pub functions: usize,
    pub duplicates_removed: usize,
    /// Functions that matched no group
    pub uncategorized: Vec<String>,
}

impl RunSummary {
    /// Original minus optimized line count
    pub fn line_difference(&self) -> i64 {
        self.original_lines as i64 - self.optimized_lines as i64
    }
}

/// Format a count with `,` thousands separators
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a difference with an explicit sign and thousands separators
pub fn signed_thousands(n: i64) -> String {
    let sign = if n < 0 { '-' } else { '+' };
    format!("{}{}", sign, group_thousands(n.unsigned_abs()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Writes progress lines to stdout and errors to stderr
pub struct Reporter {
    enabled: bool,
    use_colors: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        // Detect if we're in a TTY for color support
        let use_colors = atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err();
        Self {
            enabled: true,
            use_colors,
        }
    }

    /// A reporter that prints nothing
    pub fn silent() -> Self {
        Self {
            enabled: false,
            use_colors: false,
        }
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.use_colors {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            Color::White.bold().paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&self, text: &str) {
        if self.enabled {
            println!("{}", text);
        }
    }

    fn rule(&self) {
        self.line(&"=".repeat(BANNER_WIDTH));
    }

    pub fn start(&self) {
        self.rule();
        self.line(&self.bold("BUILD.FUNC OPTIMIZER"));
        self.rule();
        self.line("");
    }

    pub fn backup(&self, backup: &Path) {
        self.line(&format!("Creating backup: {}", file_name(backup)));
        self.line("");
    }

    pub fn reading(&self, input: &Path, lines: usize) {
        self.line(&format!("Reading: {}", input.display()));
        self.line(&format!("   Lines: {}", group_thousands(lines as u64)));
        self.line("");
    }

    pub fn extracted(&self, count: usize) {
        self.line("Extracting functions...");
        self.line(&format!("   Found {} functions", count));
        self.line("");
    }

    pub fn duplicates(&self, duplicates: &DuplicateSet) {
        self.line("Checking for duplicates...");
        for dup in duplicates.iter() {
            self.line(&format!(
                "  {}  Duplicate found: {} (also defined as {})",
                self.paint(Color::Yellow, "⚠"),
                dup.name,
                dup.original
            ));
        }
        if duplicates.is_empty() {
            self.line(&format!("   {} No duplicates found", self.paint(Color::Green, "✓")));
        } else {
            self.line(&format!("   Found {} duplicate(s)", duplicates.len()));
        }
        self.line("");
    }

    pub fn header(&self, lines: usize) {
        self.line("Extracting file header...");
        self.line(&format!("   Header lines: {}", lines));
        self.line("");
    }

    pub fn building(&self) {
        self.line("Building optimized structure...");
    }

    /// Function count per emitted group section
    pub fn sections(&self, sections: &[Section]) {
        for section in sections {
            self.line(&format!("   {}: {}", section.title, section.functions.len()));
        }
    }

    pub fn uncategorized(&self, names: &[String]) {
        if names.is_empty() {
            return;
        }
        self.line(&format!(
            "   {}  {} uncategorized functions:",
            self.paint(Color::Yellow, "⚠"),
            names.len()
        ));
        for name in names {
            self.line(&format!("      - {}", name));
        }
    }

    pub fn remaining_code(&self) {
        self.line("Adding remaining code...");
    }

    /// Non-fatal problem found in the input
    pub fn warning(&self, warning: &OrganizerError) {
        self.line(&format!(
            "   {}  {}",
            self.paint(Color::Yellow, "⚠"),
            warning.to_text()
        ));
    }

    pub fn writing(&self, output: &Path) {
        self.line("");
        self.line(&format!("Writing optimized file: {}", output.display()));
        self.line("");
    }

    pub fn summary(&self, summary: &RunSummary) {
        self.rule();
        self.line(&self.paint(Color::Green, "✓ OPTIMIZATION COMPLETE"));
        self.rule();
        self.line(&format!(
            "Original lines:  {}",
            group_thousands(summary.original_lines as u64)
        ));
        self.line(&format!(
            "Optimized lines: {}",
            group_thousands(summary.optimized_lines as u64)
        ));
        self.line(&format!(
            "Difference:      {}",
            signed_thousands(summary.line_difference())
        ));
        self.line(&format!("Functions:       {}", summary.functions));
        self.line(&format!("Duplicates removed: {}", summary.duplicates_removed));
        self.line("");
    }

    pub fn next_steps(&self, paths: &RunPaths) {
        let output = file_name(&paths.output);
        let input = file_name(&paths.input);
        self.line("Next steps:");
        self.line(&format!("   1. Review: {}", output));
        self.line("   2. Test the optimized version");
        self.line(&format!("   3. If OK: mv {} {}", output, input));
        self.line(&format!("   4. Backup available at: {}", file_name(&paths.backup)));
        self.line("");
    }

    /// Fatal error, with help text, on stderr
    pub fn error(&self, err: &OrganizerError) {
        if self.enabled {
            eprintln!("{} {}", self.paint(Color::Red, "✗ Error:"), err.with_help());
        }
    }
}
