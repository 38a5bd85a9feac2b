//! Structured error types for funcsort
//!
//! Every failure carries a stable error code, a human-readable message and the
//! process exit code the binary should terminate with.

pub mod help_db;

use std::io;
use std::path::Path;

/// Exit code used when the input script is absent
pub const EXIT_MISSING_INPUT: i32 = 1;
/// Exit code used for any other fatal fault (read, decode or write)
pub const EXIT_FAULT: i32 = 2;
/// Exit code carried by non-fatal warnings
pub const EXIT_WARNING: i32 = 0;

/// Source location information for errors
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Content of the line for error display
    pub line_content: Option<String>,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            line_content: None,
            filename: None,
        }
    }

    /// Add line content for display
    pub fn with_line_content(mut self, content: impl Into<String>) -> Self {
        self.line_content = Some(content.into());
        self
    }

    /// Add filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Structured error type for funcsort operations
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct OrganizerError {
    /// Error code category
    pub error_code: String,
    /// Human-readable error message
    pub message: String,
    /// Exit code for the process
    pub exit_code: i32,
    /// Source location where the problem was found
    pub location: Option<SourceLocation>,
}

impl OrganizerError {
    /// Create a new error with the given code, message, and exit code
    pub fn new(error_code: impl Into<String>, message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            exit_code,
            location: None,
        }
    }

    /// Add source location to the error
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Input file not found
    pub fn file_not_found(path: &Path) -> Self {
        Self::new(
            "FILE_NOT_FOUND",
            format!("{} not found!", path.display()),
            EXIT_MISSING_INPUT,
        )
    }

    /// Input path names a directory
    pub fn is_a_directory(path: &Path) -> Self {
        Self::new(
            "IS_A_DIRECTORY",
            format!("{}: Is a directory", path.display()),
            EXIT_MISSING_INPUT,
        )
    }

    /// Input could not be read
    pub fn read_failed(path: &Path, err: &io::Error) -> Self {
        Self::new(
            "READ_FAILED",
            format!("{}: {}", path.display(), err),
            EXIT_FAULT,
        )
    }

    /// Input is not valid UTF-8
    pub fn invalid_utf8(path: &Path, valid_up_to: usize) -> Self {
        Self::new(
            "INVALID_UTF8",
            format!(
                "{}: invalid UTF-8 after byte {}",
                path.display(),
                valid_up_to
            ),
            EXIT_FAULT,
        )
    }

    /// Backup or output could not be written
    pub fn write_failed(path: &Path, err: &io::Error) -> Self {
        Self::new(
            "WRITE_FAILED",
            format!("{}: {}", path.display(), err),
            EXIT_FAULT,
        )
    }

    /// A function body never returned to brace depth zero
    ///
    /// Reported as a warning: the record still extends to end of file.
    pub fn unclosed_brace(name: &str, line: usize, line_content: &str) -> Self {
        Self::new(
            "UNCLOSED_BRACE",
            format!(
                "function '{}' opened on line {} is never closed; its body runs to end of file",
                name, line
            ),
            EXIT_WARNING,
        )
        .with_location(SourceLocation::new(line, 1).with_line_content(line_content))
    }

    /// A function name was defined twice; the later body replaced the earlier one
    pub fn redefined(name: &str, first_line: usize, line: usize) -> Self {
        Self::new(
            "FUNCTION_REDEFINED",
            format!(
                "function '{}' defined on line {} is redefined on line {}; only the last definition is kept",
                name, first_line, line
            ),
            EXIT_WARNING,
        )
        .with_location(SourceLocation::new(line, 1))
    }

    /// Format error as human-readable text
    pub fn to_text(&self) -> String {
        let mut output = self.message.clone();
        if let Some(loc) = &self.location {
            if let Some(filename) = &loc.filename {
                output.push_str(&format!("\n  --> {}:{}:{}", filename, loc.line, loc.column));
            }
            if let Some(content) = &loc.line_content {
                output.push_str(&format!("\n  {} | {}", loc.line, content));
            }
        }
        output
    }

    /// Get help text for this error code, if available
    pub fn get_help(&self) -> Option<&'static help_db::HelpEntry> {
        help_db::get_help(&self.error_code)
    }

    /// Format error with help text appended
    pub fn with_help(&self) -> String {
        let mut output = self.to_text();
        if let Some(help) = self.get_help() {
            output.push_str("\n\n");
            output.push_str("Help: ");
            output.push_str(help.title);
            output.push('\n');
            output.push_str(help.explanation);
            output.push_str("\n\n");
            output.push_str(help.fix);
            output.push_str("\n\nExample:\n");
            output.push_str(help.example);
        }
        output
    }
}
