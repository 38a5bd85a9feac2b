//! Built-in configuration for funcsort
//!
//! There is no configuration file. The file names and the backup timestamp
//! format are fixed here; the group table lives in [`crate::groups`].

use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};

/// Default input script name
pub const INPUT_NAME: &str = "build.func";

/// Fixed names used for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerConfig {
    /// Script to reorganize, relative to the run directory
    pub input_name: String,
    /// Appended to the input name for the reorganized output
    pub output_suffix: String,
    /// Placed between the input name and the backup timestamp
    pub backup_infix: String,
    /// chrono format string for the backup timestamp
    pub timestamp_format: String,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            input_name: INPUT_NAME.to_string(),
            output_suffix: ".optimized".to_string(),
            backup_infix: ".backup-".to_string(),
            timestamp_format: "%Y%m%d-%H%M%S".to_string(),
        }
    }
}

/// Resolved file locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub backup: PathBuf,
    pub output: PathBuf,
}

impl OrganizerConfig {
    /// Resolve input, backup and output paths inside `dir`
    pub fn paths_in(&self, dir: &Path, now: DateTime<Local>) -> RunPaths {
        let timestamp = now.format(&self.timestamp_format);
        RunPaths {
            input: dir.join(&self.input_name),
            backup: dir.join(format!("{}{}{}", self.input_name, self.backup_infix, timestamp)),
            output: dir.join(format!("{}{}", self.input_name, self.output_suffix)),
        }
    }
}

/// Directory holding the running executable
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}
