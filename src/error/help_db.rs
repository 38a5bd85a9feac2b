//! Help text database for organizer errors
//!
//! Each error code can be looked up to get guidance on how to recover.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Help text entry for an error
#[derive(Debug, Clone)]
pub struct HelpEntry {
    /// Short title of the problem
    pub title: &'static str,
    /// Detailed explanation of the error
    pub explanation: &'static str,
    /// How to fix the issue
    pub fix: &'static str,
    /// Example showing the error and solution
    pub example: &'static str,
}

/// Get help text for an error code
pub fn get_help(error_code: &str) -> Option<&'static HelpEntry> {
    HELP_DATABASE.get(error_code).copied()
}

/// Help database mapping error codes to help entries
static HELP_DATABASE: LazyLock<HashMap<&'static str, &'static HelpEntry>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();

        // Input errors
        map.insert("FILE_NOT_FOUND", &HELP_FILE_NOT_FOUND);
        map.insert("IS_A_DIRECTORY", &HELP_IS_A_DIRECTORY);
        map.insert("READ_FAILED", &HELP_READ_FAILED);
        map.insert("INVALID_UTF8", &HELP_INVALID_UTF8);

        // Output errors
        map.insert("WRITE_FAILED", &HELP_WRITE_FAILED);

        // Structure warnings
        map.insert("UNCLOSED_BRACE", &HELP_UNCLOSED_BRACE);
        map.insert("FUNCTION_REDEFINED", &HELP_FUNCTION_REDEFINED);

        map
    });

// INPUT ERRORS

const HELP_FILE_NOT_FOUND: HelpEntry = HelpEntry {
    title: "Input script not found",
    explanation: "The organizer looks for build.func in the same directory as its own \
        executable. No file with that name exists there.",
    fix: "1. Place build.func next to the funcsort binary\n\
        2. Or copy the binary into the directory that holds build.func\n\
        3. Check the file name for typos (it is case-sensitive)",
    example: "$ ls misc/\n\
        funcsort\n\n\
        FIX: Put the script beside the binary:\n\
        $ cp build.func misc/ && misc/funcsort",
};

const HELP_IS_A_DIRECTORY: HelpEntry = HelpEntry {
    title: "Input path is a directory, not a file",
    explanation: "A directory named build.func sits where the input script was expected.",
    fix: "1. Rename or remove the build.func directory\n\
        2. Place the real script file at that path",
    example: "$ ls -ld build.func\n\
        drwxr-xr-x  2 user user 4096 build.func\n\n\
        FIX: Move the directory aside:\n\
        $ mv build.func build.func.d",
};

const HELP_READ_FAILED: HelpEntry = HelpEntry {
    title: "Input script could not be read",
    explanation: "The file exists but the operating system refused to return its contents, \
        usually because of missing read permission.",
    fix: "1. Check file permissions with 'ls -l build.func'\n\
        2. Add read permission with 'chmod +r build.func'",
    example: "$ chmod +r build.func",
};

const HELP_INVALID_UTF8: HelpEntry = HelpEntry {
    title: "Input script is not valid UTF-8",
    explanation: "The script contains bytes that do not form valid UTF-8 text. The backup \
        was written byte-for-byte, but the text could not be reorganized.",
    fix: "1. Find the offending bytes with 'grep -naxv \".*\" build.func'\n\
        2. Re-encode the file with 'iconv -f latin1 -t utf-8'",
    example: "$ iconv -f latin1 -t utf-8 build.func > build.func.utf8\n\
        $ mv build.func.utf8 build.func",
};

// OUTPUT ERRORS

const HELP_WRITE_FAILED: HelpEntry = HelpEntry {
    title: "Output file could not be written",
    explanation: "Writing the backup or the optimized script failed. The directory may be \
        read-only or the disk may be full.",
    fix: "1. Check directory permissions with 'ls -ld .'\n\
        2. Free some disk space with 'df -h' to locate full filesystems\n\
        3. The original build.func is never modified and is safe to retry",
    example: "$ chmod u+w . && ./funcsort",
};

// STRUCTURE WARNINGS

const HELP_UNCLOSED_BRACE: HelpEntry = HelpEntry {
    title: "Function body never closed",
    explanation: "Brace counting never returned to zero after this function header, so the \
        function was taken to extend to the end of the file. Braces inside strings, \
        comments or here-documents are counted too.",
    fix: "1. Look for an unbalanced '{' or '}' inside quotes or a here-document\n\
        2. Balance it in a comment (e.g. '# }') or move the literal into a variable\n\
        3. Review the .optimized file before promoting it",
    example: "broken() {\n\
        \x20 echo \"{\"\n\
        }\n\n\
        FIX: keep braces balanced on the line:\n\
        broken() {\n\
        \x20 echo \"{\" # }\n\
        }",
};

const HELP_FUNCTION_REDEFINED: HelpEntry = HelpEntry {
    title: "Function defined more than once",
    explanation: "Two top-level definitions share a name. The shell would run the last one, \
        so only the last body is written, at the position of the first definition.",
    fix: "1. Delete the stale definition from build.func\n\
        2. Or rename one of them if both are needed",
    example: "greet() { echo hi; }\n\
        greet() { echo hello; }   # this one is kept",
};
