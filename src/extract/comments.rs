//! Leading comment blocks attached to function definitions

/// Lines that are never attached to a function even when they are comments.
/// Scanning continues past them.
fn is_boilerplate(trimmed: &str) -> bool {
    trimmed.starts_with("# ===")
        || trimmed.starts_with("#!/usr/bin/env")
        || ["Copyright", "Author:", "License:", "Revision:", "SECTION"]
            .iter()
            .any(|marker| trimmed.contains(marker))
}

/// Collect the comment block directly above `name`'s definition
///
/// The definition is located by a plain `name()` prefix match on each line,
/// trying occurrences in file order until one yields a non-empty block.
/// Returns the block with a trailing newline, or an empty string.
pub fn leading_comments(lines: &[&str], name: &str) -> String {
    let signature = format!("{}()", name);

    for (i, line) in lines.iter().enumerate() {
        if !line.trim().starts_with(&signature) {
            continue;
        }

        let block = collect_above(lines, i);
        if !block.is_empty() {
            return block.join("\n") + "\n";
        }
    }

    String::new()
}

fn collect_above<'a>(lines: &[&'a str], definition: usize) -> Vec<&'a str> {
    let mut comments = Vec::new();

    for &prev in lines[..definition].iter().rev() {
        let trimmed = prev.trim();
        if is_boilerplate(trimmed) {
            continue;
        }
        if trimmed.starts_with('#') || trimmed.is_empty() {
            comments.push(prev);
        } else {
            break;
        }
    }
    comments.reverse();

    let first = comments.iter().position(|l| !l.trim().is_empty());
    let last = comments.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => comments[first..=last].to_vec(),
        _ => Vec::new(),
    }
}
