use similar::{ChangeTag, TextDiff};

const CONTEXT_LINES: usize = 3;

/// Unified diff between the original and rewritten file, with both headers naming `path`.
pub fn unified_diff(old: &str, new: &str, path: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(path, path)
        .to_string()
}

/// Number of lines present in `new` but not in `old`.
pub fn changed_line_count(old: &str, new: &str) -> usize {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Insert)
        .count()
}
