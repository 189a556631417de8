//! Text normalization helpers shared by the extraction rules.

/// Flatten text into a single line: line breaks become spaces and whitespace
/// runs collapse to one space. Labels split across OCR lines ("대 표 자")
/// become matchable this way.
pub fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse internal whitespace runs to single spaces and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip parenthesis characters, e.g. the "(주)" corporation marker.
pub fn strip_parentheses(s: &str) -> String {
    s.chars().filter(|c| *c != '(' && *c != ')').collect()
}

/// Iterate trimmed, non-empty lines with line endings normalized.
pub fn clean_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
