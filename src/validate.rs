//! Validation and normalization of user-typed fields.
//!
//! All functions here are pure; the session layer owns the re-prompt loop.

/// True iff the string is non-empty and entirely alphabetic.
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphabetic())
}

/// True iff the string is exactly 10 ASCII digits and the first is 6–9.
pub fn is_valid_phone(s: &str) -> bool {
    s.len() == 10
        && s.bytes().all(|b| b.is_ascii_digit())
        && matches!(s.as_bytes()[0], b'6'..=b'9')
}

/// First character uppercased, everything after it lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Split a comma-separated skills line into trimmed, capitalized entries.
/// Empty fragments (`"a,,b"`) are dropped.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect()
}
