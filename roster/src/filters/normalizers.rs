//! Normalisation applied to search input before it reaches a predicate.

/// Splits a search value into whitespace-delimited keywords.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Canonical form of a student id used for exact matching: trimmed, internal spaces removed,
/// upper-cased.
pub fn normalize_student_id(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != ' ').collect::<String>().to_uppercase()
}

/// Lower-cases every keyword for case-insensitive matching.
pub fn lowercase_keywords(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|keyword| keyword.to_lowercase()).collect()
}
