use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// First run of ASCII digits anywhere in the cell, as a positive rank.
/// Tolerates trend arrows and other decoration around the number.
pub fn extract_rank(cell: &str) -> Option<u32> {
    let digits = DIGIT_RUN.find(cell)?;
    digits.as_str().parse().ok().filter(|rank| *rank > 0)
}

/// A rank cell is acceptable when, without newlines, hyphens and spaces,
/// it is a non-empty run of digits.
pub fn is_rank_cell(cell: &str) -> bool {
    let stripped: String = cell
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\n' | '-' | ' '))
        .collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
