//! Tuition category extraction
//!
//! The provider schema has no category field on payments, so the category
//! rides in the description as a bracketed prefix: `"[Matrícula] Taxa"`.
//! This module is the single place that encodes and decodes that convention.

/// Category assigned when the description carries no bracketed prefix:
/// the standard monthly tuition charge.
pub const DEFAULT_CATEGORY: &str = "Mensalidade";

/// Extracts the category from a payment description.
///
/// A description of the form `"[categoria] rest"` yields `"categoria"`;
/// anything else yields [`DEFAULT_CATEGORY`]. Matching is on a leading
/// bracket pair only, case-sensitive, no trimming inside the brackets.
pub fn tuition_category(description: &str) -> &str {
    description
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .map(|(category, _)| category)
        .filter(|category| !category.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Encodes a category into a description so that [`tuition_category`]
/// recovers it. A `None` category leaves the description untouched.
pub fn encode_category(category: Option<&str>, description: &str) -> String {
    match category {
        Some(category) if !category.is_empty() => format!("[{category}] {description}"),
        _ => description.to_string(),
    }
}
