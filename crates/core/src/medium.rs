//! Medium labels and the content-type registry (PRD-34).
//!
//! Mediums arrive from the UI and the strategy service in inconsistent
//! casing ("blog post", "Blog Post", "BLOG POST"). The registry resolves a
//! medium to the backend content-type id used by the final-generation
//! request, and [`title_case`] normalizes the label shown on results.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Known mediums and their backend content-type ids.
pub const CONTENT_TYPES: &[(&str, i64)] = &[
    ("blog post", 1),
    ("social post", 2),
    ("tweet", 3),
    ("newsletter", 4),
    ("press release", 5),
];

/// Resolve a medium label to its backend content-type id.
///
/// Matching is case-insensitive and whitespace-trimmed. An unknown medium
/// is a validation error at final-generation time.
pub fn content_type_id(medium: &str) -> Result<i64, CoreError> {
    let needle = medium.trim().to_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, id)| *id)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown content type '{medium}'. Must be one of: {}",
                CONTENT_TYPES
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a medium label to Title Case ("blog post" -> "Blog Post").
///
/// Uppercases the first alphabetic character of each whitespace-separated
/// word and lowercases the rest. Interior whitespace collapses to single
/// spaces.
pub fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
