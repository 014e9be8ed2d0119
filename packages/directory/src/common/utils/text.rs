//! Text normalization applied to free-text fields before validation and
//! storage.

/// Trim leading/trailing whitespace and collapse internal whitespace runs
/// to a single space. Idempotent.
pub fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional field, mapping whitespace-only input to `None`.
pub fn normalize_optional(input: Option<&str>) -> Option<String> {
    match input {
        Some(s) => {
            let normalized = normalize_text(s);
            if normalized.is_empty() {
                None
            } else {
                Some(normalized)
            }
        }
        None => None,
    }
}

/// True when a value is empty or whitespace-only.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
