//! Label filtering.

use serde::Deserialize;

/// How a filter query is matched against item labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every whitespace-separated token must occur somewhere in the label.
    #[default]
    Contains,
    /// The whole query must be a prefix of the label.
    StartsWith,
}

/// Whether `label` passes `query`.
///
/// The query is trimmed and compared case-insensitively; an empty query
/// matches everything.
///
/// ```
/// use transfer_list::widget::{matches, FilterMode};
///
/// assert!(matches("Green Apple", "app gr", FilterMode::Contains));
/// assert!(!matches("Green Apple", "app gr", FilterMode::StartsWith));
/// ```
pub fn matches(label: &str, query: &str, mode: FilterMode) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let label = label.to_lowercase();
    match mode {
        FilterMode::StartsWith => label.starts_with(&query),
        FilterMode::Contains => query.split_whitespace().all(|token| label.contains(token)),
    }
}
