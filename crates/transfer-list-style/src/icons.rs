//! Opaque icon markup per action.

use serde::Deserialize;

use crate::theme::Action;

/// Icon markup for the four action buttons.
///
/// The widget never inspects the markup; it is placed into the button as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub add_all: String,
    pub add_selected: String,
    pub remove_selected: String,
    pub remove_all: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            add_all: "\u{00bb}".to_string(),
            add_selected: "\u{203a}".to_string(),
            remove_selected: "\u{2039}".to_string(),
            remove_all: "\u{00ab}".to_string(),
        }
    }
}

impl IconSet {
    /// Markup for `action`.
    pub fn icon(&self, action: Action) -> &str {
        match action {
            Action::AddAll => &self.add_all,
            Action::AddSelected => &self.add_selected,
            Action::RemoveSelected => &self.remove_selected,
            Action::RemoveAll => &self.remove_all,
        }
    }
}
