//! Widget configuration.
//!
//! Every field has a default, so partial TOML or JSON documents deserialize:
//!
//! ```
//! use transfer_list::widget::{FilterMode, TransferListConfig};
//!
//! let config = TransferListConfig::from_toml_str(r#"
//!     filter_match_mode = "starts_with"
//!     preserve_selection_order = true
//!
//!     [text]
//!     available_title = "Colors"
//! "#).unwrap();
//! assert_eq!(config.filter_match_mode, FilterMode::StartsWith);
//! assert_eq!(config.text.available_title, "Colors");
//! assert_eq!(config.text.chosen_title, "Chosen");
//! ```

use std::time::Duration;

use serde::Deserialize;
use transfer_list_style::{Action, IconSet, ThemeClasses};

use super::filter::FilterMode;
use super::Pane;
use crate::error::Result;

const MIN_DEFAULT_ROWS: usize = 4;
const MAX_DEFAULT_ROWS: usize = 12;

/// User-visible strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextOverrides {
    pub available_title: String,
    pub chosen_title: String,
    pub filter_placeholder: String,
    pub add_all: String,
    pub add_selected: String,
    pub remove_selected: String,
    pub remove_all: String,
}

impl Default for TextOverrides {
    fn default() -> Self {
        Self {
            available_title: "Available".to_string(),
            chosen_title: "Chosen".to_string(),
            filter_placeholder: "Filter".to_string(),
            add_all: "Add all".to_string(),
            add_selected: "Add selected".to_string(),
            remove_selected: "Remove selected".to_string(),
            remove_all: "Remove all".to_string(),
        }
    }
}

impl TextOverrides {
    /// Title of `pane`.
    pub fn pane_title(&self, pane: Pane) -> &str {
        match pane {
            Pane::Available => &self.available_title,
            Pane::Chosen => &self.chosen_title,
        }
    }

    /// Accessible label of the button for `action`.
    pub fn action_label(&self, action: Action) -> &str {
        match action {
            Action::AddAll => &self.add_all,
            Action::AddSelected => &self.add_selected,
            Action::RemoveSelected => &self.remove_selected,
            Action::RemoveAll => &self.remove_all,
        }
    }
}

/// Options for [`TransferList`](super::TransferList).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransferListConfig {
    /// Show a filter input above each pane.
    pub show_filter: bool,
    pub filter_match_mode: FilterMode,
    /// Visible rows per pane. `None` derives it from the source.
    pub size: Option<usize>,
    /// Keep chosen items in the order they were moved instead of source order.
    pub preserve_selection_order: bool,
    pub text: TextOverrides,
    pub theme: ThemeClasses,
    pub icons: IconSet,
    /// Delay between the last filter keystroke and the pane re-render.
    pub filter_debounce_ms: u64,
}

impl Default for TransferListConfig {
    fn default() -> Self {
        Self {
            show_filter: true,
            filter_match_mode: FilterMode::Contains,
            size: None,
            preserve_selection_order: false,
            text: TextOverrides::default(),
            theme: ThemeClasses::default(),
            icons: IconSet::default(),
            filter_debounce_ms: 120,
        }
    }
}

impl TransferListConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_show_filter(mut self, show: bool) -> Self {
        self.show_filter = show;
        self
    }

    pub fn with_filter_match_mode(mut self, mode: FilterMode) -> Self {
        self.filter_match_mode = mode;
        self
    }

    pub fn with_size(mut self, rows: usize) -> Self {
        self.size = Some(rows);
        self
    }

    pub fn with_preserve_selection_order(mut self, preserve: bool) -> Self {
        self.preserve_selection_order = preserve;
        self
    }

    pub fn with_text(mut self, text: TextOverrides) -> Self {
        self.text = text;
        self
    }

    pub fn with_theme(mut self, theme: ThemeClasses) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_filter_debounce(mut self, delay: Duration) -> Self {
        self.filter_debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Filter debounce delay.
    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    /// Visible rows: configured size, else the source's size, else the
    /// option count clamped to a sensible range.
    pub fn resolve_rows(&self, source_size: Option<usize>, option_count: usize) -> usize {
        self.size
            .or(source_size)
            .unwrap_or_else(|| option_count.clamp(MIN_DEFAULT_ROWS, MAX_DEFAULT_ROWS))
    }
}
