//! Theme class maps.
//!
//! A theme is an opaque mapping from [`ThemeRole`] to a class-name string.
//! Roles missing from a user theme fall back to [`ThemeRole::default_class`].

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Every presentational role the widget assigns a class to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    /// Outer container of the composite view.
    Container,
    /// One of the two panes.
    Pane,
    /// Header row above a pane's list (title and counter).
    PaneHeader,
    /// Pane title text.
    PaneTitle,
    /// Visible/total counter.
    Counter,
    /// Filter text input.
    FilterInput,
    /// The list control of a pane.
    List,
    /// A rendered entry in a pane list.
    ListEntry,
    /// Column holding the action buttons.
    Controls,
    /// Shared class of every action button.
    Button,
    /// "Add all" button.
    AddAll,
    /// "Add selected" button.
    AddSelected,
    /// "Remove selected" button.
    RemoveSelected,
    /// "Remove all" button.
    RemoveAll,
    /// Applied to any disabled control or entry.
    Disabled,
}

impl ThemeRole {
    /// All roles, in declaration order.
    pub const ALL: [ThemeRole; 15] = [
        ThemeRole::Container,
        ThemeRole::Pane,
        ThemeRole::PaneHeader,
        ThemeRole::PaneTitle,
        ThemeRole::Counter,
        ThemeRole::FilterInput,
        ThemeRole::List,
        ThemeRole::ListEntry,
        ThemeRole::Controls,
        ThemeRole::Button,
        ThemeRole::AddAll,
        ThemeRole::AddSelected,
        ThemeRole::RemoveSelected,
        ThemeRole::RemoveAll,
        ThemeRole::Disabled,
    ];

    /// Key used for this role in theme files.
    pub fn key(self) -> &'static str {
        match self {
            ThemeRole::Container => "container",
            ThemeRole::Pane => "pane",
            ThemeRole::PaneHeader => "pane_header",
            ThemeRole::PaneTitle => "pane_title",
            ThemeRole::Counter => "counter",
            ThemeRole::FilterInput => "filter_input",
            ThemeRole::List => "list",
            ThemeRole::ListEntry => "list_entry",
            ThemeRole::Controls => "controls",
            ThemeRole::Button => "button",
            ThemeRole::AddAll => "add_all",
            ThemeRole::AddSelected => "add_selected",
            ThemeRole::RemoveSelected => "remove_selected",
            ThemeRole::RemoveAll => "remove_all",
            ThemeRole::Disabled => "disabled",
        }
    }

    /// Look up a role by its theme-file key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    /// Class used when a theme does not override this role.
    pub fn default_class(self) -> &'static str {
        match self {
            ThemeRole::Container => "transfer-list",
            ThemeRole::Pane => "transfer-list__pane",
            ThemeRole::PaneHeader => "transfer-list__header",
            ThemeRole::PaneTitle => "transfer-list__title",
            ThemeRole::Counter => "transfer-list__counter",
            ThemeRole::FilterInput => "transfer-list__filter",
            ThemeRole::List => "transfer-list__list",
            ThemeRole::ListEntry => "transfer-list__entry",
            ThemeRole::Controls => "transfer-list__controls",
            ThemeRole::Button => "transfer-list__button",
            ThemeRole::AddAll => "transfer-list__button--add-all",
            ThemeRole::AddSelected => "transfer-list__button--add-selected",
            ThemeRole::RemoveSelected => "transfer-list__button--remove-selected",
            ThemeRole::RemoveAll => "transfer-list__button--remove-all",
            ThemeRole::Disabled => "is-disabled",
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The four move actions offered by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move every eligible available item to chosen.
    AddAll,
    /// Move the selected available entries to chosen.
    AddSelected,
    /// Move the selected chosen entries back to available.
    RemoveSelected,
    /// Move every eligible chosen item back to available.
    RemoveAll,
}

impl Action {
    /// All actions in on-screen order.
    pub const ALL: [Action; 4] = [
        Action::AddAll,
        Action::AddSelected,
        Action::RemoveSelected,
        Action::RemoveAll,
    ];

    /// The role-specific theme class for this action's button.
    pub fn theme_role(self) -> ThemeRole {
        match self {
            Action::AddAll => ThemeRole::AddAll,
            Action::AddSelected => ThemeRole::AddSelected,
            Action::RemoveSelected => ThemeRole::RemoveSelected,
            Action::RemoveAll => ThemeRole::RemoveAll,
        }
    }
}

/// A role -> class mapping with default fallback.
///
/// Deserializes from a flat string map. Unknown keys are ignored with a
/// warning so that themes written for newer versions still load.
///
/// ```
/// use transfer_list_style::{ThemeClasses, ThemeRole};
///
/// let theme = ThemeClasses::default().with_class(ThemeRole::Button, "btn btn-sm");
/// assert_eq!(theme.class(ThemeRole::Button), "btn btn-sm");
/// assert_eq!(theme.class(ThemeRole::List), "transfer-list__list");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct ThemeClasses {
    overrides: HashMap<ThemeRole, String>,
}

impl ThemeClasses {
    /// Create a theme with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the class for `role`.
    pub fn with_class(mut self, role: ThemeRole, class: impl Into<String>) -> Self {
        self.set_class(role, class);
        self
    }

    /// Override the class for `role` in place.
    pub fn set_class(&mut self, role: ThemeRole, class: impl Into<String>) {
        self.overrides.insert(role, class.into());
    }

    /// The class for `role`, falling back to the default.
    pub fn class(&self, role: ThemeRole) -> &str {
        self.overrides
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.default_class())
    }

    /// The class string split into individual class names.
    pub fn classes(&self, role: ThemeRole) -> impl Iterator<Item = &str> {
        self.class(role).split_whitespace()
    }

    /// Whether `role` has an explicit override.
    pub fn is_overridden(&self, role: ThemeRole) -> bool {
        self.overrides.contains_key(&role)
    }

    /// Layer `other`'s overrides on top of this theme.
    pub fn merge(&mut self, other: &ThemeClasses) {
        for (role, class) in &other.overrides {
            self.overrides.insert(*role, class.clone());
        }
    }
}

impl From<HashMap<String, String>> for ThemeClasses {
    fn from(map: HashMap<String, String>) -> Self {
        let mut theme = ThemeClasses::new();
        for (key, class) in map {
            match ThemeRole::from_key(&key) {
                Some(role) => theme.set_class(role, class),
                None => {
                    tracing::warn!(target: "transfer_list_style", key = %key, "unknown theme role ignored");
                }
            }
        }
        theme
    }
}
