//! Element styling integration.
//!
//! Elements carry an ordered [`ClassList`]; themed roles are applied to it
//! through [`StyledElement`].

use crate::theme::{ThemeClasses, ThemeRole};

/// An ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All classes in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }

    /// Add a class; returns `false` if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if class.is_empty() || self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class; returns `true` if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The list joined with single spaces.
    pub fn joined(&self) -> String {
        self.classes.join(" ")
    }
}

/// Trait for elements that support class-based styling.
pub trait StyledElement {
    /// The element's classes.
    fn class_list(&self) -> &ClassList;

    /// Mutable access to the element's classes.
    fn class_list_mut(&mut self) -> &mut ClassList;

    /// Check if the element has a specific class.
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    /// Add every class of `role` from `theme`.
    fn add_role(&mut self, theme: &ThemeClasses, role: ThemeRole) {
        for class in theme.classes(role) {
            self.class_list_mut().add(class);
        }
    }

    /// Remove every class of `role` from `theme`.
    fn remove_role(&mut self, theme: &ThemeClasses, role: ThemeRole) {
        for class in theme.classes(role) {
            self.class_list_mut().remove(class);
        }
    }

    /// Whether every class of `role` is present.
    fn has_role(&self, theme: &ThemeClasses, role: ThemeRole) -> bool {
        theme.classes(role).all(|class| self.has_class(class))
    }

    /// Add or remove the [`ThemeRole::Disabled`] classes.
    fn set_disabled_role(&mut self, theme: &ThemeClasses, disabled: bool) {
        if disabled {
            self.add_role(theme, ThemeRole::Disabled);
        } else {
            self.remove_role(theme, ThemeRole::Disabled);
        }
    }
}

impl StyledElement for ClassList {
    fn class_list(&self) -> &ClassList {
        self
    }

    fn class_list_mut(&mut self) -> &mut ClassList {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_is_a_set() {
        let mut list = ClassList::new();
        assert!(list.add("a"));
        assert!(!list.add("a"));
        assert!(!list.add(""));
        assert!(list.add("b"));
        assert_eq!(list.joined(), "a b");
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
    }

    #[test]
    fn test_disabled_role_toggles() {
        let theme = ThemeClasses::new().with_class(ThemeRole::Disabled, "off muted");
        let mut list = ClassList::new();
        list.add_role(&theme, ThemeRole::AddAll);

        list.set_disabled_role(&theme, true);
        assert!(list.has_role(&theme, ThemeRole::Disabled));
        assert!(list.has_class("muted"));

        list.set_disabled_role(&theme, false);
        assert!(!list.has_class("off"));
        assert!(list.has_role(&theme, ThemeRole::AddAll));
    }
}
