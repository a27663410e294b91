//! Element payloads stored in document nodes.

use std::collections::BTreeMap;

use transfer_list_style::ClassList;

use super::event::KeyboardModifiers;

/// One option of a native multi-select element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
    pub title: Option<String>,
    /// Custom attributes carried by the option (`data-*` style pass-through).
    pub attributes: BTreeMap<String, String>,
}

impl SelectOption {
    /// Create an enabled, unselected option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Builder: mark the option selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Builder: mark the option disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builder: set the tooltip.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: add a custom attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// A native list-selection control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectElement {
    multiple: bool,
    size: Option<usize>,
    options: Vec<SelectOption>,
}

impl SelectElement {
    /// A single-selection control.
    pub fn single(options: Vec<SelectOption>) -> Self {
        Self {
            multiple: false,
            size: None,
            options,
        }
    }

    /// A multi-selection control.
    pub fn multiple(options: Vec<SelectOption>) -> Self {
        Self {
            multiple: true,
            size: None,
            options,
        }
    }

    /// Builder: set the visible row count.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Whether more than one option can be selected.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Configured visible row count.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// All options in document order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Set the selected flag of the option at `index`.
    ///
    /// Returns `false` if there is no such option.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                option.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Values of all selected options in document order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }

    /// Number of selected options.
    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|o| o.selected).count()
    }
}

/// A rendered entry of a [`ListElement`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntry {
    /// Stable identity of the item this entry renders.
    pub key: String,
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
    pub title: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub classes: ClassList,
}

/// A visible multi-selection list control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListElement {
    entries: Vec<ListEntry>,
    rows: usize,
    anchor: Option<usize>,
}

impl ListElement {
    /// Create an empty list showing `rows` rows.
    pub fn new(rows: usize) -> Self {
        Self {
            entries: Vec::new(),
            rows,
            anchor: None,
        }
    }

    /// Visible row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Rendered entries in display order.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Number of rendered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.anchor = None;
    }

    /// Append an entry.
    pub fn push(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    /// Keys of the selected entries in display order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.key.clone())
            .collect()
    }

    /// Whether any entry is selected.
    pub fn has_selection(&self) -> bool {
        self.entries.iter().any(|e| e.selected)
    }

    /// Row of the entry with `key`.
    pub fn row_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Select or deselect the entry with `key`. Disabled entries cannot be selected.
    pub fn set_selected(&mut self, key: &str, selected: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) if !(selected && entry.disabled) => {
                entry.selected = selected;
                true
            }
            _ => false,
        }
    }

    /// Select every enabled entry.
    pub fn select_all(&mut self) {
        for entry in &mut self.entries {
            entry.selected = !entry.disabled;
        }
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        for entry in &mut self.entries {
            entry.selected = false;
        }
    }

    /// Apply a click on `row` the way a native multi-select does.
    ///
    /// Plain click selects only `row`, Ctrl toggles it, Shift selects the
    /// range from the last clicked row. Clicks on disabled entries are ignored.
    /// Returns `true` if the selection changed.
    pub fn click_row(&mut self, row: usize, modifiers: KeyboardModifiers) -> bool {
        let Some(entry) = self.entries.get(row) else {
            return false;
        };
        if entry.disabled {
            return false;
        }
        let before: Vec<bool> = self.entries.iter().map(|e| e.selected).collect();

        if modifiers.control {
            let entry = &mut self.entries[row];
            entry.selected = !entry.selected;
            self.anchor = Some(row);
        } else if modifiers.shift {
            let anchor = self.anchor.unwrap_or(row);
            let (start, end) = if anchor <= row {
                (anchor, row)
            } else {
                (row, anchor)
            };
            for (i, entry) in self.entries.iter_mut().enumerate() {
                entry.selected = !entry.disabled && (start..=end).contains(&i);
            }
        } else {
            for (i, entry) in self.entries.iter_mut().enumerate() {
                entry.selected = i == row;
            }
            self.anchor = Some(row);
        }

        self.entries.iter().map(|e| e.selected).ne(before)
    }
}

/// A single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub placeholder: String,
}

/// A push button. Disabled buttons swallow clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonElement {
    /// Opaque content markup (the icon).
    pub content: String,
    pub disabled: bool,
}

/// What a document node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Root of the document.
    Root,
    /// Generic grouping element.
    Container,
    /// Static text.
    Text(String),
    Select(SelectElement),
    List(ListElement),
    TextInput(TextInput),
    Button(ButtonElement),
    /// Invisible placeholder that remembers a position in the tree.
    Marker,
}

impl ElementKind {
    /// Short name used in errors and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Root => "root",
            ElementKind::Container => "container",
            ElementKind::Text(_) => "text",
            ElementKind::Select(_) => "select",
            ElementKind::List(_) => "list",
            ElementKind::TextInput(_) => "input",
            ElementKind::Button(_) => "button",
            ElementKind::Marker => "marker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, disabled: bool) -> ListEntry {
        ListEntry {
            key: key.to_string(),
            label: key.to_string(),
            disabled,
            ..Default::default()
        }
    }

    fn list() -> ListElement {
        let mut list = ListElement::new(5);
        list.push(entry("a", false));
        list.push(entry("b", true));
        list.push(entry("c", false));
        list.push(entry("d", false));
        list
    }

    #[test]
    fn test_plain_click_selects_one() {
        let mut list = list();
        assert!(list.click_row(0, KeyboardModifiers::NONE));
        assert!(list.click_row(2, KeyboardModifiers::NONE));
        assert_eq!(list.selected_keys(), vec!["c"]);
        assert!(!list.click_row(2, KeyboardModifiers::NONE));
    }

    #[test]
    fn test_ctrl_click_toggles() {
        let mut list = list();
        list.click_row(0, KeyboardModifiers::NONE);
        list.click_row(3, KeyboardModifiers::CTRL);
        assert_eq!(list.selected_keys(), vec!["a", "d"]);
        list.click_row(0, KeyboardModifiers::CTRL);
        assert_eq!(list.selected_keys(), vec!["d"]);
    }

    #[test]
    fn test_shift_click_skips_disabled() {
        let mut list = list();
        list.click_row(0, KeyboardModifiers::NONE);
        list.click_row(3, KeyboardModifiers::SHIFT);
        assert_eq!(list.selected_keys(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_disabled_entries_not_selectable() {
        let mut list = list();
        assert!(!list.click_row(1, KeyboardModifiers::NONE));
        assert!(!list.set_selected("b", true));
        list.select_all();
        assert_eq!(list.selected_keys(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_select_option_builder() {
        let option = SelectOption::new("v", "Label")
            .selected(true)
            .title("tip")
            .attribute("data-group", "x");
        assert!(option.selected);
        assert_eq!(option.title.as_deref(), Some("tip"));
        assert_eq!(option.attributes.get("data-group").map(String::as_str), Some("x"));

        let mut select = SelectElement::multiple(vec![option, SelectOption::new("w", "W")]);
        assert_eq!(select.selected_values(), vec!["v"]);
        assert!(select.set_selected(1, true));
        assert!(!select.set_selected(9, true));
        assert_eq!(select.selected_count(), 2);
    }
}
