//! Transfer List: a two-pane "available / chosen" widget over a multi-select.
//!
//! This is the main crate. It hosts the widget in a small retained element
//! tree and re-exports the core and style crates.
//!
//! - [`document`]: the host [`Document`](document::Document) with elements,
//!   bubbling events and timers
//! - [`widget`]: [`TransferList`](widget::TransferList) and its model
//! - [`style`]: themes, icons and the default presentation
//!
//! # Example
//!
//! ```
//! use transfer_list::prelude::*;
//!
//! let doc = Document::new();
//! let select = doc.create_element(ElementKind::Select(SelectElement::multiple(vec![
//!     SelectOption::new("de", "Germany"),
//!     SelectOption::new("fr", "France").selected(true),
//!     SelectOption::new("it", "Italy"),
//! ])));
//! doc.append_child(doc.root(), select).unwrap();
//!
//! let config = TransferListConfig::default().with_preserve_selection_order(true);
//! let widget = TransferList::new(&doc, select, config).unwrap();
//! widget.move_keys_by_value(&["it"], Pane::Chosen).unwrap();
//! assert_eq!(widget.chosen_values(), vec!["fr", "it"]);
//!
//! widget.destroy();
//! assert!(!doc.is_hidden(select).unwrap());
//! ```

pub mod document;
mod error;
pub mod prelude;
pub mod widget;

pub use error::{DocumentError, DocumentResult, Result, TransferListError};
pub use transfer_list_core::*;

/// Styling: themes, icons and presentation sheets.
pub mod style {
    pub use transfer_list_style::*;
}
