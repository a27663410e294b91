//! Prelude module for Transfer List.
//!
//! ```
//! use transfer_list::prelude::*;
//! ```

// ============================================================================
// Host document
// ============================================================================

pub use crate::document::{
    Document, DocumentEvent, ElementKind, Key, KeyboardModifiers, NodeId, SelectElement,
    SelectOption,
};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{FilterMode, ItemKey, Pane, TextOverrides, TransferList, TransferListConfig};
pub use crate::{Result, TransferListError};

// ============================================================================
// Styling
// ============================================================================

pub use transfer_list_style::{Action, IconSet, ThemeClasses, ThemeLoader, ThemeRole};
