//! Error types for the document and the transfer-list widget.

use crate::document::ElementKind;

/// Errors from document tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The node id does not refer to a live node.
    #[error("Invalid or removed node")]
    InvalidNode,
    /// The operation would make a node its own ancestor, or move the root.
    #[error("Operation would create a circular parent-child relationship")]
    CircularParentage,
    /// The reference node has no parent.
    #[error("Reference node is not attached to the document")]
    Detached,
    /// The node exists but is not the element kind the operation needs.
    #[error("Expected a {expected} element, found {found}")]
    WrongElementKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl DocumentError {
    pub(crate) fn wrong_kind(expected: &'static str, found: &ElementKind) -> Self {
        Self::WrongElementKind {
            expected,
            found: found.name(),
        }
    }
}

/// Result type for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Errors from constructing or configuring a transfer list.
#[derive(Debug, thiserror::Error)]
pub enum TransferListError {
    /// The source control does not allow multiple selection.
    #[error("Source select element must allow multiple selection")]
    NotMultiSelect,
    /// A document operation failed.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// A theme could not be loaded.
    #[error("Theme error: {0}")]
    Theme(#[from] transfer_list_style::Error),
}

/// Result type for transfer-list operations.
pub type Result<T> = std::result::Result<T, TransferListError>;
