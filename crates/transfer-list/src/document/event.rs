//! Interaction events delivered through the document.
//!
//! Events are dispatched at a target node and bubble to every ancestor.
//! The target's native behaviour (list selection, input value, disabled
//! buttons swallowing clicks) is applied before any listener runs.

use super::NodeId;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// The keys the document and widget react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    Enter,
    Delete,
    Backspace,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
}

/// An interaction or notification event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// Pointer click. `row` is set when a list entry was hit.
    Click {
        target: NodeId,
        row: Option<usize>,
        modifiers: KeyboardModifiers,
    },
    /// Pointer double-click on a list entry.
    DoubleClick { target: NodeId, row: usize },
    /// Key press while `target` has focus.
    KeyPress {
        target: NodeId,
        key: Key,
        modifiers: KeyboardModifiers,
    },
    /// Text input changed to `value`.
    Input { target: NodeId, value: String },
    /// Value of a form control changed.
    Change { target: NodeId },
}

impl DocumentEvent {
    /// Plain click on a node.
    pub fn click(target: NodeId) -> Self {
        Self::Click {
            target,
            row: None,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Click on a list row.
    pub fn click_row(target: NodeId, row: usize, modifiers: KeyboardModifiers) -> Self {
        Self::Click {
            target,
            row: Some(row),
            modifiers,
        }
    }

    /// Key press without modifiers.
    pub fn key(target: NodeId, key: Key) -> Self {
        Self::KeyPress {
            target,
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Text input.
    pub fn input(target: NodeId, value: impl Into<String>) -> Self {
        Self::Input {
            target,
            value: value.into(),
        }
    }

    /// The node the event was dispatched at.
    pub fn target(&self) -> NodeId {
        match self {
            Self::Click { target, .. }
            | Self::DoubleClick { target, .. }
            | Self::KeyPress { target, .. }
            | Self::Input { target, .. }
            | Self::Change { target } => *target,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::DoubleClick { .. } => "dblclick",
            Self::KeyPress { .. } => "keypress",
            Self::Input { .. } => "input",
            Self::Change { .. } => "change",
        }
    }
}
