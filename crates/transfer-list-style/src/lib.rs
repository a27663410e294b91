//! Styling for Transfer List.
//!
//! Themes are opaque role -> class-name maps:
//!
//! - **Theme roles**: [`ThemeRole`] enumerates every styled part of the widget
//! - **Actions**: [`Action`] maps each move button to its role at compile time
//! - **Theme files**: [`ThemeLoader`] reads TOML class maps with default fallback
//! - **Presentation**: [`ensure_default_presentation`] installs the default
//!   sheet once per target
//!
//! # Example
//!
//! ```
//! use transfer_list_style::prelude::*;
//!
//! let theme = ThemeClasses::default().with_class(ThemeRole::Button, "btn");
//! let mut classes = ClassList::new();
//! classes.add_role(&theme, ThemeRole::Button);
//! classes.add_role(&theme, Action::AddAll.theme_role());
//! assert_eq!(classes.joined(), "btn transfer-list__button--add-all");
//! ```

mod error;
pub mod icons;
pub mod loader;
pub mod presentation;
pub mod theme;
pub mod widget;

pub use error::{Error, Result};
pub use icons::IconSet;
pub use loader::ThemeLoader;
pub use presentation::{
    DEFAULT_PRESENTATION, DEFAULT_PRESENTATION_ID, PresentationTarget, ensure_default_presentation,
};
pub use theme::{Action, ThemeClasses, ThemeRole};
pub use widget::{ClassList, StyledElement};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::icons::IconSet;
    pub use crate::loader::ThemeLoader;
    pub use crate::presentation::{PresentationTarget, ensure_default_presentation};
    pub use crate::theme::{Action, ThemeClasses, ThemeRole};
    pub use crate::widget::{ClassList, StyledElement};
}
