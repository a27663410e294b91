//! Default presentation sheet and its one-time installation guard.
//!
//! The sheet targets the default class names from
//! [`ThemeRole::default_class`](crate::ThemeRole::default_class). It is
//! installed into a target at most once, however many widgets the target
//! hosts.

/// Identifier under which the default sheet is installed.
pub const DEFAULT_PRESENTATION_ID: &str = "transfer-list-default";

/// The default presentation sheet.
pub const DEFAULT_PRESENTATION: &str = "\
.transfer-list { display: flex; gap: 8px; align-items: stretch; }
.transfer-list__pane { display: flex; flex-direction: column; flex: 1 1 0; min-width: 0; }
.transfer-list__header { display: flex; justify-content: space-between; padding: 4px 0; }
.transfer-list__title { font-weight: 600; }
.transfer-list__counter { color: #666666; font-size: 12px; }
.transfer-list__filter { margin-bottom: 4px; padding: 4px 6px; }
.transfer-list__list { flex: 1 1 auto; width: 100%; }
.transfer-list__entry.is-disabled { color: #999999; }
.transfer-list__controls { display: flex; flex-direction: column; justify-content: center; gap: 4px; }
.transfer-list__button { min-width: 32px; padding: 4px 8px; cursor: pointer; }
.transfer-list__button.is-disabled { opacity: 0.5; cursor: default; }
";

/// Something that can hold installed presentation sheets.
pub trait PresentationTarget {
    /// Install `sheet` under `id` unless a sheet with that id is present.
    ///
    /// Returns `true` if the sheet was installed by this call.
    fn install_presentation(&self, id: &str, sheet: &str) -> bool;

    /// Whether a sheet with `id` is installed.
    fn has_presentation(&self, id: &str) -> bool;
}

/// Install the default sheet into `target` if it is not there yet.
///
/// Idempotent: returns `true` only for the call that installed it.
pub fn ensure_default_presentation<T: PresentationTarget + ?Sized>(target: &T) -> bool {
    let installed = target.install_presentation(DEFAULT_PRESENTATION_ID, DEFAULT_PRESENTATION);
    if installed {
        tracing::debug!(target: "transfer_list_style", id = DEFAULT_PRESENTATION_ID, "default presentation installed");
    }
    installed
}
