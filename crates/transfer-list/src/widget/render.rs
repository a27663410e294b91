//! Reconciling partitions into the visible list controls.

use std::collections::HashSet;

use transfer_list_core::PerfSpan;
use transfer_list_style::{Action, ClassList, StyledElement, ThemeRole};

use super::filter::matches;
use super::state::State;
use super::Pane;
use crate::document::{ElementKind, ListEntry};
use crate::error::DocumentResult;

impl State {
    /// Rebuild the list of `pane` from its partition and active filter.
    ///
    /// Entries that were selected before the rebuild and are still visible
    /// stay selected. Returns the number of visible entries.
    #[tracing::instrument(skip(self), target = "transfer_list::widget", level = "trace")]
    pub(crate) fn render_pane(&self, pane: Pane) -> DocumentResult<usize> {
        let query = self.filter(pane);
        let filtering = !query.trim().is_empty();
        let mode = self.config.filter_match_mode;
        let theme = &self.config.theme;
        let keys = self.partitions.keys(pane);
        let nodes = self.view.pane(pane);

        let visible = self.document.with_list_mut(nodes.list, |list| {
            let captured: HashSet<String> = list.selected_keys().into_iter().collect();
            list.clear();

            for key in keys {
                let Some(item) = self.registry.get(key.as_str()) else {
                    continue;
                };
                if filtering && !matches(&item.label, query, mode) {
                    continue;
                }

                let mut classes = ClassList::new();
                classes.add_role(theme, ThemeRole::ListEntry);
                classes.set_disabled_role(theme, item.disabled);
                list.push(ListEntry {
                    key: item.key.to_string(),
                    value: item.value.clone(),
                    label: item.label.clone(),
                    disabled: item.disabled,
                    selected: !item.disabled && captured.contains(item.key.as_str()),
                    title: item.title.clone(),
                    attributes: item.extra_attributes.clone(),
                    classes,
                });
            }
            list.len()
        })?;

        let total = keys.len();
        let counter = if filtering {
            format!("{visible}/{total}")
        } else {
            total.to_string()
        };
        self.document.set_text(nodes.counter, counter)?;
        tracing::trace!(target: "transfer_list::widget", pane = pane.name(), visible, total, "pane rendered");

        self.refresh_buttons()?;
        Ok(visible)
    }

    pub(crate) fn render_all(&self) -> DocumentResult<()> {
        let _span = PerfSpan::new("render_all");
        for pane in Pane::ALL {
            self.render_pane(pane)?;
        }
        Ok(())
    }

    /// Whether `pane`'s partition has an item a move-all would take.
    pub(crate) fn has_movable(&self, pane: Pane) -> bool {
        self.partitions
            .keys(pane)
            .iter()
            .any(|key| self.registry.get(key.as_str()).is_some_and(|item| !item.disabled))
    }

    fn pane_has_selection(&self, pane: Pane) -> DocumentResult<bool> {
        self.document
            .with_list(self.view.pane(pane).list, |list| list.has_selection())
    }

    /// Enable each action button exactly when its action would move something.
    pub(crate) fn refresh_buttons(&self) -> DocumentResult<()> {
        let theme = &self.config.theme;
        for action in Action::ALL {
            let enabled = match action {
                Action::AddAll => self.has_movable(Pane::Available),
                Action::AddSelected => self.pane_has_selection(Pane::Available)?,
                Action::RemoveSelected => self.pane_has_selection(Pane::Chosen)?,
                Action::RemoveAll => self.has_movable(Pane::Chosen),
            };

            self.document.with_node_mut(self.view.button(action), |node| {
                if let ElementKind::Button(button) = node.kind_mut() {
                    button.disabled = !enabled;
                }
                node.add_role(theme, ThemeRole::Button);
                node.add_role(theme, action.theme_role());
                node.set_disabled_role(theme, !enabled);
                node.set_attribute("aria-disabled", if enabled { "false" } else { "true" });
            })?;
        }
        Ok(())
    }
}
