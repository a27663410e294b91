//! Moving keys between partitions.

use super::registry::ItemKey;
use super::state::State;
use super::sync::PendingChange;
use super::Pane;
use crate::error::DocumentResult;

impl State {
    /// Move `keys` from `from` to `to`, then sync and re-render.
    ///
    /// Keys that are not in `from` are ignored. When nothing moves the call
    /// is a no-op and no notification is produced.
    #[tracing::instrument(skip(self, keys), target = "transfer_list::widget", level = "trace", fields(requested = keys.len()))]
    pub(crate) fn transfer(
        &mut self,
        keys: &[ItemKey],
        from: Pane,
        to: Pane,
    ) -> DocumentResult<Option<PendingChange>> {
        if keys.is_empty() || from == to {
            return Ok(None);
        }
        let moved = self.partitions.move_keys(keys, from, to);
        if moved.is_empty() {
            tracing::trace!(target: "transfer_list::widget", "nothing to transfer");
            return Ok(None);
        }

        // With preserved order the chosen pane keeps its transfer history,
        // whichever way items moved.
        for pane in [from, to] {
            if !(self.config.preserve_selection_order && pane == Pane::Chosen) {
                self.partitions.sort_by_index(pane, &self.registry);
            }
        }
        debug_assert!(self.partitions.is_consistent_with(&self.registry));

        self.sync_to_source()?;
        self.render_pane(from)?;
        self.render_pane(to)?;

        tracing::debug!(
            target: "transfer_list::widget",
            moved = moved.len(),
            from = from.name(),
            to = to.name(),
            "items transferred"
        );
        Ok(Some(self.pending_change(moved.len())))
    }

    /// Visibly selected, enabled entries of `pane`.
    pub(crate) fn selected_keys(&self, pane: Pane) -> DocumentResult<Vec<ItemKey>> {
        let selected = self
            .document
            .with_list(self.view.pane(pane).list, |list| list.selected_keys())?;
        Ok(selected
            .iter()
            .filter_map(|key| self.registry.get(key))
            .filter(|item| !item.disabled)
            .map(|item| item.key.clone())
            .collect())
    }

    /// Enabled keys of `pane`'s partition, ignoring the filter.
    pub(crate) fn movable_keys(&self, pane: Pane) -> Vec<ItemKey> {
        self.partitions
            .keys(pane)
            .iter()
            .filter(|key| self.registry.get(key.as_str()).is_some_and(|item| !item.disabled))
            .cloned()
            .collect()
    }

    pub(crate) fn move_selected(&mut self, from: Pane) -> DocumentResult<Option<PendingChange>> {
        let keys = self.selected_keys(from)?;
        self.transfer(&keys, from, from.other())
    }

    pub(crate) fn move_all(&mut self, from: Pane) -> DocumentResult<Option<PendingChange>> {
        let keys = self.movable_keys(from);
        self.transfer(&keys, from, from.other())
    }
}
