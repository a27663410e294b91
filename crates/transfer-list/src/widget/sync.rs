//! Mirroring the chosen partition onto the source select.

use std::collections::HashSet;

use super::state::State;
use super::Pane;
use crate::document::{Document, DocumentEvent, NodeId};
use crate::error::DocumentResult;

impl State {
    /// Overwrite every source option's selected flag with chosen membership.
    ///
    /// Returns how many flags actually changed.
    pub(crate) fn sync_to_source(&self) -> DocumentResult<usize> {
        let chosen: HashSet<&str> = self
            .partitions
            .keys(Pane::Chosen)
            .iter()
            .map(|key| key.as_str())
            .collect();

        let changed = self.document.with_select_mut(self.placement.source, |select| {
            let mut changed = 0;
            for item in self.registry.iter() {
                let selected = chosen.contains(item.key.as_str());
                let was = select
                    .options()
                    .get(item.original_index)
                    .is_some_and(|option| option.selected);
                if select.set_selected(item.original_index, selected) && was != selected {
                    changed += 1;
                }
            }
            changed
        })?;

        tracing::trace!(target: "transfer_list::widget", changed, "source synced");
        Ok(changed)
    }

    pub(crate) fn pending_change(&self, moved: usize) -> PendingChange {
        PendingChange {
            document: self.document.clone(),
            source: self.placement.source,
            moved,
        }
    }
}

/// A change notification to dispatch once the widget state is unlocked.
#[must_use = "the change notification is only sent by `notify`"]
pub(crate) struct PendingChange {
    document: Document,
    source: NodeId,
    moved: usize,
}

impl PendingChange {
    /// Dispatch one bubbling change event on the source.
    pub(crate) fn notify(self) -> DocumentResult<()> {
        tracing::trace!(target: "transfer_list::widget", moved = self.moved, "dispatching change");
        self.document
            .dispatch(DocumentEvent::Change {
                target: self.source,
            })
            .map(|_| ())
    }
}
