//! Mutable widget state shared between the handle and its listeners.

use transfer_list_core::DebounceSlot;

use super::config::TransferListConfig;
use super::partition::PartitionStore;
use super::registry::OptionRegistry;
use super::view::ViewNodes;
use super::Pane;
use crate::document::{Document, NodeId};

/// Where the source select sat before mounting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    pub(crate) source: NodeId,
    /// Visibility of the source before mounting, restored on teardown.
    pub(crate) source_hidden: bool,
    /// Placeholder at the source's original position.
    pub(crate) marker: NodeId,
}

pub(crate) struct State {
    pub(crate) document: Document,
    pub(crate) registry: OptionRegistry,
    pub(crate) partitions: PartitionStore,
    pub(crate) config: TransferListConfig,
    pub(crate) view: ViewNodes,
    /// The source select is hidden inside the view while attached.
    pub(crate) placement: Placement,
    filters: [String; 2],
    debounce: [DebounceSlot; 2],
    pub(crate) destroyed: bool,
}

impl State {
    pub(crate) fn new(
        document: Document,
        registry: OptionRegistry,
        partitions: PartitionStore,
        config: TransferListConfig,
        view: ViewNodes,
        placement: Placement,
    ) -> Self {
        Self {
            document,
            registry,
            partitions,
            config,
            view,
            placement,
            filters: Default::default(),
            debounce: Default::default(),
            destroyed: false,
        }
    }

    /// Active query of `pane`.
    pub(crate) fn filter(&self, pane: Pane) -> &str {
        &self.filters[pane.index()]
    }

    pub(crate) fn set_filter(&mut self, pane: Pane, query: impl Into<String>) {
        self.filters[pane.index()] = query.into();
    }

    pub(crate) fn debounce_mut(&mut self, pane: Pane) -> &mut DebounceSlot {
        &mut self.debounce[pane.index()]
    }

    /// Stop the pending filter render of `pane`, if any.
    pub(crate) fn cancel_debounce(&mut self, pane: Pane) {
        if let Some(id) = self.debounce[pane.index()].take() {
            self.document.clear_timeout(id);
        }
    }
}
