//! The transfer-list widget.
//!
//! Data flows one way: an interaction asks the transfer engine to move keys
//! between the two partitions, the chosen partition is mirrored onto the
//! source select, both panes are re-rendered from the partitions, and a
//! single change notification is dispatched on the source.

mod config;
mod filter;
mod partition;
mod registry;
mod render;
mod state;
mod sync;
mod transfer;
mod transfer_list;
mod view;

pub use config::{TextOverrides, TransferListConfig};
pub use filter::{matches, FilterMode};
pub use partition::PartitionStore;
pub use registry::{Item, ItemKey, OptionRegistry};
pub use transfer_list::TransferList;
pub use view::{PaneNodes, ViewNodes};

/// One side of the transfer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Items not selected in the source.
    Available,
    /// Items selected in the source.
    Chosen,
}

impl Pane {
    /// Both panes, available first.
    pub const ALL: [Pane; 2] = [Pane::Available, Pane::Chosen];

    /// The opposite pane.
    pub fn other(self) -> Pane {
        match self {
            Pane::Available => Pane::Chosen,
            Pane::Chosen => Pane::Available,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Pane::Available => 0,
            Pane::Chosen => 1,
        }
    }

    /// Name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Pane::Available => "available",
            Pane::Chosen => "chosen",
        }
    }
}

impl std::fmt::Display for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
