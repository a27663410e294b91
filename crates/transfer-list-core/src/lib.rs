//! Core systems for Transfer List.
//!
//! This crate provides the primitives the widget is built on:
//!
//! - **Signal/Slot System**: Type-safe notification between components
//! - **Listener Scopes**: One handle that detaches a whole group of listeners
//! - **Timers**: One-shot timers with an explicit clock, plus debounce slots
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use transfer_list_core::{ListenerScope, Signal};
//!
//! let changed = Arc::new(Signal::<usize>::new());
//! let scope = ListenerScope::new();
//! scope.listen(&changed, |count| println!("{count} items chosen"));
//!
//! changed.emit(3);
//! scope.cancel();
//! changed.emit(4); // no longer delivered
//! ```

mod error;
pub mod logging;
mod scope;
pub mod signal;
mod timer;

pub use error::TimerError;
pub use logging::PerfSpan;
pub use scope::ListenerScope;
pub use signal::{ConnectionId, Signal, SignalEmitter};
pub use timer::{DebounceSlot, TimerId, TimerManager};
