//! Cancellation scopes for listener registration.
//!
//! A [`ListenerScope`] is created when a component attaches to its
//! surroundings and is passed to every listener registration it makes.
//! Cancelling the scope disconnects every connection and runs every
//! registered cancel hook in one step, so a component is never left
//! partially detached.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::signal::{ConnectionId, Signal, SignalEmitter};

type CancelHook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct ScopeState {
    cancelled: bool,
    connections: Vec<(Weak<dyn SignalEmitter>, ConnectionId)>,
    hooks: Vec<CancelHook>,
}

/// A handle that owns a group of signal connections and cancel hooks.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use transfer_list_core::{ListenerScope, Signal};
///
/// let clicked = Arc::new(Signal::<()>::new());
/// let scope = ListenerScope::new();
/// scope.listen(&clicked, |_| println!("clicked"));
/// assert_eq!(clicked.connection_count(), 1);
///
/// scope.cancel();
/// assert_eq!(clicked.connection_count(), 0);
/// ```
#[derive(Default)]
pub struct ListenerScope {
    state: Mutex<ScopeState>,
}

impl ListenerScope {
    /// Create an active scope with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `slot` to `signal` and tie the connection to this scope.
    ///
    /// Returns `None` without connecting if the scope was already cancelled.
    pub fn listen<Args, F>(&self, signal: &Arc<Signal<Args>>, slot: F) -> Option<ConnectionId>
    where
        Args: Send + 'static,
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut state = self.state.lock();
        if state.cancelled {
            tracing::debug!(target: "transfer_list_core::scope", "listen on cancelled scope ignored");
            return None;
        }
        let id = signal.connect(slot);
        let erased: Arc<dyn SignalEmitter> = signal.clone();
        state.connections.push((Arc::downgrade(&erased), id));
        Some(id)
    }

    /// Register a hook that runs once when the scope is cancelled.
    ///
    /// If the scope is already cancelled the hook runs immediately.
    pub fn on_cancel<F>(&self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        if state.cancelled {
            drop(state);
            hook();
            return;
        }
        state.hooks.push(Box::new(hook));
    }

    /// Disconnect every connection and run every cancel hook.
    ///
    /// Returns the number of connections that were still live. Calling this
    /// more than once is harmless.
    #[tracing::instrument(skip(self), target = "transfer_list_core::scope", level = "trace")]
    pub fn cancel(&self) -> usize {
        let (connections, hooks) = {
            let mut state = self.state.lock();
            if state.cancelled {
                return 0;
            }
            state.cancelled = true;
            (
                std::mem::take(&mut state.connections),
                std::mem::take(&mut state.hooks),
            )
        };

        let mut disconnected = 0;
        for (signal, id) in connections {
            if let Some(signal) = signal.upgrade()
                && signal.disconnect(id)
            {
                disconnected += 1;
            }
        }
        for hook in hooks {
            hook();
        }

        tracing::debug!(target: "transfer_list_core::scope", disconnected, "listener scope cancelled");
        disconnected
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.state.lock().cancelled
    }

    /// Number of connections registered through this scope.
    pub fn connection_count(&self) -> usize {
        self.state.lock().connections.len()
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
