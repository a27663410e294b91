//! The widget handle.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use transfer_list_core::ListenerScope;
use transfer_list_style::{ensure_default_presentation, Action};

use super::config::TransferListConfig;
use super::partition::PartitionStore;
use super::registry::{ItemKey, OptionRegistry};
use super::state::{Placement, State};
use super::sync::PendingChange;
use super::view::ViewNodes;
use super::Pane;
use crate::document::{Document, DocumentEvent, DocumentTreeDebug, ElementKind, Key, NodeId};
use crate::error::{DocumentError, DocumentResult, Result, TransferListError};

/// A two-pane transfer list mounted over a multi-select element.
///
/// Creating the widget hides the source select inside a composite view
/// and leaves a marker at its old position. Every transfer writes the
/// chosen items back to the source and dispatches one `Change` event on
/// it. Dropping the handle or calling [`destroy`](Self::destroy) puts the
/// source back.
///
/// # Example
///
/// ```
/// use transfer_list::prelude::*;
///
/// let doc = Document::new();
/// let select = doc.create_element(ElementKind::Select(SelectElement::multiple(vec![
///     SelectOption::new("r", "Red"),
///     SelectOption::new("g", "Green").selected(true),
/// ])));
/// doc.append_child(doc.root(), select).unwrap();
///
/// let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
/// widget.move_all(Pane::Available).unwrap();
/// assert_eq!(widget.chosen_values(), vec!["r", "g"]);
/// ```
pub struct TransferList {
    state: Arc<Mutex<State>>,
    scope: Arc<ListenerScope>,
    document: Document,
    source: NodeId,
    view: ViewNodes,
}

impl TransferList {
    /// Mount a transfer list over `source`.
    ///
    /// Fails if `source` is not a live multi-select element attached to the
    /// document.
    pub fn new(document: &Document, source: NodeId, config: TransferListConfig) -> Result<Self> {
        let (multiple, source_size, options) = document
            .with_select(source, |select| {
                (select.is_multiple(), select.size(), select.options().to_vec())
            })
            .map_err(|err| match err {
                DocumentError::WrongElementKind { .. } => TransferListError::NotMultiSelect,
                other => other.into(),
            })?;
        if !multiple {
            return Err(TransferListError::NotMultiSelect);
        }
        if document.parent(source)?.is_none() {
            return Err(DocumentError::Detached.into());
        }
        let source_hidden = document.is_hidden(source)?;

        ensure_default_presentation(document);

        let registry = OptionRegistry::load(&options);
        let partitions = PartitionStore::from_source(&registry, &options);
        let rows = config.resolve_rows(source_size, options.len());
        let view = ViewNodes::build(document, &config, rows)?;
        let placement = Placement {
            source,
            source_hidden,
            marker: document.create_element(ElementKind::Marker),
        };

        if let Err(err) = mount(document, &placement, view.container) {
            unmount(document, &placement, view.container);
            return Err(err.into());
        }

        let state = State::new(document.clone(), registry, partitions, config, view, placement);
        if let Err(err) = state.render_all() {
            unmount(document, &placement, view.container);
            return Err(err.into());
        }
        let state = Arc::new(Mutex::new(state));
        let scope = Arc::new(ListenerScope::new());

        let teardown_state = state.clone();
        scope.on_cancel(move || teardown(&teardown_state));
        register_listeners(document, &scope, &view, Arc::downgrade(&state))?;

        tracing::debug!(
            target: "transfer_list::widget",
            items = options.len(),
            chosen = options.iter().filter(|o| o.selected).count(),
            rows,
            listeners = scope.connection_count(),
            "transfer list attached"
        );
        if tracing::enabled!(target: "transfer_list::document", tracing::Level::TRACE)
            && let Ok(tree) = DocumentTreeDebug::new().format_subtree(document, view.container)
        {
            tracing::trace!(target: "transfer_list::document", "mounted view:\n{tree}");
        }

        Ok(Self {
            state,
            scope,
            document: document.clone(),
            source,
            view,
        })
    }

    /// The host document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The source select element.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Node ids of the composite view.
    pub fn view(&self) -> &ViewNodes {
        &self.view
    }

    /// Whether [`destroy`](Self::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Run a state change under the lock and notify after releasing it.
    fn apply<F>(&self, operation: &'static str, f: F) -> Result<bool>
    where
        F: FnOnce(&mut State) -> DocumentResult<Option<PendingChange>>,
    {
        let pending = {
            let mut state = self.state.lock();
            if state.destroyed {
                tracing::debug!(target: "transfer_list::widget", operation, "ignored on destroyed widget");
                return Ok(false);
            }
            f(&mut *state)?
        };
        match pending {
            Some(change) => {
                change.notify()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Move `keys` from `from` to `to`. Returns `true` if anything moved.
    pub fn transfer(&self, keys: &[ItemKey], from: Pane, to: Pane) -> Result<bool> {
        self.apply("transfer", |state| state.transfer(keys, from, to))
    }

    /// Move the visibly selected, enabled entries of `from` to the other pane.
    pub fn move_selected(&self, from: Pane) -> Result<bool> {
        self.apply("move_selected", |state| state.move_selected(from))
    }

    /// Move every enabled item of `from` to the other pane, ignoring the filter.
    pub fn move_all(&self, from: Pane) -> Result<bool> {
        self.apply("move_all", |state| state.move_all(from))
    }

    /// Move the items with the given values into `to`.
    ///
    /// Unknown values and items already in `to` are ignored.
    pub fn move_keys_by_value<S: AsRef<str>>(&self, values: &[S], to: Pane) -> Result<bool> {
        self.apply("move_keys_by_value", |state| {
            let keys: Vec<ItemKey> = values
                .iter()
                .filter_map(|value| state.registry.key_for_value(value.as_ref()))
                .cloned()
                .collect();
            state.transfer(&keys, to.other(), to)
        })
    }

    /// Set the filter of `pane` and re-render it immediately.
    ///
    /// A pending debounced render of that pane is cancelled.
    pub fn set_filter(&self, pane: Pane, query: &str) -> Result<()> {
        let mut state = self.state.lock();
        if state.destroyed {
            tracing::debug!(target: "transfer_list::widget", operation = "set_filter", "ignored on destroyed widget");
            return Ok(());
        }
        state.cancel_debounce(pane);
        state.set_filter(pane, query);
        if let Some(input) = state.view.pane(pane).filter {
            state.document.with_node_mut(input, |node| {
                if let ElementKind::TextInput(text) = node.kind_mut() {
                    text.value = query.to_string();
                }
            })?;
        }
        state.render_pane(pane)?;
        Ok(())
    }

    /// Active filter query of `pane`.
    pub fn filter(&self, pane: Pane) -> String {
        self.state.lock().filter(pane).to_string()
    }

    /// Keys of `pane`'s partition in display order.
    pub fn keys(&self, pane: Pane) -> Vec<ItemKey> {
        self.state.lock().partitions.keys(pane).to_vec()
    }

    /// Values of `pane`'s partition in display order.
    pub fn values(&self, pane: Pane) -> Vec<String> {
        let state = self.state.lock();
        state
            .partitions
            .keys(pane)
            .iter()
            .filter_map(|key| state.registry.get(key.as_str()))
            .map(|item| item.value.clone())
            .collect()
    }

    pub fn chosen_keys(&self) -> Vec<ItemKey> {
        self.keys(Pane::Chosen)
    }

    pub fn available_keys(&self) -> Vec<ItemKey> {
        self.keys(Pane::Available)
    }

    /// Values of the chosen items, in chosen order.
    pub fn chosen_values(&self) -> Vec<String> {
        self.values(Pane::Chosen)
    }

    pub fn available_values(&self) -> Vec<String> {
        self.values(Pane::Available)
    }

    /// Keys currently rendered in `pane`'s list.
    pub fn visible_keys(&self, pane: Pane) -> Result<Vec<String>> {
        let list = self.view.pane(pane).list;
        Ok(self.document.with_list(list, |list| {
            list.entries().iter().map(|entry| entry.key.clone()).collect()
        })?)
    }

    /// Re-render both panes.
    pub fn refresh(&self) -> Result<()> {
        let state = self.state.lock();
        if state.destroyed {
            tracing::debug!(target: "transfer_list::widget", operation = "refresh", "ignored on destroyed widget");
            return Ok(());
        }
        state.render_all()?;
        Ok(())
    }

    /// Detach every listener, cancel pending renders and restore the source.
    ///
    /// Selected flags stay as last synced. Calling this twice is harmless.
    pub fn destroy(&self) {
        self.scope.cancel();
    }
}

impl Drop for TransferList {
    fn drop(&mut self) {
        self.destroy();
    }
}

static_assertions::assert_impl_all!(TransferList: Send, Sync);

/// Put the view where the source was and move the source inside it.
fn mount(document: &Document, placement: &Placement, container: NodeId) -> DocumentResult<()> {
    let Placement { source, marker, .. } = *placement;
    document.insert_before(marker, source)?;
    document.insert_before(container, source)?;
    document.append_child(container, source)?;
    document.set_hidden(source, true)
}

/// Inverse of [`mount`]. Best effort: every step runs even if one fails.
fn unmount(document: &Document, placement: &Placement, container: NodeId) {
    let Placement {
        source,
        source_hidden,
        marker,
    } = *placement;
    let steps = [
        ("restore source position", document.insert_before(source, marker)),
        ("restore source visibility", document.set_hidden(source, source_hidden)),
        ("remove view", document.remove(container)),
        ("remove marker", document.remove(marker)),
    ];
    for (step, result) in steps {
        if let Err(err) = result {
            tracing::debug!(target: "transfer_list::widget", step, error = %err, "unmount step skipped");
        }
    }
}

fn teardown(state: &Mutex<State>) {
    let mut state = state.lock();
    if state.destroyed {
        return;
    }
    state.destroyed = true;
    for pane in Pane::ALL {
        state.cancel_debounce(pane);
    }
    unmount(&state.document, &state.placement, state.view.container);
    tracing::debug!(target: "transfer_list::widget", "transfer list destroyed");
}

/// Run `f` on live state from a listener, then notify outside the lock.
fn run_listener<F>(state: &Weak<Mutex<State>>, f: F)
where
    F: FnOnce(&mut State) -> DocumentResult<Option<PendingChange>>,
{
    let Some(state) = state.upgrade() else {
        return;
    };
    let pending = {
        let mut guard = state.lock();
        if guard.destroyed {
            return;
        }
        match f(&mut *guard) {
            Ok(pending) => pending,
            Err(err) => {
                tracing::warn!(target: "transfer_list::widget", error = %err, "listener failed");
                return;
            }
        }
    };
    if let Some(change) = pending
        && let Err(err) = change.notify()
    {
        tracing::warn!(target: "transfer_list::widget", error = %err, "change notification failed");
    }
}

fn action_handler(action: Action) -> fn(&mut State) -> DocumentResult<Option<PendingChange>> {
    match action {
        Action::AddAll => |state| state.move_all(Pane::Available),
        Action::AddSelected => |state| state.move_selected(Pane::Available),
        Action::RemoveSelected => |state| state.move_selected(Pane::Chosen),
        Action::RemoveAll => |state| state.move_all(Pane::Chosen),
    }
}

fn register_listeners(
    document: &Document,
    scope: &ListenerScope,
    view: &ViewNodes,
    state: Weak<Mutex<State>>,
) -> DocumentResult<()> {
    for action in Action::ALL {
        let state = state.clone();
        let handler = action_handler(action);
        document.add_listener(view.button(action), scope, move |event| {
            if matches!(event, DocumentEvent::Click { .. }) {
                run_listener(&state, handler);
            }
        })?;
    }

    for pane in Pane::ALL {
        let nodes = view.pane(pane);

        let list_state = state.clone();
        document.add_listener(nodes.list, scope, move |event| {
            run_listener(&list_state, |state| list_event(state, pane, event));
        })?;

        if let Some(input) = nodes.filter {
            let input_state = state.clone();
            document.add_listener(input, scope, move |event| {
                if let DocumentEvent::Input { value, .. } = event {
                    let weak = input_state.clone();
                    run_listener(&input_state, |state| {
                        schedule_filter_render(state, weak, pane, value);
                        Ok(None)
                    });
                }
            })?;
        }
    }
    Ok(())
}

fn list_event(
    state: &mut State,
    pane: Pane,
    event: &DocumentEvent,
) -> DocumentResult<Option<PendingChange>> {
    match event {
        DocumentEvent::DoubleClick { .. } | DocumentEvent::KeyPress { key: Key::Enter, .. } => {
            state.move_selected(pane)
        }
        DocumentEvent::KeyPress {
            key: Key::Delete | Key::Backspace,
            ..
        } if pane == Pane::Chosen => state.move_selected(pane),
        DocumentEvent::Click { .. } | DocumentEvent::KeyPress { .. } => {
            state.refresh_buttons()?;
            Ok(None)
        }
        _ => Ok(None),
    }
}

/// Store the query now; render the pane once typing pauses.
fn schedule_filter_render(state: &mut State, weak: Weak<Mutex<State>>, pane: Pane, query: &str) {
    state.set_filter(pane, query);
    let delay = state.config.filter_debounce();
    let timer = state.document.set_timeout(delay, move |id| {
        run_listener(&weak, |state| {
            if state.debounce_mut(pane).complete(id) {
                state.render_pane(pane)?;
            }
            Ok(None)
        });
    });
    if let Some(previous) = state.debounce_mut(pane).replace(timer) {
        state.document.clear_timeout(previous);
    }
    tracing::trace!(target: "transfer_list::widget", pane = pane.name(), "filter render scheduled");
}
