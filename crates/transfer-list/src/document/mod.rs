//! Host document: a retained element tree with listeners and timers.
//!
//! The [`Document`] plays the role a browser document plays for a web
//! widget. It owns:
//!
//! - an arena of [`Node`]s with parent/child relationships,
//! - one listener [`Signal`] per node, fed by bubbling [`dispatch`](Document::dispatch),
//! - a one-shot timer queue driven by the document clock,
//! - the set of installed presentation sheets.
//!
//! `Document` is a cheap-to-clone handle. Its locks are never held while
//! listeners or timer callbacks run, so callbacks may call back into the
//! document freely.
//!
//! # Example
//!
//! ```
//! use transfer_list::document::{Document, DocumentEvent, ElementKind, SelectElement, SelectOption};
//!
//! let doc = Document::new();
//! let select = doc.create_element(ElementKind::Select(SelectElement::multiple(vec![
//!     SelectOption::new("a", "Apple"),
//! ])));
//! doc.append_child(doc.root(), select).unwrap();
//! doc.dispatch(DocumentEvent::Change { target: select }).unwrap();
//! ```

mod debug;
mod element;
mod event;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use slotmap::{new_key_type, SlotMap};
use transfer_list_core::{ConnectionId, ListenerScope, Signal, TimerId, TimerManager};
use transfer_list_style::{ClassList, PresentationTarget, StyledElement};

use crate::error::{DocumentError, DocumentResult};

pub use debug::{DocumentTreeDebug, TreeStyle};
pub use element::{
    ButtonElement, ElementKind, ListElement, ListEntry, SelectElement, SelectOption, TextInput,
};
pub use event::{DocumentEvent, Key, KeyboardModifiers};

new_key_type! {
    /// A stable handle to a node in a [`Document`].
    ///
    /// Becomes invalid when the node is removed.
    pub struct NodeId;
}

/// A node of the document tree.
pub struct Node {
    kind: ElementKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    hidden: bool,
    classes: ClassList,
    attributes: BTreeMap<String, String>,
    listeners: Arc<Signal<DocumentEvent>>,
}

impl Node {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            hidden: false,
            classes: ClassList::new(),
            attributes: BTreeMap::new(),
            listeners: Arc::new(Signal::new()),
        }
    }

    /// The element payload.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Mutable element payload.
    pub fn kind_mut(&mut self) -> &mut ElementKind {
        &mut self.kind
    }

    /// Parent node, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node itself is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All attributes.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Set an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }
}

impl StyledElement for Node {
    fn class_list(&self) -> &ClassList {
        &self.classes
    }

    fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }
}

struct DocumentTree {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    presentations: BTreeMap<String, String>,
}

impl DocumentTree {
    fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(ElementKind::Root));
        Self {
            nodes,
            root,
            presentations: BTreeMap::new(),
        }
    }

    fn node(&self, id: NodeId) -> DocumentResult<&Node> {
        self.nodes.get(id).ok_or(DocumentError::InvalidNode)
    }

    fn node_mut(&mut self, id: NodeId) -> DocumentResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(DocumentError::InvalidNode)
    }

    fn is_ancestor_of(&self, potential_ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|n| n.parent);
        }
        false
    }

    fn detach(&mut self, id: NodeId) -> DocumentResult<()> {
        let parent = self.node(id)?.parent;
        if let Some(parent_id) = parent
            && let Some(parent) = self.nodes.get_mut(parent_id)
        {
            parent.children.retain(|&child| child != id);
        }
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    /// Insert `id` into `parent` at `index`, detaching it from wherever it was.
    fn attach(&mut self, id: NodeId, parent: NodeId, index: Option<usize>) -> DocumentResult<()> {
        self.node(id)?;
        self.node(parent)?;
        if id == self.root {
            return Err(DocumentError::CircularParentage);
        }
        if self.is_ancestor_of(id, parent) {
            return Err(DocumentError::CircularParentage);
        }

        self.detach(id)?;
        let parent_node = self.node_mut(parent)?;
        let index = index
            .unwrap_or(parent_node.children.len())
            .min(parent_node.children.len());
        parent_node.children.insert(index, id);
        self.node_mut(id)?.parent = Some(parent);
        Ok(())
    }

    fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if let Some(node) = self.nodes.get(id) {
            for &child in &node.children {
                self.collect_subtree(child, out);
            }
            out.push(id);
        }
    }

    /// Default behaviour of the target element. Returns `false` if the event
    /// is swallowed and must not reach listeners.
    fn apply_default_action(&mut self, event: &DocumentEvent) -> DocumentResult<bool> {
        let node = self.node_mut(event.target())?;
        match (event, &mut node.kind) {
            (DocumentEvent::Click { .. }, ElementKind::Button(button)) if button.disabled => {
                return Ok(false);
            }
            (
                DocumentEvent::Click {
                    row: Some(row),
                    modifiers,
                    ..
                },
                ElementKind::List(list),
            ) => {
                list.click_row(*row, *modifiers);
            }
            (DocumentEvent::DoubleClick { row, .. }, ElementKind::List(list)) => {
                let already_selected = list.entries().get(*row).is_some_and(|e| e.selected);
                if !already_selected {
                    list.click_row(*row, KeyboardModifiers::NONE);
                }
            }
            (
                DocumentEvent::KeyPress {
                    key: Key::A,
                    modifiers,
                    ..
                },
                ElementKind::List(list),
            ) if modifiers.control => {
                list.select_all();
            }
            (DocumentEvent::Input { value, .. }, ElementKind::TextInput(input)) => {
                input.value.clone_from(value);
            }
            _ => {}
        }
        Ok(true)
    }

    /// Listener signals along the bubbling path, target first.
    fn propagation_path(&self, target: NodeId) -> Vec<Arc<Signal<DocumentEvent>>> {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(id) = current {
            let Some(node) = self.nodes.get(id) else {
                break;
            };
            path.push(node.listeners.clone());
            current = node.parent;
        }
        path
    }
}

type TimerCallback = Box<dyn FnOnce(TimerId) + Send>;

enum Clock {
    System,
    Manual(Instant),
}

struct TimerQueue {
    clock: Clock,
    manager: TimerManager,
    callbacks: HashMap<TimerId, TimerCallback>,
}

impl TimerQueue {
    fn now(&self) -> Instant {
        match self.clock {
            Clock::System => Instant::now(),
            Clock::Manual(now) => now,
        }
    }
}

struct DocumentInner {
    tree: RwLock<DocumentTree>,
    timers: Mutex<TimerQueue>,
}

/// Shared handle to a document.
#[derive(Clone)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Clock::System)
    }

    /// Create an empty document whose clock only moves on [`advance`](Self::advance).
    pub fn with_manual_clock() -> Self {
        Self::with_clock(Clock::Manual(Instant::now()))
    }

    fn with_clock(clock: Clock) -> Self {
        Self {
            inner: Arc::new(DocumentInner {
                tree: RwLock::new(DocumentTree::new()),
                timers: Mutex::new(TimerQueue {
                    clock,
                    manager: TimerManager::new(),
                    callbacks: HashMap::new(),
                }),
            }),
        }
    }

    /// Whether two handles refer to the same document.
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.inner.tree.read().root
    }

    /// Create a detached node.
    pub fn create_element(&self, kind: ElementKind) -> NodeId {
        let mut tree = self.inner.tree.write();
        let name = kind.name();
        let id = tree.nodes.insert(Node::new(kind));
        tracing::trace!(target: "transfer_list::document", ?id, kind = name, "created node");
        id
    }

    /// Whether `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.inner.tree.read().nodes.contains_key(id)
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.inner.tree.read().nodes.len()
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> DocumentResult<()> {
        self.inner.tree.write().attach(child, parent, None)
    }

    /// Insert `node` as the sibling immediately before `reference`.
    pub fn insert_before(&self, node: NodeId, reference: NodeId) -> DocumentResult<()> {
        let mut tree = self.inner.tree.write();
        if node == reference {
            return Err(DocumentError::CircularParentage);
        }
        let parent = tree.node(reference)?.parent.ok_or(DocumentError::Detached)?;
        tree.node(node)?;
        if node == tree.root || tree.is_ancestor_of(node, parent) {
            return Err(DocumentError::CircularParentage);
        }
        // Detach first so the reference index accounts for `node` leaving the same parent.
        tree.detach(node)?;
        let index = tree
            .node(parent)?
            .children
            .iter()
            .position(|&c| c == reference)
            .ok_or(DocumentError::InvalidNode)?;
        tree.attach(node, parent, Some(index))
    }

    /// Detach `id` from its parent, keeping it alive.
    pub fn detach(&self, id: NodeId) -> DocumentResult<()> {
        self.inner.tree.write().detach(id)
    }

    /// Remove `id` and its whole subtree, disconnecting their listeners.
    pub fn remove(&self, id: NodeId) -> DocumentResult<()> {
        let mut tree = self.inner.tree.write();
        if id == tree.root {
            return Err(DocumentError::CircularParentage);
        }
        tree.detach(id)?;
        let mut doomed = Vec::new();
        tree.collect_subtree(id, &mut doomed);
        tracing::trace!(target: "transfer_list::document", ?id, removed = doomed.len(), "removing subtree");
        for node_id in doomed {
            if let Some(node) = tree.nodes.remove(node_id) {
                node.listeners.disconnect_all();
            }
        }
        Ok(())
    }

    /// Parent of `id`.
    pub fn parent(&self, id: NodeId) -> DocumentResult<Option<NodeId>> {
        Ok(self.inner.tree.read().node(id)?.parent)
    }

    /// Children of `id`.
    pub fn children(&self, id: NodeId) -> DocumentResult<Vec<NodeId>> {
        Ok(self.inner.tree.read().node(id)?.children.clone())
    }

    /// Position of `id` among its siblings.
    pub fn index_in_parent(&self, id: NodeId) -> DocumentResult<Option<usize>> {
        let tree = self.inner.tree.read();
        let Some(parent) = tree.node(id)?.parent else {
            return Ok(None);
        };
        Ok(tree.node(parent)?.children.iter().position(|&c| c == id))
    }

    /// Hide or show a node.
    pub fn set_hidden(&self, id: NodeId, hidden: bool) -> DocumentResult<()> {
        self.inner.tree.write().node_mut(id)?.hidden = hidden;
        Ok(())
    }

    /// Whether the node itself is hidden.
    pub fn is_hidden(&self, id: NodeId) -> DocumentResult<bool> {
        Ok(self.inner.tree.read().node(id)?.hidden)
    }

    /// Run `f` with shared access to a node.
    pub fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&Node) -> R) -> DocumentResult<R> {
        let tree = self.inner.tree.read();
        Ok(f(tree.node(id)?))
    }

    /// Run `f` with exclusive access to a node.
    pub fn with_node_mut<R>(&self, id: NodeId, f: impl FnOnce(&mut Node) -> R) -> DocumentResult<R> {
        let mut tree = self.inner.tree.write();
        Ok(f(tree.node_mut(id)?))
    }

    /// Run `f` on a select element.
    pub fn with_select<R>(&self, id: NodeId, f: impl FnOnce(&SelectElement) -> R) -> DocumentResult<R> {
        let tree = self.inner.tree.read();
        match &tree.node(id)?.kind {
            ElementKind::Select(select) => Ok(f(select)),
            other => Err(DocumentError::wrong_kind("select", other)),
        }
    }

    /// Run `f` on a select element mutably.
    pub fn with_select_mut<R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&mut SelectElement) -> R,
    ) -> DocumentResult<R> {
        let mut tree = self.inner.tree.write();
        match &mut tree.node_mut(id)?.kind {
            ElementKind::Select(select) => Ok(f(select)),
            other => Err(DocumentError::wrong_kind("select", other)),
        }
    }

    /// Run `f` on a list element.
    pub fn with_list<R>(&self, id: NodeId, f: impl FnOnce(&ListElement) -> R) -> DocumentResult<R> {
        let tree = self.inner.tree.read();
        match &tree.node(id)?.kind {
            ElementKind::List(list) => Ok(f(list)),
            other => Err(DocumentError::wrong_kind("list", other)),
        }
    }

    /// Run `f` on a list element mutably.
    pub fn with_list_mut<R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&mut ListElement) -> R,
    ) -> DocumentResult<R> {
        let mut tree = self.inner.tree.write();
        match &mut tree.node_mut(id)?.kind {
            ElementKind::List(list) => Ok(f(list)),
            other => Err(DocumentError::wrong_kind("list", other)),
        }
    }

    /// Replace the content of a text node.
    pub fn set_text(&self, id: NodeId, text: impl Into<String>) -> DocumentResult<()> {
        let mut tree = self.inner.tree.write();
        match &mut tree.node_mut(id)?.kind {
            ElementKind::Text(current) => {
                *current = text.into();
                Ok(())
            }
            other => Err(DocumentError::wrong_kind("text", other)),
        }
    }

    /// Content of a text node.
    pub fn text(&self, id: NodeId) -> DocumentResult<String> {
        let tree = self.inner.tree.read();
        match &tree.node(id)?.kind {
            ElementKind::Text(text) => Ok(text.clone()),
            other => Err(DocumentError::wrong_kind("text", other)),
        }
    }

    /// Current value of a text input.
    pub fn input_value(&self, id: NodeId) -> DocumentResult<String> {
        let tree = self.inner.tree.read();
        match &tree.node(id)?.kind {
            ElementKind::TextInput(input) => Ok(input.value.clone()),
            other => Err(DocumentError::wrong_kind("input", other)),
        }
    }

    /// Whether a button is disabled.
    pub fn is_button_disabled(&self, id: NodeId) -> DocumentResult<bool> {
        let tree = self.inner.tree.read();
        match &tree.node(id)?.kind {
            ElementKind::Button(button) => Ok(button.disabled),
            other => Err(DocumentError::wrong_kind("button", other)),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Register `slot` for events reaching `id`, owned by `scope`.
    ///
    /// Returns `Ok(None)` if the scope is already cancelled.
    pub fn add_listener<F>(
        &self,
        id: NodeId,
        scope: &ListenerScope,
        slot: F,
    ) -> DocumentResult<Option<ConnectionId>>
    where
        F: Fn(&DocumentEvent) + Send + Sync + 'static,
    {
        let signal = self.inner.tree.read().node(id)?.listeners.clone();
        Ok(scope.listen(&signal, slot))
    }

    /// Number of listeners registered directly on `id`.
    pub fn listener_count(&self, id: NodeId) -> DocumentResult<usize> {
        Ok(self.inner.tree.read().node(id)?.listeners.connection_count())
    }

    /// Dispatch `event` at its target and bubble it to every ancestor.
    ///
    /// Returns `Ok(false)` if the target swallowed the event.
    #[tracing::instrument(skip_all, target = "transfer_list::document", level = "trace", fields(event = event.name()))]
    pub fn dispatch(&self, event: DocumentEvent) -> DocumentResult<bool> {
        let path = {
            let mut tree = self.inner.tree.write();
            if !tree.apply_default_action(&event)? {
                tracing::trace!(target: "transfer_list::document", "event swallowed by target");
                return Ok(false);
            }
            tree.propagation_path(event.target())
        };

        for listeners in path {
            listeners.emit(event.clone());
        }
        Ok(true)
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Current document time.
    pub fn now(&self) -> Instant {
        self.inner.timers.lock().now()
    }

    /// Run `callback` once after `delay`. The callback receives its own timer id.
    pub fn set_timeout<F>(&self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce(TimerId) + Send + 'static,
    {
        let mut timers = self.inner.timers.lock();
        let now = timers.now();
        let id = timers.manager.start_one_shot_at(now, delay);
        timers.callbacks.insert(id, Box::new(callback));
        id
    }

    /// Cancel a pending timeout. Returns `false` if it already ran or was cancelled.
    pub fn clear_timeout(&self, id: TimerId) -> bool {
        let mut timers = self.inner.timers.lock();
        timers.callbacks.remove(&id);
        timers.manager.stop(id).is_ok()
    }

    /// Number of timeouts waiting to run.
    pub fn pending_timers(&self) -> usize {
        self.inner.timers.lock().manager.active_count()
    }

    /// Time until the next timeout is due.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        let mut timers = self.inner.timers.lock();
        let now = timers.now();
        timers.manager.time_until_next(now)
    }

    /// Run every timeout that is due. Returns how many ran.
    pub fn run_due_timers(&self) -> usize {
        let due: Vec<(TimerId, TimerCallback)> = {
            let mut timers = self.inner.timers.lock();
            let now = timers.now();
            let fired = timers.manager.process_expired_at(now);
            fired
                .into_iter()
                .filter_map(|id| timers.callbacks.remove(&id).map(|cb| (id, cb)))
                .collect()
        };

        let count = due.len();
        for (id, callback) in due {
            callback(id);
        }
        count
    }

    /// Move a manual clock forward by `by`, then run due timeouts.
    ///
    /// On a system-clock document only the due timeouts run.
    pub fn advance(&self, by: Duration) -> usize {
        {
            let mut timers = self.inner.timers.lock();
            match &mut timers.clock {
                Clock::Manual(now) => *now += by,
                Clock::System => {
                    tracing::debug!(target: "transfer_list::document", "advance on system clock does not move time");
                }
            }
        }
        self.run_due_timers()
    }
}

impl PresentationTarget for Document {
    fn install_presentation(&self, id: &str, sheet: &str) -> bool {
        let mut tree = self.inner.tree.write();
        if tree.presentations.contains_key(id) {
            return false;
        }
        tree.presentations.insert(id.to_string(), sheet.to_string());
        true
    }

    fn has_presentation(&self, id: &str) -> bool {
        self.inner.tree.read().presentations.contains_key(id)
    }
}

static_assertions::assert_impl_all!(Document: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn list_with(keys: &[&str]) -> ElementKind {
        let mut list = ListElement::new(4);
        for key in keys {
            list.push(ListEntry {
                key: key.to_string(),
                label: key.to_string(),
                ..Default::default()
            });
        }
        ElementKind::List(list)
    }

    #[test]
    fn test_tree_operations() {
        let doc = Document::new();
        let a = doc.create_element(ElementKind::Container);
        let b = doc.create_element(ElementKind::Container);
        let c = doc.create_element(ElementKind::Container);
        doc.append_child(doc.root(), a).unwrap();
        doc.append_child(doc.root(), c).unwrap();
        doc.insert_before(b, c).unwrap();

        assert_eq!(doc.children(doc.root()).unwrap(), vec![a, b, c]);
        assert_eq!(doc.index_in_parent(b).unwrap(), Some(1));

        doc.insert_before(c, a).unwrap();
        assert_eq!(doc.children(doc.root()).unwrap(), vec![c, a, b]);

        doc.append_child(a, b).unwrap();
        assert_eq!(doc.parent(b).unwrap(), Some(a));
        assert_eq!(
            doc.append_child(b, a),
            Err(DocumentError::CircularParentage)
        );
    }

    #[test]
    fn test_remove_subtree() {
        let doc = Document::new();
        let outer = doc.create_element(ElementKind::Container);
        let inner = doc.create_element(ElementKind::Text("x".into()));
        doc.append_child(doc.root(), outer).unwrap();
        doc.append_child(outer, inner).unwrap();

        let scope = ListenerScope::new();
        doc.add_listener(inner, &scope, |_| {}).unwrap();

        doc.remove(outer).unwrap();
        assert!(!doc.contains(outer));
        assert!(!doc.contains(inner));
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.text(inner), Err(DocumentError::InvalidNode));
    }

    #[test]
    fn test_dispatch_bubbles() {
        let doc = Document::new();
        let outer = doc.create_element(ElementKind::Container);
        let list = doc.create_element(list_with(&["a", "b"]));
        doc.append_child(doc.root(), outer).unwrap();
        doc.append_child(outer, list).unwrap();

        let scope = ListenerScope::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for (name, node) in [("list", list), ("outer", outer), ("root", doc.root())] {
            let seen = seen.clone();
            doc.add_listener(node, &scope, move |event| {
                seen.lock().push((name, event.name()));
            })
            .unwrap();
        }

        doc.dispatch(DocumentEvent::click_row(list, 1, KeyboardModifiers::NONE))
            .unwrap();
        assert_eq!(
            *seen.lock(),
            vec![("list", "click"), ("outer", "click"), ("root", "click")]
        );
        assert_eq!(doc.with_list(list, |l| l.selected_keys()).unwrap(), vec!["b"]);
    }

    #[test]
    fn test_disabled_button_swallows_click() {
        let doc = Document::new();
        let button = doc.create_element(ElementKind::Button(ButtonElement {
            content: ">".into(),
            disabled: true,
        }));
        doc.append_child(doc.root(), button).unwrap();

        let scope = ListenerScope::new();
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = clicks.clone();
        doc.add_listener(button, &scope, move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert!(!doc.dispatch(DocumentEvent::click(button)).unwrap());
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_input_updates_value() {
        let doc = Document::new();
        let input = doc.create_element(ElementKind::TextInput(TextInput::default()));
        doc.dispatch(DocumentEvent::input(input, "app")).unwrap();
        assert_eq!(doc.input_value(input).unwrap(), "app");
        assert!(matches!(
            doc.text(input),
            Err(DocumentError::WrongElementKind { expected: "text", found: "input" })
        ));
    }

    #[test]
    fn test_ctrl_a_selects_all() {
        let doc = Document::new();
        let list = doc.create_element(list_with(&["a", "b", "c"]));
        doc.dispatch(DocumentEvent::KeyPress {
            target: list,
            key: Key::A,
            modifiers: KeyboardModifiers::CTRL,
        })
        .unwrap();
        assert_eq!(doc.with_list(list, |l| l.selected_keys().len()).unwrap(), 3);
    }

    #[test]
    fn test_manual_clock_timers() {
        let doc = Document::with_manual_clock();
        let ran = Arc::new(Mutex::new(Vec::new()));

        let ran_clone = ran.clone();
        doc.set_timeout(Duration::from_millis(100), move |_| ran_clone.lock().push("a"));
        let ran_clone = ran.clone();
        let cancelled = doc.set_timeout(Duration::from_millis(50), move |_| ran_clone.lock().push("b"));

        assert!(doc.clear_timeout(cancelled));
        assert!(!doc.clear_timeout(cancelled));
        assert_eq!(doc.advance(Duration::from_millis(99)), 0);
        assert_eq!(doc.time_until_next_timer(), Some(Duration::from_millis(1)));
        assert_eq!(doc.advance(Duration::from_millis(1)), 1);
        assert_eq!(*ran.lock(), vec!["a"]);
        assert_eq!(doc.pending_timers(), 0);
    }

    #[test]
    fn test_presentation_target() {
        let doc = Document::new();
        assert!(doc.install_presentation("x", "sheet"));
        assert!(!doc.install_presentation("x", "other"));
        assert!(doc.has_presentation("x"));
    }
}
