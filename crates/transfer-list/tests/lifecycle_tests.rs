//! Tests for construction, teardown, theming and presentation.

use std::fs;
use std::time::Duration;

use transfer_list::document::DocumentTreeDebug;
use transfer_list::prelude::*;
use transfer_list::style::{
    ensure_default_presentation, PresentationTarget, StyledElement, DEFAULT_PRESENTATION_ID,
};
use transfer_list::{DocumentError, ListenerScope};

fn colors() -> Vec<SelectOption> {
    vec![
        SelectOption::new("r", "Red"),
        SelectOption::new("g", "Green").selected(true),
        SelectOption::new("b", "Blue").title("cool").attribute("data-hex", "#00f"),
    ]
}

/// A document with `before`, the select, then `after` under the root.
fn host() -> (Document, NodeId, NodeId, NodeId) {
    let doc = Document::new();
    let before = doc.create_element(ElementKind::Text("before".into()));
    let select = doc.create_element(ElementKind::Select(SelectElement::multiple(colors())));
    let after = doc.create_element(ElementKind::Text("after".into()));
    for node in [before, select, after] {
        doc.append_child(doc.root(), node).unwrap();
    }
    (doc, before, select, after)
}

#[test]
fn test_rejects_non_multi_select() {
    let doc = Document::new();
    let single = doc.create_element(ElementKind::Select(SelectElement::single(colors())));
    let text = doc.create_element(ElementKind::Text("x".into()));
    doc.append_child(doc.root(), single).unwrap();
    doc.append_child(doc.root(), text).unwrap();

    assert!(matches!(
        TransferList::new(&doc, single, TransferListConfig::default()),
        Err(TransferListError::NotMultiSelect)
    ));
    assert!(matches!(
        TransferList::new(&doc, text, TransferListConfig::default()),
        Err(TransferListError::NotMultiSelect)
    ));

    doc.remove(text).unwrap();
    assert!(matches!(
        TransferList::new(&doc, text, TransferListConfig::default()),
        Err(TransferListError::Document(DocumentError::InvalidNode))
    ));
}

#[test]
fn test_rejects_detached_source() {
    let doc = Document::new();
    let select = doc.create_element(ElementKind::Select(SelectElement::multiple(colors())));
    assert!(matches!(
        TransferList::new(&doc, select, TransferListConfig::default()),
        Err(TransferListError::Document(DocumentError::Detached))
    ));
    assert_eq!(doc.node_count(), 2);
}

#[test]
fn test_mount_replaces_source() {
    let (doc, before, select, after) = host();
    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
    let container = widget.view().container;

    let top = doc.children(doc.root()).unwrap();
    assert_eq!(top.len(), 4);
    assert_eq!(top[0], before);
    assert!(matches!(
        doc.with_node(top[1], |n| n.kind().clone()).unwrap(),
        ElementKind::Marker
    ));
    assert_eq!(top[2], container);
    assert_eq!(top[3], after);

    assert_eq!(doc.parent(select).unwrap(), Some(container));
    assert!(doc.is_hidden(select).unwrap());

    let entry = doc
        .with_list(widget.view().pane(Pane::Available).list, |l| l.entries()[1].clone())
        .unwrap();
    assert_eq!(entry.key, "item-2");
    assert_eq!(entry.title.as_deref(), Some("cool"));
    assert_eq!(entry.attributes.get("data-hex").map(String::as_str), Some("#00f"));
    assert!(entry.classes.contains("transfer-list__entry"));

    let tree = DocumentTreeDebug::new().show_ids(false).format(&doc).unwrap();
    assert!(tree.contains("select (3 options)"));
    assert!(tree.contains("[hidden]"));
}

#[test]
fn test_rows_from_config_or_source() {
    let (doc, _before, select, _after) = host();
    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
    let rows = doc
        .with_list(widget.view().pane(Pane::Chosen).list, |l| l.rows())
        .unwrap();
    assert_eq!(rows, 4);
    widget.destroy();

    doc.with_select_mut(select, |s| *s = s.clone().with_size(9)).unwrap();
    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
    let rows = doc
        .with_list(widget.view().pane(Pane::Chosen).list, |l| l.rows())
        .unwrap();
    assert_eq!(rows, 9);
}

#[test]
fn test_destroy_restores_source() {
    let (doc, before, select, after) = host();
    let node_count = doc.node_count();
    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
    let available_list = widget.view().pane(Pane::Available).list;

    widget.move_all(Pane::Available).unwrap();
    widget.destroy();

    assert!(widget.is_destroyed());
    assert_eq!(doc.children(doc.root()).unwrap(), vec![before, select, after]);
    assert!(!doc.is_hidden(select).unwrap());
    assert!(!doc.contains(available_list));
    assert_eq!(doc.node_count(), node_count);

    // Selected flags stay as last synced.
    assert_eq!(
        doc.with_select(select, |s| s.selected_values()).unwrap(),
        vec!["r", "g", "b"]
    );

    // Further calls are harmless no-ops.
    widget.destroy();
    assert!(!widget.move_all(Pane::Chosen).unwrap());
    widget.set_filter(Pane::Available, "x").unwrap();
    widget.refresh().unwrap();
    assert_eq!(widget.chosen_values(), vec!["r", "g", "b"]);
}

#[test]
fn test_destroy_cancels_pending_filter_render() {
    let doc = Document::with_manual_clock();
    let select = doc.create_element(ElementKind::Select(SelectElement::multiple(colors())));
    doc.append_child(doc.root(), select).unwrap();
    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();

    let input = widget.view().pane(Pane::Available).filter.unwrap();
    doc.dispatch(DocumentEvent::input(input, "re")).unwrap();
    assert_eq!(doc.pending_timers(), 1);

    widget.destroy();
    assert_eq!(doc.pending_timers(), 0);
    assert_eq!(doc.advance(Duration::from_secs(1)), 0);
}

#[test]
fn test_drop_detaches_listeners() {
    let (doc, _before, select, _after) = host();
    let scope = ListenerScope::new();
    let changes = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = changes.clone();
    doc.add_listener(select, &scope, move |_| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    })
    .unwrap();

    {
        let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
        widget.move_all(Pane::Chosen).unwrap();
    }
    assert_eq!(changes.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(doc.parent(select).unwrap(), Some(doc.root()));
    assert_eq!(doc.node_count(), 4);
}

#[test]
fn test_presentation_installed_once() {
    let doc = Document::new();
    let first = doc.create_element(ElementKind::Select(SelectElement::multiple(colors())));
    let second = doc.create_element(ElementKind::Select(SelectElement::multiple(colors())));
    doc.append_child(doc.root(), first).unwrap();
    doc.append_child(doc.root(), second).unwrap();

    assert!(!doc.has_presentation(DEFAULT_PRESENTATION_ID));
    let _a = TransferList::new(&doc, first, TransferListConfig::default()).unwrap();
    let _b = TransferList::new(&doc, second, TransferListConfig::default()).unwrap();
    assert!(doc.has_presentation(DEFAULT_PRESENTATION_ID));
    assert!(!ensure_default_presentation(&doc));
}

#[test]
fn test_theme_file_applies_to_view() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("compact.toml"),
        "[classes]\nbutton = \"btn btn-sm\"\ndisabled = \"disabled\"\nunknown_role = \"x\"\n",
    )
    .unwrap();

    let mut loader = ThemeLoader::new();
    loader.add_search_path(dir.path());
    let theme = loader.load_or_default("compact");
    let fallback = loader.load_or_default("missing");
    assert_eq!(fallback, ThemeClasses::default());

    let (doc, _before, select, _after) = host();
    let widget =
        TransferList::new(&doc, select, TransferListConfig::default().with_theme(theme)).unwrap();

    doc.with_node(widget.view().button(Action::AddSelected), |node| {
        assert!(node.has_class("btn"));
        assert!(node.has_class("btn-sm"));
        assert!(node.has_class("transfer-list__button--add-selected"));
        assert!(node.has_class("disabled"));
    })
    .unwrap();
    doc.with_node(widget.view().button(Action::AddAll), |node| {
        assert!(!node.has_class("disabled"));
    })
    .unwrap();
}

#[test]
fn test_text_and_icon_overrides() {
    let config = TransferListConfig::from_toml_str(
        "[text]\navailable_title = \"Colors\"\nadd_all = \"Take everything\"\n[icons]\nadd_all = \"<svg/>\"\n",
    )
    .unwrap();
    let (doc, _before, select, _after) = host();
    let widget = TransferList::new(&doc, select, config).unwrap();

    assert_eq!(doc.text(widget.view().pane(Pane::Available).title).unwrap(), "Colors");
    doc.with_node(widget.view().button(Action::AddAll), |node| {
        assert_eq!(node.attribute("aria-label"), Some("Take everything"));
        assert!(matches!(node.kind(), ElementKind::Button(b) if b.content == "<svg/>"));
    })
    .unwrap();
}

#[test]
fn test_destroy_keeps_source_hidden_if_it_was() {
    let (doc, _before, select, _after) = host();
    doc.set_hidden(select, true).unwrap();

    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
    assert!(widget.document().ptr_eq(&doc));
    assert!(!widget.document().ptr_eq(&Document::new()));
    assert_eq!(doc.index_in_parent(widget.view().container).unwrap(), Some(2));

    widget.destroy();
    assert!(doc.is_hidden(select).unwrap());
    assert_eq!(doc.index_in_parent(select).unwrap(), Some(1));
}
