//! Tests for pointer, keyboard and filter interaction through the document.

use std::time::Duration;

use transfer_list::prelude::*;

fn mount_on(doc: &Document, labels: &[&str], config: TransferListConfig) -> (NodeId, TransferList) {
    let options = labels
        .iter()
        .enumerate()
        .map(|(i, label)| SelectOption::new(format!("v{i}"), *label))
        .collect();
    let select = doc.create_element(ElementKind::Select(SelectElement::multiple(options)));
    doc.append_child(doc.root(), select).unwrap();
    let widget = TransferList::new(doc, select, config).unwrap();
    (select, widget)
}

fn selected_in(doc: &Document, widget: &TransferList, pane: Pane) -> Vec<String> {
    doc.with_list(widget.view().pane(pane).list, |list| list.selected_keys())
        .unwrap()
}

fn click(doc: &Document, widget: &TransferList, pane: Pane, row: usize, modifiers: KeyboardModifiers) {
    let list = widget.view().pane(pane).list;
    doc.dispatch(DocumentEvent::click_row(list, row, modifiers))
        .unwrap();
}

fn button_disabled(doc: &Document, widget: &TransferList, action: Action) -> bool {
    doc.is_button_disabled(widget.view().button(action)).unwrap()
}

const FRUIT: &[&str] = &["Apple", "Green Apple", "Banana", "Cherry", "Grape"];

#[test]
fn test_button_state_follows_selection() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());

    assert!(!button_disabled(&doc, &widget, Action::AddAll));
    assert!(button_disabled(&doc, &widget, Action::AddSelected));
    assert!(button_disabled(&doc, &widget, Action::RemoveSelected));
    assert!(button_disabled(&doc, &widget, Action::RemoveAll));

    click(&doc, &widget, Pane::Available, 1, KeyboardModifiers::NONE);
    assert!(!button_disabled(&doc, &widget, Action::AddSelected));

    let add_selected = widget.view().button(Action::AddSelected);
    doc.with_node(add_selected, |node| {
        use transfer_list::style::StyledElement;
        assert!(node.has_class("transfer-list__button"));
        assert!(node.has_class("transfer-list__button--add-selected"));
        assert!(!node.has_class("is-disabled"));
    })
    .unwrap();
}

#[test]
fn test_click_buttons_move_selection() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());

    click(&doc, &widget, Pane::Available, 0, KeyboardModifiers::NONE);
    click(&doc, &widget, Pane::Available, 3, KeyboardModifiers::CTRL);
    doc.dispatch(DocumentEvent::click(widget.view().button(Action::AddSelected)))
        .unwrap();

    assert_eq!(widget.chosen_values(), vec!["v0", "v3"]);
    // Moved entries arrive unselected, and the source pane has no selection left.
    assert!(selected_in(&doc, &widget, Pane::Chosen).is_empty());
    assert!(selected_in(&doc, &widget, Pane::Available).is_empty());
    assert!(button_disabled(&doc, &widget, Action::AddSelected));
    assert!(!button_disabled(&doc, &widget, Action::RemoveAll));

    doc.dispatch(DocumentEvent::click(widget.view().button(Action::RemoveAll)))
        .unwrap();
    assert!(widget.chosen_values().is_empty());
}

#[test]
fn test_disabled_button_click_does_nothing() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());

    assert!(!doc
        .dispatch(DocumentEvent::click(widget.view().button(Action::RemoveAll)))
        .unwrap());
    assert!(widget.chosen_values().is_empty());
}

#[test]
fn test_double_click_moves_entry() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());
    let list = widget.view().pane(Pane::Available).list;

    doc.dispatch(DocumentEvent::DoubleClick { target: list, row: 2 })
        .unwrap();
    assert_eq!(widget.chosen_values(), vec!["v2"]);

    let chosen = widget.view().pane(Pane::Chosen).list;
    doc.dispatch(DocumentEvent::DoubleClick { target: chosen, row: 0 })
        .unwrap();
    assert!(widget.chosen_values().is_empty());
}

#[test]
fn test_double_click_on_disabled_entry_is_ignored() {
    let doc = Document::new();
    let select = doc.create_element(ElementKind::Select(SelectElement::multiple(vec![
        SelectOption::new("a", "A").disabled(true),
        SelectOption::new("b", "B"),
    ])));
    doc.append_child(doc.root(), select).unwrap();
    let widget = TransferList::new(&doc, select, TransferListConfig::default()).unwrap();
    let list = widget.view().pane(Pane::Available).list;

    doc.dispatch(DocumentEvent::DoubleClick { target: list, row: 0 })
        .unwrap();
    assert!(widget.chosen_values().is_empty());
}

#[test]
fn test_keyboard_bindings() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());
    let available = widget.view().pane(Pane::Available).list;
    let chosen = widget.view().pane(Pane::Chosen).list;

    doc.dispatch(DocumentEvent::KeyPress {
        target: available,
        key: Key::A,
        modifiers: KeyboardModifiers::CTRL,
    })
    .unwrap();
    assert!(!button_disabled(&doc, &widget, Action::AddSelected));

    doc.dispatch(DocumentEvent::key(available, Key::Enter)).unwrap();
    assert_eq!(widget.chosen_values().len(), 5);

    click(&doc, &widget, Pane::Chosen, 4, KeyboardModifiers::NONE);
    doc.dispatch(DocumentEvent::key(chosen, Key::Delete)).unwrap();
    assert_eq!(widget.available_values(), vec!["v4"]);

    // Delete only removes from the chosen pane.
    click(&doc, &widget, Pane::Available, 0, KeyboardModifiers::NONE);
    doc.dispatch(DocumentEvent::key(available, Key::Backspace)).unwrap();
    assert_eq!(widget.available_values(), vec!["v4"]);
}

#[test]
fn test_filter_and_counter() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());

    widget.set_filter(Pane::Available, "app gr").unwrap();
    assert_eq!(widget.filter(Pane::Available), "app gr");
    assert_eq!(widget.visible_keys(Pane::Available).unwrap(), vec!["item-1"]);
    let counter = widget.view().pane(Pane::Available).counter;
    assert_eq!(doc.text(counter).unwrap(), "1/5");

    widget.set_filter(Pane::Available, "").unwrap();
    assert_eq!(widget.visible_keys(Pane::Available).unwrap().len(), 5);
    assert_eq!(doc.text(counter).unwrap(), "5");
}

#[test]
fn test_starts_with_mode() {
    let doc = Document::new();
    let config = TransferListConfig::default().with_filter_match_mode(FilterMode::StartsWith);
    let (_select, widget) = mount_on(&doc, FRUIT, config);

    widget.set_filter(Pane::Available, "apple ").unwrap();
    assert_eq!(widget.visible_keys(Pane::Available).unwrap(), vec!["item-0"]);
    widget.set_filter(Pane::Available, "gr").unwrap();
    assert_eq!(
        widget.visible_keys(Pane::Available).unwrap(),
        vec!["item-1", "item-4"]
    );
}

#[test]
fn test_move_all_ignores_filter() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());

    widget.set_filter(Pane::Available, "cherry").unwrap();
    widget.move_all(Pane::Available).unwrap();
    assert_eq!(widget.chosen_values().len(), 5);
}

#[test]
fn test_selection_survives_rerender() {
    let doc = Document::new();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());

    click(&doc, &widget, Pane::Available, 0, KeyboardModifiers::NONE);
    click(&doc, &widget, Pane::Available, 1, KeyboardModifiers::CTRL);
    click(&doc, &widget, Pane::Available, 2, KeyboardModifiers::CTRL);

    widget.set_filter(Pane::Available, "apple").unwrap();
    assert_eq!(selected_in(&doc, &widget, Pane::Available), vec!["item-0", "item-1"]);

    widget.refresh().unwrap();
    assert_eq!(selected_in(&doc, &widget, Pane::Available), vec!["item-0", "item-1"]);

    // Only visible selected entries move.
    widget.move_selected(Pane::Available).unwrap();
    assert_eq!(widget.chosen_values(), vec!["v0", "v1"]);
}

#[test]
fn test_filter_input_is_debounced_per_pane() {
    let doc = Document::with_manual_clock();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());
    widget.move_keys_by_value(&["v3", "v4"], Pane::Chosen).unwrap();

    let available_input = widget.view().pane(Pane::Available).filter.unwrap();
    let chosen_input = widget.view().pane(Pane::Chosen).filter.unwrap();

    doc.dispatch(DocumentEvent::input(available_input, "b")).unwrap();
    doc.advance(Duration::from_millis(50));
    doc.dispatch(DocumentEvent::input(available_input, "ban")).unwrap();
    doc.dispatch(DocumentEvent::input(chosen_input, "gr")).unwrap();

    // The query is stored at once; only the render waits.
    assert_eq!(widget.filter(Pane::Available), "ban");
    assert_eq!(widget.visible_keys(Pane::Available).unwrap().len(), 3);
    assert_eq!(doc.pending_timers(), 2);

    doc.advance(Duration::from_millis(100));
    assert_eq!(widget.visible_keys(Pane::Available).unwrap().len(), 3);

    doc.advance(Duration::from_millis(20));
    assert_eq!(widget.visible_keys(Pane::Available).unwrap(), vec!["item-2"]);
    assert_eq!(widget.visible_keys(Pane::Chosen).unwrap(), vec!["item-4"]);
    assert_eq!(doc.pending_timers(), 0);
}

#[test]
fn test_set_filter_cancels_pending_render() {
    let doc = Document::with_manual_clock();
    let (_select, widget) = mount_on(&doc, FRUIT, TransferListConfig::default());
    let input = widget.view().pane(Pane::Available).filter.unwrap();

    doc.dispatch(DocumentEvent::input(input, "cherry")).unwrap();
    widget.set_filter(Pane::Available, "grape").unwrap();
    assert_eq!(doc.pending_timers(), 0);
    assert_eq!(doc.input_value(input).unwrap(), "grape");

    doc.advance(Duration::from_millis(500));
    assert_eq!(widget.visible_keys(Pane::Available).unwrap(), vec!["item-4"]);
}
