//! The composite view: two panes around a column of action buttons.
//!
//! ```text
//! container
//! ├─ pane (available)
//! │  ├─ header: title, counter
//! │  ├─ filter input (optional)
//! │  └─ list
//! ├─ controls: add all, add selected, remove selected, remove all
//! └─ pane (chosen)
//! ```

use transfer_list_style::{Action, StyledElement, ThemeClasses, ThemeRole};

use super::config::TransferListConfig;
use super::Pane;
use crate::document::{
    ButtonElement, Document, ElementKind, ListElement, NodeId, TextInput,
};
use crate::error::DocumentResult;

/// Node ids of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneNodes {
    pub pane: NodeId,
    pub title: NodeId,
    pub counter: NodeId,
    pub filter: Option<NodeId>,
    pub list: NodeId,
}

/// Node ids of the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewNodes {
    pub container: NodeId,
    pub controls: NodeId,
    panes: [PaneNodes; 2],
    buttons: [NodeId; 4],
}

impl ViewNodes {
    /// Nodes of `pane`.
    pub fn pane(&self, pane: Pane) -> &PaneNodes {
        &self.panes[pane.index()]
    }

    /// Button for `action`.
    pub fn button(&self, action: Action) -> NodeId {
        self.buttons[action_index(action)]
    }

    /// Pane whose list is `node`.
    pub fn pane_of_list(&self, node: NodeId) -> Option<Pane> {
        Pane::ALL.into_iter().find(|&p| self.pane(p).list == node)
    }

    /// Build a detached view.
    pub(crate) fn build(
        document: &Document,
        config: &TransferListConfig,
        rows: usize,
    ) -> DocumentResult<Self> {
        let theme = &config.theme;
        let container = styled(document, ElementKind::Container, theme, &[ThemeRole::Container])?;

        let available = build_pane(document, config, rows, Pane::Available)?;
        let controls = styled(document, ElementKind::Container, theme, &[ThemeRole::Controls])?;
        let mut buttons = Vec::with_capacity(Action::ALL.len());
        for action in Action::ALL {
            let button = styled(
                document,
                ElementKind::Button(ButtonElement {
                    content: config.icons.icon(action).to_string(),
                    disabled: false,
                }),
                theme,
                &[ThemeRole::Button, action.theme_role()],
            )?;
            let label = config.text.action_label(action);
            document.with_node_mut(button, |node| {
                node.set_attribute("type", "button");
                node.set_attribute("aria-label", label);
                node.set_attribute("title", label);
            })?;
            document.append_child(controls, button)?;
            buttons.push(button);
        }
        let chosen = build_pane(document, config, rows, Pane::Chosen)?;

        document.append_child(container, available.pane)?;
        document.append_child(container, controls)?;
        document.append_child(container, chosen.pane)?;

        let buttons: [NodeId; 4] = [buttons[0], buttons[1], buttons[2], buttons[3]];
        Ok(Self {
            container,
            controls,
            panes: [available, chosen],
            buttons,
        })
    }
}

fn action_index(action: Action) -> usize {
    match action {
        Action::AddAll => 0,
        Action::AddSelected => 1,
        Action::RemoveSelected => 2,
        Action::RemoveAll => 3,
    }
}

fn styled(
    document: &Document,
    kind: ElementKind,
    theme: &ThemeClasses,
    roles: &[ThemeRole],
) -> DocumentResult<NodeId> {
    let id = document.create_element(kind);
    document.with_node_mut(id, |node| {
        for &role in roles {
            node.add_role(theme, role);
        }
    })?;
    Ok(id)
}

fn build_pane(
    document: &Document,
    config: &TransferListConfig,
    rows: usize,
    pane: Pane,
) -> DocumentResult<PaneNodes> {
    let theme = &config.theme;
    let title_text = config.text.pane_title(pane);

    let root = styled(document, ElementKind::Container, theme, &[ThemeRole::Pane])?;
    document.with_node_mut(root, |node| node.set_attribute("data-pane", pane.name()))?;

    let header = styled(document, ElementKind::Container, theme, &[ThemeRole::PaneHeader])?;
    let title = styled(
        document,
        ElementKind::Text(title_text.to_string()),
        theme,
        &[ThemeRole::PaneTitle],
    )?;
    let counter = styled(document, ElementKind::Text("0".to_string()), theme, &[ThemeRole::Counter])?;
    document.with_node_mut(counter, |node| node.set_attribute("aria-live", "polite"))?;
    document.append_child(header, title)?;
    document.append_child(header, counter)?;
    document.append_child(root, header)?;

    let filter = if config.show_filter {
        let input = styled(
            document,
            ElementKind::TextInput(TextInput {
                value: String::new(),
                placeholder: config.text.filter_placeholder.clone(),
            }),
            theme,
            &[ThemeRole::FilterInput],
        )?;
        document.with_node_mut(input, |node| {
            node.set_attribute("type", "search");
            node.set_attribute("aria-label", format!("{} {}", config.text.filter_placeholder, title_text));
        })?;
        document.append_child(root, input)?;
        Some(input)
    } else {
        None
    };

    let list = styled(
        document,
        ElementKind::List(ListElement::new(rows)),
        theme,
        &[ThemeRole::List],
    )?;
    document.with_node_mut(list, |node| {
        node.set_attribute("role", "listbox");
        node.set_attribute("aria-multiselectable", "true");
        node.set_attribute("aria-label", title_text);
    })?;
    document.append_child(root, list)?;

    Ok(PaneNodes {
        pane: root,
        title,
        counter,
        filter,
        list,
    })
}
