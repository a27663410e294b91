//! Tree visualization for debugging document structure.

use std::fmt::Write as _;

use transfer_list_style::StyledElement;

use super::{Document, DocumentTree, ElementKind, NodeId};
use crate::error::DocumentResult;

/// Style of branch characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Debug utility rendering a document subtree as indented text.
///
/// ```
/// use transfer_list::document::{Document, DocumentTreeDebug, ElementKind};
///
/// let doc = Document::new();
/// let text = doc.create_element(ElementKind::Text("hello".into()));
/// doc.append_child(doc.root(), text).unwrap();
///
/// let out = DocumentTreeDebug::new().show_ids(false).format(&doc).unwrap();
/// assert!(out.contains("text \"hello\""));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentTreeDebug {
    style: TreeStyle,
    show_ids: bool,
    show_hidden: bool,
    max_depth: Option<usize>,
}

impl Default for DocumentTreeDebug {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTreeDebug {
    pub fn new() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_hidden: true,
            max_depth: None,
        }
    }

    pub fn style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    /// Whether hidden subtrees are printed.
    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Format the whole document.
    pub fn format(&self, document: &Document) -> DocumentResult<String> {
        self.format_subtree(document, document.root())
    }

    /// Format the subtree rooted at `root`.
    pub fn format_subtree(&self, document: &Document, root: NodeId) -> DocumentResult<String> {
        let tree = document.inner.tree.read();
        tree.node(root)?;
        let mut output = String::new();
        self.format_into(&tree, root, "", true, 0, &mut output);
        Ok(output)
    }

    fn format_into(
        &self,
        tree: &DocumentTree,
        id: NodeId,
        indent: &str,
        is_last: bool,
        depth: usize,
        output: &mut String,
    ) {
        if self.max_depth.is_some_and(|max| depth > max) {
            return;
        }
        let Some(node) = tree.nodes.get(id) else {
            return;
        };
        if node.hidden && !self.show_hidden {
            return;
        }

        let (tee, corner, bar, blank) = match self.style {
            TreeStyle::Ascii => ("+-- ", "`-- ", "|   ", "    "),
            TreeStyle::Unicode => ("\u{251c}\u{2500} ", "\u{2514}\u{2500} ", "\u{2502}  ", "   "),
        };

        output.push_str(indent);
        if depth > 0 {
            output.push_str(if is_last { corner } else { tee });
        }
        output.push_str(node.kind.name());
        match &node.kind {
            ElementKind::Text(text) => {
                let _ = write!(output, " {text:?}");
            }
            ElementKind::List(list) => {
                let _ = write!(output, " ({} entries)", list.len());
            }
            ElementKind::Select(select) => {
                let _ = write!(output, " ({} options)", select.options().len());
            }
            ElementKind::Button(button) if button.disabled => output.push_str(" disabled"),
            _ => {}
        }
        for class in node.class_list().as_slice() {
            let _ = write!(output, " .{class}");
        }
        if node.hidden {
            output.push_str(" [hidden]");
        }
        if self.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        output.push('\n');

        let child_indent = if depth == 0 {
            String::new()
        } else if is_last {
            format!("{indent}{blank}")
        } else {
            format!("{indent}{bar}")
        };
        let count = node.children.len();
        for (i, &child) in node.children.iter().enumerate() {
            self.format_into(tree, child, &child_indent, i + 1 == count, depth + 1, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ButtonElement;

    #[test]
    fn test_format_tree() {
        let doc = Document::new();
        let container = doc.create_element(ElementKind::Container);
        let button = doc.create_element(ElementKind::Button(ButtonElement {
            content: ">".into(),
            disabled: true,
        }));
        let text = doc.create_element(ElementKind::Text("3".into()));
        doc.append_child(doc.root(), container).unwrap();
        doc.append_child(container, button).unwrap();
        doc.append_child(container, text).unwrap();
        doc.with_node_mut(container, |n| n.class_list_mut().add("transfer-list"))
            .unwrap();

        let out = DocumentTreeDebug::new()
            .style(TreeStyle::Ascii)
            .show_ids(false)
            .format(&doc)
            .unwrap();
        assert_eq!(
            out,
            "root\n`-- container .transfer-list\n    +-- button disabled\n    `-- text \"3\"\n"
        );
    }

    #[test]
    fn test_hidden_and_depth() {
        let doc = Document::new();
        let container = doc.create_element(ElementKind::Container);
        let inner = doc.create_element(ElementKind::Marker);
        doc.append_child(doc.root(), container).unwrap();
        doc.append_child(container, inner).unwrap();

        let shallow = DocumentTreeDebug::new().show_ids(false).max_depth(1).format(&doc).unwrap();
        assert!(!shallow.contains("marker"));

        doc.set_hidden(container, true).unwrap();
        let visible = DocumentTreeDebug::new()
            .show_ids(false)
            .show_hidden(false)
            .format(&doc)
            .unwrap();
        assert_eq!(visible, "root\n");
    }
}
