//! Serialize a document back to indented, HTML-like markup.

use std::fmt::Write;

use crate::document::{Document, NodeId};

const INDENT: &str = "  ";

impl Document {
    /// Render the whole document.
    pub fn render(&self) -> String {
        self.render_node(self.root())
    }

    /// Render `id` and its subtree.
    pub fn render_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id, 0);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let node = self.node(id);
        let pad = INDENT.repeat(depth);

        let _ = write!(out, "{pad}<{}", node.tag);
        if let Some(value) = node.attributes.get("id") {
            let _ = write!(out, " id=\"{value}\"");
        }
        if !node.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", node.classes.join(" "));
        }
        for (name, value) in node.attributes.iter().filter(|(name, _)| *name != "id") {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        out.push('>');

        if node.children.is_empty() {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
            let _ = writeln!(out, "</{}>", node.tag);
            return;
        }

        out.push('\n');
        for &child in &node.children {
            self.write_node(out, child, depth + 1);
        }
        let _ = writeln!(out, "{pad}</{}>", node.tag);
    }
}
