//! Accordion items backed by document nodes.

use ariadom::{Document, NodeId};

use crate::error::{AccordionError, Result};
use crate::panel::PanelHandle;

pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// One collapsible section: wrapping container, toggle button, content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccordionItem {
    /// Direct child of the accordion root; carries the active class.
    pub container: NodeId,
    /// Control carrying `aria-expanded` and `aria-controls`.
    pub button: NodeId,
    /// Panel named by the button's `aria-controls`; carries `aria-hidden`.
    pub body: NodeId,
}

impl AccordionItem {
    /// Resolve the item rooted at `container`, the `index`-th child of the
    /// accordion root.
    pub fn resolve(doc: &Document, index: usize, container: NodeId) -> Result<Self> {
        let button = doc
            .query_with_attributes(container, &[ARIA_EXPANDED, ARIA_CONTROLS])
            .ok_or(AccordionError::MissingControl { index })?;

        let panel_id = doc.attribute(button, ARIA_CONTROLS).unwrap_or_default();
        let body = doc
            .get_element_by_id(panel_id)
            .ok_or_else(|| AccordionError::UnresolvedPanel {
                index,
                panel_id: panel_id.to_string(),
            })?;

        Ok(Self {
            container,
            button,
            body,
        })
    }

    pub fn is_hidden(&self, doc: &Document) -> bool {
        doc.bool_attribute(self.body, ARIA_HIDDEN)
    }
}

impl PanelHandle for AccordionItem {
    type Host = Document;

    fn is_expanded(&self, doc: &Document) -> bool {
        doc.bool_attribute(self.button, ARIA_EXPANDED)
    }

    fn set_expanded(&self, doc: &mut Document, expanded: bool) {
        doc.set_bool_attribute(self.button, ARIA_EXPANDED, expanded);
        doc.set_bool_attribute(self.body, ARIA_HIDDEN, !expanded);
    }

    fn has_active_class(&self, doc: &Document, class: &str) -> bool {
        doc.has_class(self.container, class)
    }

    fn set_active_class(&self, doc: &mut Document, class: &str, active: bool) {
        if active {
            doc.add_class(self.container, class);
        } else {
            doc.remove_class(self.container, class);
        }
    }
}
