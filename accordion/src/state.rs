//! Accordion state discovered from markup.

use ariadom::{Document, NodeId};
use log::debug;

use crate::config::AccordionConfig;
use crate::error::{AccordionError, Result};
use crate::item::AccordionItem;
use crate::panel::PanelHandle;

/// Items and active class of one accordion. Immutable once scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    items: Vec<AccordionItem>,
    active_class: String,
}

impl AccordionState {
    /// Build the state from the direct children of `container`.
    ///
    /// Every child must resolve to an item; the first failure is returned and
    /// no partial state is produced.
    pub fn scan(doc: &Document, container: NodeId, config: &AccordionConfig) -> Result<Self> {
        let children = doc.children(container);
        let Some(&first) = children.first() else {
            return Err(AccordionError::EmptyContainer);
        };

        let items = children
            .iter()
            .enumerate()
            .map(|(index, &child)| AccordionItem::resolve(doc, index, child))
            .collect::<Result<Vec<_>>>()?;

        let base = doc.first_class(first).unwrap_or_default();
        let active_class = format!("{base}{}", config.effective_modifier());

        debug!(
            "Scanned accordion {}: {} items, active class '{}'",
            container,
            items.len(),
            active_class
        );

        Ok(Self {
            items,
            active_class,
        })
    }

    /// Items in document order.
    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn position(&self, item: &AccordionItem) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    /// Index of the first expanded item, if any.
    pub fn expanded_index(&self, doc: &Document) -> Option<usize> {
        self.items.iter().position(|item| item.is_expanded(doc))
    }
}
