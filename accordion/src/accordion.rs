//! The accordion widget instance.

use std::rc::Rc;

use ariadom::{ClickEvent, ClickListener, Document, NodeId};
use log::{debug, trace, warn};

use crate::config::AccordionConfig;
use crate::engine;
use crate::error::{AccordionError, Result};
use crate::item::AccordionItem;
use crate::state::AccordionState;

/// An accordion bound to a container element.
///
/// A fresh instance is inert. [`Accordion::initialize`] scans the markup and
/// registers one click listener per item button; from then on the document
/// drives the widget through click dispatch.
#[derive(Debug, Default)]
pub struct Accordion {
    state: Option<Rc<AccordionState>>,
}

impl Accordion {
    /// Create an uninitialized accordion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and initialize in one step.
    pub fn create(doc: &mut Document, container: NodeId, config: &AccordionConfig) -> Result<Self> {
        let mut accordion = Self::new();
        accordion.initialize(doc, container, config)?;
        Ok(accordion)
    }

    /// Like [`Accordion::create`], with options given as a JSON object.
    pub fn create_from_json(doc: &mut Document, container: NodeId, options: &str) -> Result<Self> {
        let config = AccordionConfig::from_json(options)?;
        Self::create(doc, container, &config)
    }

    /// Discover the items under `container` and wire their buttons.
    ///
    /// Listeners are attached only after every item resolved; on error the
    /// document is left untouched.
    pub fn initialize(
        &mut self,
        doc: &mut Document,
        container: NodeId,
        config: &AccordionConfig,
    ) -> Result<()> {
        if self.state.is_some() {
            warn!("Accordion on {container} is already initialized");
            return Err(AccordionError::AlreadyInitialized);
        }

        let state = AccordionState::scan(doc, container, config)
            .inspect_err(|e| warn!("Accordion initialization on {container} failed: {e}"))?;
        let state = Rc::new(state);

        for item in state.items() {
            doc.add_click_listener(item.button, click_listener(Rc::clone(&state), *item));
        }

        debug!(
            "Accordion on {container} wired {} buttons",
            state.items().len()
        );
        self.state = Some(state);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Items in document order. Empty before initialization.
    pub fn items(&self) -> &[AccordionItem] {
        match self.state.as_deref() {
            Some(state) => state.items(),
            None => &[],
        }
    }

    /// Class marking an open item's container. Empty before initialization.
    pub fn active_class(&self) -> &str {
        self.state
            .as_deref()
            .map_or("", AccordionState::active_class)
    }

    /// Index of the open item, if any.
    pub fn expanded_index(&self, doc: &Document) -> Option<usize> {
        self.state.as_deref()?.expanded_index(doc)
    }

    /// Toggle the item at `index` as if its button were clicked.
    ///
    /// Returns false when the accordion is uninitialized or `index` is out
    /// of range.
    pub fn toggle(&self, doc: &mut Document, index: usize) -> bool {
        let Some(state) = self.state.as_deref() else {
            return false;
        };
        let Some(item) = state.items().get(index) else {
            return false;
        };
        engine::toggle(doc, state.items(), item, state.active_class());
        true
    }
}

fn click_listener(state: Rc<AccordionState>, item: AccordionItem) -> ClickListener {
    Rc::new(move |doc: &mut Document, event: &mut ClickEvent| {
        event.prevent_default();
        event.stop_propagation();
        trace!(
            "Accordion click on item {:?} (target {})",
            state.position(&item),
            event.target()
        );
        engine::toggle(doc, state.items(), &item, state.active_class());
    })
}
