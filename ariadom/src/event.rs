use std::rc::Rc;

use crate::document::{Document, NodeId};

/// Callback invoked for clicks on, or bubbling through, a node.
///
/// Listeners receive the document mutably and the event being dispatched,
/// so any default/propagation control is applied to that exact event.
pub type ClickListener = Rc<dyn Fn(&mut Document, &mut ClickEvent)>;

/// A click dispatched through a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: NodeId,
    pub(crate) current_target: Option<NodeId>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Node the click originated on.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Node whose listeners are currently running. `None` outside dispatch.
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
