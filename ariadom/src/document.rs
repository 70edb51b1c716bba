use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::trace;

use crate::element::{Content, Element};
use crate::event::{ClickEvent, ClickListener};

/// Handle to a node inside a [`Document`].
///
/// Ids are indices into the document arena and are only meaningful for the
/// document that produced them. Arena order is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A mutable element tree with attribute, class and click-event support.
///
/// Node accessors take a [`NodeId`] obtained from this document and panic
/// when given an id from a different, smaller document.
pub struct Document {
    nodes: Vec<Node>,
    listeners: HashMap<NodeId, Vec<ClickListener>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: usize = self.listeners.values().map(Vec::len).sum();
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("listeners", &listeners)
            .finish()
    }
}

impl Document {
    /// Flatten an element tree into a document. The root element becomes
    /// [`Document::root`].
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            listeners: HashMap::new(),
        };
        doc.insert(root, None);
        doc
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let Element {
            tag,
            classes,
            attributes,
            content,
        } = element;

        let (text, children) = match content {
            Content::None => (None, Vec::new()),
            Content::Text(text) => (Some(text), Vec::new()),
            Content::Children(children) => (None, children),
        };

        self.nodes.push(Node {
            tag,
            classes,
            attributes,
            text,
            parent,
            children: Vec::with_capacity(children.len()),
        });

        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }

        for child in children {
            self.insert(child, Some(id));
        }

        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn tag_name(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn id(&self, id: NodeId) -> Option<&str> {
        self.attribute(id, "id")
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Direct element children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// First element in document order whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.attributes.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    /// First strict descendant of `scope` in document order matching `predicate`.
    pub fn query_descendant(
        &self,
        scope: NodeId,
        predicate: impl Fn(&Document, NodeId) -> bool,
    ) -> Option<NodeId> {
        self.find_in_children(scope, &predicate)
    }

    fn find_in_children(
        &self,
        id: NodeId,
        predicate: &dyn Fn(&Document, NodeId) -> bool,
    ) -> Option<NodeId> {
        for &child in self.children(id) {
            if predicate(self, child) {
                return Some(child);
            }
            if let Some(found) = self.find_in_children(child, predicate) {
                return Some(found);
            }
        }
        None
    }

    /// First strict descendant carrying every attribute in `names`,
    /// regardless of value.
    pub fn query_with_attributes(&self, scope: NodeId, names: &[&str]) -> Option<NodeId> {
        self.query_descendant(scope, |doc, node| {
            names.iter().all(|name| doc.has_attribute(node, name))
        })
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.node(id).attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        self.node_mut(id)
            .attributes
            .insert(name.to_string(), value.into());
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.node_mut(id).attributes.remove(name)
    }

    /// Read a `"true"`/`"false"` attribute. Only the exact string `"true"`
    /// counts as set.
    pub fn bool_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name) == Some("true")
    }

    pub fn set_bool_attribute(&mut self, id: NodeId, name: &str, value: bool) {
        self.set_attribute(id, name, if value { "true" } else { "false" });
    }

    /// Flip a boolean-string attribute and return the new value. Anything
    /// other than `"true"`, including a missing attribute, becomes `"true"`.
    pub fn toggle_bool_attribute(&mut self, id: NodeId, name: &str) -> bool {
        let value = !self.bool_attribute(id, name);
        self.set_bool_attribute(id, name, value);
        value
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn first_class(&self, id: NodeId) -> Option<&str> {
        self.node(id).classes.first().map(String::as_str)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if class.is_empty() || self.has_class(id, class) {
            return;
        }
        self.node_mut(id).classes.push(class.to_string());
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Toggle `class` and return whether it is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            !class.is_empty()
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn add_click_listener(&mut self, id: NodeId, listener: ClickListener) {
        self.listeners.entry(id).or_default().push(listener);
    }

    pub fn listener_count(&self, id: NodeId) -> usize {
        self.listeners.get(&id).map_or(0, Vec::len)
    }

    /// Dispatch a click at `target`, bubbling through its ancestors.
    ///
    /// Listeners on each node run in registration order. Once a listener
    /// stops propagation, the remaining listeners on the current node still
    /// run but no ancestor is visited.
    pub fn dispatch_click(&mut self, target: NodeId) -> ClickEvent {
        let mut event = ClickEvent::new(target);
        let mut current = Some(target);

        while let Some(node) = current {
            // Snapshot so listeners can borrow the document mutably.
            let listeners = self.listeners.get(&node).cloned().unwrap_or_default();
            if !listeners.is_empty() {
                trace!("click {} at {} ({} listeners)", target, node, listeners.len());
            }

            event.current_target = Some(node);
            for listener in &listeners {
                listener(self, &mut event);
            }

            if event.is_propagation_stopped() {
                break;
            }
            current = self.parent(node);
        }

        event.current_target = None;
        event
    }

    /// Resolve `id` and dispatch a click at it.
    pub fn click_by_id(&mut self, id: &str) -> Option<ClickEvent> {
        let target = self.get_element_by_id(id)?;
        Some(self.dispatch_click(target))
    }
}
