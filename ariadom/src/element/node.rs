use std::collections::BTreeMap;

use super::Content;

/// Markup description of a single element and its subtree.
///
/// Elements are plain values built with a fluent API and handed to
/// [`Document::new`](crate::Document::new), which flattens them into an arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,

    // Class list, in declaration order (first class is significant to callers)
    pub classes: Vec<String>,

    // Attributes, including `id`
    pub attributes: BTreeMap<String, String>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn heading(level: u8) -> Self {
        Self::new(format!("h{}", level.clamp(1, 6)))
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn classes<S: Into<String>>(self, classes: impl IntoIterator<Item = S>) -> Self {
        classes.into_iter().fold(self, |el, class| el.class(class))
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attributes.get(name)
    }

    // Text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
