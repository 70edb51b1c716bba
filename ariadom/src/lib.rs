pub mod document;
pub mod element;
pub mod event;
pub mod render;

pub use document::{Document, NodeId};
pub use element::{Content, Element};
pub use event::{ClickEvent, ClickListener};
