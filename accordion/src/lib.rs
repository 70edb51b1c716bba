//! Accessible accordion following the WAI-ARIA accordion pattern.
//!
//! Each direct child of the accordion container is an item holding a button
//! with `aria-expanded` and `aria-controls`; the controlled panel carries
//! `aria-hidden`. Clicking a button collapses every other item and flips its
//! own, so at most one panel is open at a time. The open item's container
//! also gets an active class: its first class plus a modifier (`--open` by
//! default).
//!
//! # Example
//!
//! ```
//! use accordion::{Accordion, AccordionConfig};
//! use ariadom::{Document, Element};
//!
//! let markup = Element::div().id("accordion").child(
//!     Element::section()
//!         .class("collapse")
//!         .child(
//!             Element::button()
//!                 .id("accordion-button-1")
//!                 .attr("aria-expanded", "false")
//!                 .attr("aria-controls", "accordion-body-1")
//!                 .text("Header 1"),
//!         )
//!         .child(
//!             Element::div()
//!                 .id("accordion-body-1")
//!                 .attr("aria-hidden", "true")
//!                 .text("Content 1"),
//!         ),
//! );
//!
//! let mut doc = Document::new(markup);
//! let root = doc.root();
//! let accordion = Accordion::create(&mut doc, root, &AccordionConfig::default()).unwrap();
//! assert_eq!(accordion.active_class(), "collapse--open");
//!
//! doc.click_by_id("accordion-button-1");
//! assert_eq!(accordion.expanded_index(&doc), Some(0));
//! ```

mod accordion;
pub mod config;
pub mod engine;
pub mod error;
pub mod item;
pub mod panel;
pub mod state;

pub use accordion::Accordion;
pub use config::{AccordionConfig, DEFAULT_MODIFIER};
pub use error::{AccordionError, ErrorKind, Result};
pub use item::{AccordionItem, ARIA_CONTROLS, ARIA_EXPANDED, ARIA_HIDDEN};
pub use panel::PanelHandle;
pub use state::AccordionState;
