//! Accordion error types.

use thiserror::Error;

/// Broad class of an [`AccordionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The markup or options do not describe a usable accordion.
    Configuration,
    /// A control names a panel id that is not in the document.
    Reference,
}

/// Errors raised while setting up an accordion.
///
/// Toggling never fails; every error here aborts initialization before any
/// click listener is attached.
#[derive(Debug, Error)]
pub enum AccordionError {
    #[error("accordion container has no items")]
    EmptyContainer,

    #[error("accordion item {index} has no control carrying aria-expanded and aria-controls")]
    MissingControl { index: usize },

    #[error("accordion item {index} controls panel '{panel_id}', which is not in the document")]
    UnresolvedPanel { index: usize, panel_id: String },

    #[error("accordion is already initialized")]
    AlreadyInitialized,

    #[error("invalid accordion options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl AccordionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnresolvedPanel { .. } => ErrorKind::Reference,
            Self::EmptyContainer
            | Self::MissingControl { .. }
            | Self::AlreadyInitialized
            | Self::InvalidConfig(_) => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, AccordionError>;
