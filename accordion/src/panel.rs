//! Capability interface the toggle engine drives.

/// A single expandable panel, addressed through the host that owns its state.
///
/// Handles are cheap identifiers; all reads and writes go through `host`, so
/// the same engine runs against a real [`ariadom::Document`] or a test fake.
pub trait PanelHandle {
    type Host: ?Sized;

    fn is_expanded(&self, host: &Self::Host) -> bool;

    /// Set the expanded state. Implementations keep the panel's hidden flag
    /// as the inverse.
    fn set_expanded(&self, host: &mut Self::Host, expanded: bool);

    fn has_active_class(&self, host: &Self::Host, class: &str) -> bool;

    fn set_active_class(&self, host: &mut Self::Host, class: &str, active: bool);
}
