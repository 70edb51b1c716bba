//! Toggle engine: keeps at most one panel open.

use crate::panel::PanelHandle;

/// Collapse every item other than `target`, then flip `target`.
///
/// Other items are forced closed unconditionally, so the single-open
/// invariant holds whatever state the host was left in. The target is
/// flipped rather than opened: toggling an open item closes it.
pub fn toggle<P>(host: &mut P::Host, items: &[P], target: &P, active_class: &str)
where
    P: PanelHandle + PartialEq,
{
    for item in items.iter().filter(|item| *item != target) {
        item.set_active_class(host, active_class, false);
        item.set_expanded(host, false);
    }

    let active = !target.has_active_class(host, active_class);
    target.set_active_class(host, active_class, active);

    let expanded = !target.is_expanded(host);
    target.set_expanded(host, expanded);
}
