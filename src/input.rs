//! Abstract input signals consumed by the dropdown components.
//!
//! The kit does not talk to an input device directly; the host application
//! translates its own key bindings and pointer events into the semantic
//! calls on [`Dropdown`](crate::components::dropdown::Dropdown) and into the
//! signals defined here.

/// A "back"/"escape" style request to close the topmost transient UI element.
///
/// Global key-binding dispatchers typically re-deliver an action while the
/// key is held; the dropdown only reacts to the initial press, so the
/// dispatcher's repeat flag is carried along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissAction {
    /// True when this delivery is an auto-repeat of a held key.
    pub repeat: bool,
}

impl DismissAction {
    pub fn new() -> Self {
        Self { repeat: false }
    }

    pub fn repeated() -> Self {
        Self { repeat: true }
    }
}

impl Default for DismissAction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_action_flags() {
        assert!(!DismissAction::new().repeat);
        assert!(DismissAction::repeated().repeat);
    }
}
