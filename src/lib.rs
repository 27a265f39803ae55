//! Engine-agnostic dropdown widget kit.
//!
//! A single-selection dropdown built from small, testable parts: a header
//! showing the current value, a popup menu of item rows with keyboard and
//! pointer pre-selection, and an optional search filter. Animations and
//! audio feedback are delegated to injected services, so the whole widget
//! runs (and is tested) without a rendering backend.

pub mod audio;
pub mod common;
pub mod components;
pub mod engine;
pub mod input;
pub mod services;
pub mod text_match;
pub mod theme;

// Re-export commonly used items
pub use components::dropdown::{Dropdown, DropdownMenu, DropdownStyle, MenuState};
pub use components::menu_item::MenuItem;
pub use services::Services;
pub use theme::Theme;

/// Convenience prelude for application development
pub mod prelude {
    pub use crate::audio::{AudioService, Cue, NullAudio};
    pub use crate::common::{Direction, Visibility};
    pub use crate::components::dropdown::{
        Dropdown, DropdownHeader, DropdownMenu, DropdownStyle, HeaderVisual, ListenerId,
        MenuState, SearchFilter,
    };
    pub use crate::components::menu_item::{ItemRow, MenuItem, RowHighlight, RowStyle};
    pub use crate::engine::{AnimatedProperty, HeadlessScene, LayerId, Scene, Transition};
    pub use crate::input::DismissAction;
    pub use crate::services::Services;
    pub use crate::text_match::{SubstringMatch, TextMatch};
    pub use crate::theme::{Color, Theme};
}
