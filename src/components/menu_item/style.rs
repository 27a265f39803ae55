use crate::theme::{Color, Theme};

/// Visual styling for an item row
#[derive(Clone, Debug)]
pub struct RowStyle {
    // === Dimensions ===
    pub height: f32,
    pub horizontal_padding: f32,
    pub corner_radius: f32,

    // === Colors ===
    /// Highlight shown while the row is pre-selected (keyboard/pointer
    /// focus).
    pub hover_color: Color,

    /// Highlight shown while the row is bound to the committed value.
    pub selection_color: Color,

    pub text_color_normal: Color,
    pub text_color_disabled: Color,
}

impl RowStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            height: 22.0,
            horizontal_padding: 10.0,
            corner_radius: 5.0,

            hover_color: theme.accent,
            selection_color: theme.selection,
            text_color_normal: theme.text_primary,
            text_color_disabled: theme.text_disabled,
        }
    }

    // === Builder API ===

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }
}

impl Default for RowStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
