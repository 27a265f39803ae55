use crate::common::Direction;
use crate::components::menu_item::RowStyle;
use crate::engine::Transition;
use crate::theme::Theme;

/// Visual configuration for the dropdown widget
///
/// Colors come from the injected theme (or the built-in fallback palette);
/// everything here is resolved once at construction and handed to the
/// components.
#[derive(Clone, Debug)]
pub struct DropdownStyle {
    // === Dimensions ===
    /// Cross-axis size of the menu; snapped, never animated.
    pub menu_width: f32,

    pub header_height: f32,
    pub corner_radius: f32,

    /// Padding around the item rows inside the menu body.
    pub content_padding: f32,

    /// Header alpha while the widget is disabled.
    pub disabled_alpha: f32,

    /// Axis the item rows stack along; also the animated resize axis.
    pub direction: Direction,

    // === Transitions ===
    /// Menu fade in/out.
    pub fade: Transition,

    /// Scroll-axis resize of the menu body.
    pub resize: Transition,

    /// Header chevron flip.
    pub chevron_flip: Transition,

    // === Row styling ===
    pub row: RowStyle,

    // === Search filter ===
    pub search_placeholder: String,
}

impl DropdownStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            menu_width: 220.0,
            header_height: 40.0,
            corner_radius: 5.0,
            content_padding: 5.0,
            disabled_alpha: 0.3,
            direction: Direction::Vertical,

            fade: Transition::out_quint(300),
            resize: Transition::out_quint(300),
            chevron_flip: Transition::out_quint(300),

            row: RowStyle::from_theme(theme),
            search_placeholder: "type to search…".to_string(),
        }
    }

    // === Builder API ===

    pub fn with_menu_width(mut self, width: f32) -> Self {
        self.menu_width = width;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_row(mut self, row: RowStyle) -> Self {
        self.row = row;
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
