use bitflags::bitflags;

use super::{MenuItem, RowStyle};
use crate::theme::Color;

bitflags! {
    /// Interaction sub-state of one item row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// Pointer is over the row.
        const HOVERED = 1 << 0;
        /// Row is the keyboard/pointer focus target of the open menu.
        const PRE_SELECTED = 1 << 1;
        /// Row is bound to the dropdown's committed value.
        const SELECTED = 1 << 2;
    }
}

/// Resolved highlight of a row, per the rendering rule:
/// hover color while pre-selected, selection color while merely selected,
/// and only opaque when one of the two applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowHighlight {
    pub color: Color,
    pub visible: bool,
}

/// Widget state for one menu item row.
///
/// Owns the interaction flags and styling of a single row; the menu enforces
/// the cross-row invariants (at most one pre-selected, at most one selected).
#[derive(Debug, Clone)]
pub struct ItemRow<T> {
    item: MenuItem<T>,
    flags: RowFlags,
    /// False while the search filter excludes this row.
    visible: bool,
    style: RowStyle,
}

impl<T> ItemRow<T> {
    pub fn new(item: MenuItem<T>, style: RowStyle) -> Self {
        Self {
            item,
            flags: RowFlags::empty(),
            visible: true,
            style,
        }
    }

    // === Getters ===

    pub fn item(&self) -> &MenuItem<T> {
        &self.item
    }

    pub fn style(&self) -> &RowStyle {
        &self.style
    }

    pub fn is_enabled(&self) -> bool {
        self.item.is_enabled()
    }

    pub fn is_hovered(&self) -> bool {
        self.flags.contains(RowFlags::HOVERED)
    }

    pub fn is_pre_selected(&self) -> bool {
        self.flags.contains(RowFlags::PRE_SELECTED)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(RowFlags::SELECTED)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the row can receive pre-selection or a commit right now.
    pub fn is_selectable(&self) -> bool {
        self.is_enabled() && self.visible
    }

    // === State Mutations ===

    pub fn set_hovered(&mut self, hovered: bool) {
        self.flags.set(RowFlags::HOVERED, hovered);
    }

    /// Pre-selection never lands on a disabled or filtered-out row.
    pub fn set_pre_selected(&mut self, pre_selected: bool) -> bool {
        if pre_selected && !self.is_selectable() {
            return false;
        }
        self.flags.set(RowFlags::PRE_SELECTED, pre_selected);
        true
    }

    /// A selected row is always enabled; marking a disabled row is rejected.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        if selected && !self.is_enabled() {
            return false;
        }
        self.flags.set(RowFlags::SELECTED, selected);
        true
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_hover_color(&mut self, color: Color) {
        self.style.hover_color = color;
    }

    pub fn set_selection_color(&mut self, color: Color) {
        self.style.selection_color = color;
    }

    // === Rendering Model ===

    /// Highlight this row should display right now.
    pub fn highlight(&self) -> RowHighlight {
        let color = if self.is_pre_selected() {
            self.style.hover_color
        } else {
            self.style.selection_color
        };
        RowHighlight {
            color,
            visible: self.is_pre_selected() || self.is_selected(),
        }
    }

    /// Label color for the row's current enabled state.
    pub fn text_color(&self) -> Color {
        if self.is_enabled() {
            self.style.text_color_normal
        } else {
            self.style.text_color_disabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(enabled: bool) -> ItemRow<i32> {
        let item = if enabled {
            MenuItem::new("Apple", 1)
        } else {
            MenuItem::new("Apple", 1).disabled()
        };
        ItemRow::new(item, RowStyle::default())
    }

    #[test]
    fn test_highlight_hidden_by_default() {
        let row = row(true);
        assert!(!row.highlight().visible);
    }

    #[test]
    fn test_pre_selection_uses_hover_color() {
        let mut row = row(true);
        assert!(row.set_pre_selected(true));

        let highlight = row.highlight();
        assert!(highlight.visible);
        assert_eq!(highlight.color, row.style().hover_color);
    }

    #[test]
    fn test_selection_uses_selection_color() {
        let mut row = row(true);
        assert!(row.set_selected(true));

        let highlight = row.highlight();
        assert!(highlight.visible);
        assert_eq!(highlight.color, row.style().selection_color);
    }

    #[test]
    fn test_pre_selection_wins_over_selection() {
        let mut row = row(true);
        row.set_selected(true);
        row.set_pre_selected(true);

        // Pre-selection shows the hover color even while selected.
        assert_eq!(row.highlight().color, row.style().hover_color);
    }

    #[test]
    fn test_disabled_row_rejects_selection() {
        let mut row = row(false);
        assert!(!row.set_pre_selected(true));
        assert!(!row.set_selected(true));
        assert!(!row.highlight().visible);
    }

    #[test]
    fn test_filtered_row_rejects_pre_selection() {
        let mut row = row(true);
        row.set_visible(false);
        assert!(!row.set_pre_selected(true));
    }

    #[test]
    fn test_color_updates_propagate_to_highlight() {
        let mut row = row(true);
        row.set_pre_selected(true);

        let accent = Color::from_rgb(0x12, 0x34, 0x56);
        row.set_hover_color(accent);
        assert_eq!(row.highlight().color, accent);
    }
}
