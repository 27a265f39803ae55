/// Common types shared across components

/// Layout axis of a component.
///
/// For the dropdown menu this is the axis items stack along, which is also
/// the axis that gets the animated resize; the cross axis always snaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Vertical
    }
}

/// Visibility of a transient overlay (e.g. the search filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Hidden
    }
}
