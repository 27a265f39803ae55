mod dropdown;
mod header;
mod menu;
mod search;
mod style;

pub use dropdown::Dropdown;
pub use header::{DropdownHeader, HeaderVisual};
pub use menu::{DropdownMenu, ListenerId, MenuState};
pub use search::SearchFilter;
pub use style::DropdownStyle;
