mod data;
mod row;
mod style;

pub use data::MenuItem;
pub use row::{ItemRow, RowFlags, RowHighlight};
pub use style::RowStyle;
