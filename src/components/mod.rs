pub mod dropdown;
pub mod menu_item;
