pub mod categories;
pub mod remarks;
pub mod wish_items;
