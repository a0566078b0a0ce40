//! SeaORM entity definitions.

pub mod catalog_item;
pub mod user;
