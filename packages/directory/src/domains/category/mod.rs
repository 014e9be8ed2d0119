pub mod data;
pub mod models;

pub use data::CategoryData;
pub use models::{Category, CategoryWithParent};
