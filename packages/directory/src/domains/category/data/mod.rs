pub mod category;

pub use category::CategoryData;
