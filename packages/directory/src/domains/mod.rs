pub mod category;
pub mod organization;
