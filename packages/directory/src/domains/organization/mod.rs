pub mod actions;
pub mod models;
pub mod validation;

pub use models::Organization;
pub use validation::{OrganizationAttributes, ValidOrganization};
