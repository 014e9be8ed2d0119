mod create_organization;
mod find_near;
mod geocode_organization;

pub use create_organization::{create_organization, delete_organization, update_organization};
pub use find_near::{find_near, resolve_search_point};
pub use geocode_organization::geocode_organization;
