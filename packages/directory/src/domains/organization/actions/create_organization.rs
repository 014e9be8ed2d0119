//! Create/update/delete actions for organization records.

use tracing::{debug, info};
use uuid::Uuid;

use crate::common::DirectoryError;
use crate::domains::organization::models::Organization;
use crate::domains::organization::validation::OrganizationAttributes;
use crate::kernel::DirectoryDeps;

/// Validate raw attributes and insert a new organization.
///
/// Geocoding does not run here: coordinates are populated on demand via
/// `geocode_organization`.
pub async fn create_organization(
    deps: &DirectoryDeps,
    attributes: OrganizationAttributes,
) -> Result<Organization, DirectoryError> {
    let valid = attributes.validate()?;

    let created = Organization::insert(&valid, &deps.db_pool).await?;
    info!("Organization created: {} ({})", created.name, created.id);
    Ok(created)
}

/// Validate raw attributes and update an existing organization. The stored
/// coordinates are left untouched.
pub async fn update_organization(
    deps: &DirectoryDeps,
    id: Uuid,
    attributes: OrganizationAttributes,
) -> Result<Organization, DirectoryError> {
    let valid = attributes.validate()?;

    let updated = Organization::update(id, &valid, &deps.db_pool).await?;
    debug!("Organization updated: {}", updated.id);
    Ok(updated)
}

pub async fn delete_organization(deps: &DirectoryDeps, id: Uuid) -> Result<(), DirectoryError> {
    Organization::delete(id, &deps.db_pool).await?;
    info!("Organization deleted: {}", id);
    Ok(())
}
