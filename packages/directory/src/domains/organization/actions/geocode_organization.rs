//! On-demand geocoding of a stored organization's address.

use tracing::{info, warn};
use uuid::Uuid;

use crate::common::DirectoryError;
use crate::domains::organization::models::{Organization, SMC_BOUNDS};
use crate::kernel::DirectoryDeps;

/// Resolve an organization's `address()` and store the first candidate's
/// coordinates. Fails with `GeocodeNotFound` when the resolver has no
/// candidate; the record is left unchanged on any failure.
pub async fn geocode_organization(
    deps: &DirectoryDeps,
    id: Uuid,
) -> Result<Organization, DirectoryError> {
    let organization = Organization::find_by_id(id, &deps.db_pool).await?;
    let address = organization.address();

    let candidates = deps.geocoder.resolve(&address, Some(SMC_BOUNDS)).await?;
    let first = match candidates.first() {
        Some(candidate) => candidate,
        None => {
            warn!(organization_id = %id, address = %address, "No geocode candidate for address");
            return Err(DirectoryError::GeocodeNotFound { query: address });
        }
    };

    let updated =
        Organization::set_coordinates(id, first.latitude, first.longitude, &deps.db_pool).await?;
    info!(
        "Organization {} geocoded to ({}, {})",
        id, first.latitude, first.longitude
    );
    Ok(updated)
}
