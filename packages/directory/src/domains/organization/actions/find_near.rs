//! Bounded proximity search.
//!
//! The resolver is hinted toward San Mateo County via `SMC_BOUNDS`; a query
//! it cannot resolve is an error distinct from "no organizations in range",
//! so callers can word the two outcomes differently.

use tracing::debug;

use crate::common::DirectoryError;
use crate::domains::organization::models::{Organization, SMC_BOUNDS};
use crate::kernel::traits::BaseGeocoder;
use crate::kernel::DirectoryDeps;

/// Resolve a free-text location to the authoritative search point (the
/// first candidate), hinted toward the county bounds.
pub async fn resolve_search_point(
    geocoder: &dyn BaseGeocoder,
    location: &str,
) -> Result<(f64, f64), DirectoryError> {
    let candidates = geocoder.resolve(location, Some(SMC_BOUNDS)).await?;

    let first = candidates
        .first()
        .ok_or_else(|| DirectoryError::GeocodeNotFound {
            query: location.to_string(),
        })?;

    debug!(
        "Resolved {:?} → ({}, {})",
        location, first.latitude, first.longitude
    );
    Ok((first.latitude, first.longitude))
}

/// All organizations within `radius_miles` of the resolved location,
/// nearest first.
pub async fn find_near(
    deps: &DirectoryDeps,
    location: &str,
    radius_miles: f64,
) -> Result<Vec<Organization>, DirectoryError> {
    let (latitude, longitude) = resolve_search_point(deps.geocoder.as_ref(), location).await?;

    let nearby =
        Organization::find_within_radius(latitude, longitude, radius_miles, &deps.db_pool).await?;
    Ok(nearby)
}
