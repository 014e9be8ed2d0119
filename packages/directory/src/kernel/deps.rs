//! Dependency container for domain actions (using traits for testability)
//!
//! All external services use trait abstractions to enable testing; the
//! database pool is shared directly, matching the query-in-models layout.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::geocoder::NominatimGeocoder;
use crate::kernel::traits::BaseGeocoder;

/// Dependencies accessible to domain actions
#[derive(Clone)]
pub struct DirectoryDeps {
    pub db_pool: PgPool,
    pub geocoder: Arc<dyn BaseGeocoder>,
}

impl DirectoryDeps {
    pub fn new(db_pool: PgPool, geocoder: Arc<dyn BaseGeocoder>) -> Self {
        Self { db_pool, geocoder }
    }

    /// Production wiring: Nominatim resolver with the configured bounded
    /// timeout.
    pub fn from_config(config: &Config, db_pool: PgPool) -> Self {
        Self::new(db_pool, Arc::new(NominatimGeocoder::from_config(config)))
    }
}
