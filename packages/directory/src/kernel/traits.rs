// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Domain
// functions (like "find organizations near an address") live in
// domains/*/actions and use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGeocoder)

use async_trait::async_trait;

use crate::common::GeocodeError;

/// A northeast/southwest coordinate pair constraining a geocode search to a
/// fixed geographic region. Passed to the resolver as a hint, not a hard
/// filter on results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub northeast: (f64, f64),
    pub southwest: (f64, f64),
}

/// One candidate returned by the geocode resolver. The first candidate is
/// authoritative when present.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl GeocodeCandidate {
    /// Ordered [latitude, longitude] pair, the shape stored on records.
    pub fn coordinates(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

// =============================================================================
// Geocoder Trait (Infrastructure - address-to-coordinates resolution)
// =============================================================================

#[async_trait]
pub trait BaseGeocoder: Send + Sync {
    /// Resolve a free-text address or location query into candidates.
    ///
    /// Returns an empty vec when the resolver has no match; transport or
    /// timeout failures surface as `GeocodeError::Service`.
    async fn resolve(
        &self,
        query: &str,
        bounds: Option<BoundingBox>,
    ) -> Result<Vec<GeocodeCandidate>, GeocodeError>;
}
