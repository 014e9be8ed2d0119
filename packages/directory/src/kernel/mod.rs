// Infrastructure layer: collaborator traits, the Nominatim geocoder, and
// the dependency container injected into domain actions.

pub mod deps;
pub mod geocoder;
pub mod test_dependencies;
pub mod traits;

pub use deps::DirectoryDeps;
pub use geocoder::NominatimGeocoder;
pub use traits::{BaseGeocoder, BoundingBox, GeocodeCandidate};
