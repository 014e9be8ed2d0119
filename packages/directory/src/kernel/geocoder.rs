//! Nominatim (OpenStreetMap) implementation of the geocode resolver.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::common::GeocodeError;
use crate::config::Config;
use crate::kernel::traits::{BaseGeocoder, BoundingBox, GeocodeCandidate};

/// Nominatim API response for geocoding
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocode resolver backed by the Nominatim search API.
///
/// Every request carries an explicit timeout; non-response is reported as a
/// service error rather than an empty result.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.geocoder_base_url.clone(),
            config.geocoder_user_agent.clone(),
            Duration::from_secs(config.geocoder_timeout_secs),
        )
    }

    /// Build the search URL for a query and optional bounding-box hint.
    ///
    /// The viewbox is sent without `bounded=1`: results outside the box are
    /// still returned, the box only biases the search.
    fn search_url(&self, query: &str, bounds: Option<BoundingBox>) -> String {
        let mut url = format!(
            "{}/search?q={}&format=json&limit=5",
            self.base_url,
            urlencoding::encode(query)
        );
        if let Some(b) = bounds {
            // Nominatim viewbox is <lon>,<lat>,<lon>,<lat> corner pairs
            url.push_str(&format!(
                "&viewbox={},{},{},{}",
                b.southwest.1, b.southwest.0, b.northeast.1, b.northeast.0
            ));
        }
        url
    }
}

#[async_trait]
impl BaseGeocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        query: &str,
        bounds: Option<BoundingBox>,
    ) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let url = self.search_url(query, bounds);

        debug!("Geocoding location: {}", query);

        let response: Vec<NominatimResponse> = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, query = %query, "Geocoding API request failed");
                GeocodeError::Service(format!("request failed: {}", e))
            })?
            .error_for_status()
            .map_err(|e| {
                error!(error = %e, query = %query, "Geocoding API returned an error status");
                GeocodeError::Service(format!("bad status: {}", e))
            })?
            .json()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to parse geocoding response");
                GeocodeError::Service(format!("invalid response: {}", e))
            })?;

        let mut candidates = Vec::with_capacity(response.len());
        for result in response {
            let latitude: f64 = result
                .lat
                .parse()
                .map_err(|e| GeocodeError::Service(format!("invalid latitude: {}", e)))?;
            let longitude: f64 = result
                .lon
                .parse()
                .map_err(|e| GeocodeError::Service(format!("invalid longitude: {}", e)))?;
            candidates.push(GeocodeCandidate {
                latitude,
                longitude,
                display_name: result.display_name,
            });
        }

        if candidates.is_empty() {
            warn!(query = %query, "Location not found by geocoding API");
        } else {
            debug!(
                "Geocoded {} → ({}, {})",
                query, candidates[0].latitude, candidates[0].longitude
            );
        }

        Ok(candidates)
    }
}
