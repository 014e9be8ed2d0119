// Mock implementations for testing
//
// Provides a mock geocode resolver that can be injected into DirectoryDeps
// (or used directly) in tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::common::GeocodeError;
use crate::kernel::traits::{BaseGeocoder, BoundingBox, GeocodeCandidate};

/// Arguments captured from a resolve call
#[derive(Debug, Clone)]
pub struct ResolveCallArgs {
    pub query: String,
    pub bounds: Option<BoundingBox>,
}

/// Mock geocoder returning queued candidate lists, recording every call.
pub struct MockGeocoder {
    responses: Arc<Mutex<Vec<Result<Vec<GeocodeCandidate>, GeocodeError>>>>,
    calls: Arc<Mutex<Vec<ResolveCallArgs>>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful candidate list to be returned
    pub fn with_candidates(self, candidates: Vec<GeocodeCandidate>) -> Self {
        self.responses.lock().unwrap().push(Ok(candidates));
        self
    }

    /// Queue an empty result (resolver found no match)
    pub fn with_no_match(self) -> Self {
        self.responses.lock().unwrap().push(Ok(Vec::new()));
        self
    }

    /// Queue a service failure
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(GeocodeError::Service(message.to_string())));
        self
    }

    /// Queries captured from resolve calls
    pub fn calls(&self) -> Vec<ResolveCallArgs> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGeocoder for MockGeocoder {
    async fn resolve(
        &self,
        query: &str,
        bounds: Option<BoundingBox>,
    ) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        self.calls.lock().unwrap().push(ResolveCallArgs {
            query: query.to_string(),
            bounds,
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(Vec::new());
        }
        responses.remove(0)
    }
}
