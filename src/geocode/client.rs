//! Geocoding client
//!
//! One request per call, no retries, no caching, no rate limiting. Policy
//! around failures (logging, skipping the record) lives in the orchestrator;
//! this module only reports what the service said.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;

/// Shared async HTTP client for geocode lookups
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("pinmap/0.1.0")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("failed to build reqwest async client")
});

/// One lookup request: the free-text address plus the listing number derived
/// from the record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeocodeQuery {
    pub address: String,
    #[serde(rename = "mlsNumber")]
    pub mls_number: String,
}

/// A single candidate location returned by the service, best match first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub location: LatLng,
}

/// Service response body. `results` is ordered best-match-first; `errors`
/// carries the service's structured diagnostics when `success` is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

impl GeocodeResponse {
    /// The coordinate of the best candidate, if any.
    pub fn best_location(&self) -> Option<LatLng> {
        self.results.first().map(|candidate| candidate.location)
    }
}

/// Transport-level geocoding failures. A `success: false` body is not an
/// error at this layer; it comes back as a normal [`GeocodeResponse`].
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocode request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocode endpoint returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        /// Raw response body, kept verbatim for diagnostics.
        body: String,
    },

    #[error("malformed geocode response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Resolves a free-text address into coordinate candidates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse, GeocodeError>;
}

/// HTTP implementation talking to the listing geocode endpoint.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    endpoint: String,
}

impl HttpGeocoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse, GeocodeError> {
        let response = HTTP_CLIENT
            .get(&self.endpoint)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Http { status, body });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
