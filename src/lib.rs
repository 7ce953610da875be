//! # pinmap
//!
//! A small, async-aware orchestration layer that renders a collection of
//! named addresses onto a Leaflet-style map: addresses that already carry a
//! coordinate pair are pinned directly, everything else is resolved through
//! an external geocoding service, and each resolved location gets a marker,
//! a popup built from a fixed HTML template, and (optionally) a tooltip.
//!
//! The actual map canvas is abstracted behind [`traits::MapBackend`], so the
//! crate can drive any provider that exposes Leaflet-shaped primitives
//! (markers, popups, tooltips, tile layers, zoom controls).

pub mod core;
pub mod data;
pub mod geocode;
pub mod layers;
pub mod prelude;
pub mod traits;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{InfoWindowOptions, InfoWindowSettings, MapOptions, Settings},
    geo::LatLng,
    map::{MapWrapper, Registries},
};

pub use crate::data::address::{AddressRecord, Coordinate};

pub use crate::geocode::client::{
    GeocodeCandidate, GeocodeError, GeocodeQuery, GeocodeResponse, Geocoder, HttpGeocoder,
};

pub use crate::layers::{marker::place_marker, popup::render_popup};

pub use crate::traits::{
    ControlPosition, MapBackend, MarkerIcon, MarkerStyle, PopupOptions, TileLayerOptions,
    ViewportOptions,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Geocode error: {0}")]
    Geocode(#[from] crate::geocode::client::GeocodeError),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
