//! Prelude module for common pinmap types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use pinmap::prelude::*;`

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

pub use crate::{Error as MapError, Result};

pub use std::sync::{Arc, Mutex};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
