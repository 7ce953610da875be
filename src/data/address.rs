//! Address records supplied by the caller
//!
//! Records arrive from listing feeds where coordinates are sometimes numbers
//! and sometimes strings, so `lat`/`lng` accept both and are coerced to
//! numeric form in place the first time they are used.

use serde::{Deserialize, Serialize};

use crate::core::{constants, geo::LatLng};

/// A coordinate value as it appears in caller data: either numeric or a
/// stringly-typed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Numeric view of the value. Unparseable text coerces to NaN; no range
    /// validation is applied.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }

    /// An empty string counts as "not supplied".
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

/// One location to display on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Unique within the collection; correlation key for markers and popups.
    pub id: String,
    /// Free-text address, required unless coordinates are supplied.
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imgalt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Image URL overriding the default marker glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Hover tooltip text for the marker.
    #[serde(default, rename = "markerLabel", skip_serializing_if = "Option::is_none")]
    pub marker_label: Option<String>,
}

impl AddressRecord {
    /// Whether this record short-circuits geocoding: both coordinates are
    /// supplied and the longitude is not an empty string. An empty-string
    /// longitude is treated as absent, never as an error.
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some()
            && self
                .lng
                .as_ref()
                .map_or(false, |lng| !lng.is_empty_text())
    }

    /// Coerce both coordinate fields to numeric form in place and return the
    /// resulting position. Only call after [`Self::has_coordinates`].
    pub fn coerce_coordinates(&mut self) -> LatLng {
        let lat = self.lat.as_ref().map(Coordinate::as_f64).unwrap_or(f64::NAN);
        let lng = self.lng.as_ref().map(Coordinate::as_f64).unwrap_or(f64::NAN);
        // Make sure they don't stay strings.
        self.lat = Some(Coordinate::Number(lat));
        self.lng = Some(Coordinate::Number(lng));
        LatLng::new(lat, lng)
    }

    /// Geocoder-side lookup key: the record id with one leading listing
    /// prefix occurrence removed.
    pub fn lookup_key(&self) -> String {
        self.id.replacen(constants::LOOKUP_KEY_PREFIX, "", 1)
    }
}
