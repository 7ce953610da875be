//! Crate-wide constants derived from Leaflet defaults and the upstream
//! listing-map conventions. Keeping them in a single place makes it easier to
//! tweak engine-wide magic numbers.

use crate::core::geo::LatLng;

/// OpenStreetMap raster tile URL template.
/// See <https://leafletjs.com/plugins.html#basemap-providers>.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution line attached to the tile layer.
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

/// Maximum zoom level offered by the tile layer.
pub const TILE_MAX_ZOOM: f64 = 14.0;

/// Default viewport center when the caller does not supply one.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 43.102_040,
    lng: -75.230_000,
};

/// Default viewport zoom level.
pub const DEFAULT_ZOOM_LEVEL: f64 = 12.0;

/// Default maximum popup width in pixels.
pub const DEFAULT_POPUP_MAX_WIDTH: u32 = 300;

/// Size applied to per-address override icons (width, height) in pixels.
pub const MARKER_ICON_SIZE: (u32, u32) = (38, 95);

/// Prefix stripped from a record id to derive the geocoder-side lookup key.
pub const LOOKUP_KEY_PREFIX: &str = "mls_";
