//! Rendering-provider abstraction
//!
//! The orchestrator only needs a small, fixed set of Leaflet-shaped
//! capabilities from whatever actually draws the map. [`MapBackend`] captures
//! exactly that surface so the core logic can be driven against a real
//! renderer or a recording test double.

use serde::{Deserialize, Serialize};

use crate::{core::geo::LatLng, prelude::HashMap, Result};

/// Corner of the map a control is docked to, Leaflet-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Viewport parameters applied when the map canvas is created.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportOptions {
    pub center: LatLng,
    pub zoom_level: f64,
    pub scroll_wheel_zoom: bool,
    /// The built-in zoom control is disabled at construction; the
    /// orchestrator adds its own at the configured position afterwards.
    pub zoom_control: bool,
}

/// Options for the raster tile layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerOptions {
    pub attribution: String,
    pub max_zoom: f64,
}

/// An icon reference overriding the provider's default marker glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub icon_url: String,
    /// (width, height) in pixels.
    pub icon_size: (u32, u32),
}

impl MarkerIcon {
    pub fn new(icon_url: impl Into<String>, icon_size: (u32, u32)) -> Self {
        Self {
            icon_url: icon_url.into(),
            icon_size,
        }
    }
}

/// Styling handed to the backend when a marker is created.
///
/// `options` carries provider-specific keys verbatim (the global
/// `marker_opts` from [`crate::Settings`]); `icon` is the per-address
/// override, applied on top without touching the global map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStyle {
    pub options: HashMap<String, serde_json::Value>,
    pub icon: Option<MarkerIcon>,
}

impl MarkerStyle {
    pub fn from_options(options: &HashMap<String, serde_json::Value>) -> Self {
        Self {
            options: options.clone(),
            icon: None,
        }
    }
}

/// Options for a popup bound to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupOptions {
    pub max_width: u32,
}

/// The fixed set of capabilities the orchestrator calls on the rendering
/// provider. Handles returned for markers and popups are opaque to this
/// crate; they are only cloned into the registries and passed back to the
/// backend for popup/tooltip operations.
pub trait MapBackend: Send + 'static {
    type Marker: Clone + Send + 'static;
    type Popup: Clone + Send + 'static;

    /// Bind the map to a container and apply the initial viewport.
    fn init_view(&mut self, container: &str, viewport: &ViewportOptions) -> Result<()>;

    /// Attach a raster tile layer given a URL template.
    fn add_tile_layer(&mut self, url_template: &str, options: &TileLayerOptions) -> Result<()>;

    /// Add a zoom control docked at the given position.
    fn add_zoom_control(&mut self, position: ControlPosition) -> Result<()>;

    /// Create a marker at a coordinate with the given styling.
    fn add_marker(&mut self, position: LatLng, style: &MarkerStyle) -> Result<Self::Marker>;

    /// Create a popup with HTML content and bind it to a marker.
    fn bind_popup(
        &mut self,
        marker: &Self::Marker,
        content: &str,
        options: &PopupOptions,
    ) -> Result<Self::Popup>;

    /// Open a previously bound popup on the map.
    fn open_popup(&mut self, popup: &Self::Popup) -> Result<()>;

    /// Bind a hover tooltip to a marker.
    fn bind_tooltip(&mut self, marker: &Self::Marker, text: &str) -> Result<()>;

    /// Open the tooltip bound to a marker.
    fn open_tooltip(&mut self, marker: &Self::Marker) -> Result<()>;
}
