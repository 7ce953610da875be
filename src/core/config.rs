//! Display settings for one map instance
//!
//! Callers hand in a partial [`MapOptions`]; [`Settings::resolve`] overlays it
//! onto the documented defaults once, at initialization, and the result is
//! immutable for the lifetime of the map. The only count-sensitive default is
//! `info_window.open`: a single address opens its popup on load, a multi-pin
//! map keeps them closed unless the caller explicitly says otherwise.

use crate::{
    core::{constants, geo::LatLng},
    prelude::HashMap,
    traits::ControlPosition,
};

/// Caller-supplied overrides for the popup window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoWindowOptions {
    pub open: Option<bool>,
    pub max_width: Option<u32>,
}

/// Caller-supplied partial configuration. Every field is optional; anything
/// left `None` falls back to the default in [`Settings::resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOptions {
    pub info_window: InfoWindowOptions,
    pub zoom_level: Option<f64>,
    pub marker_opts: Option<HashMap<String, serde_json::Value>>,
    pub center: Option<LatLng>,
    pub zoom_position: Option<ControlPosition>,
    pub scroll_wheel_zoom: Option<bool>,
}

/// Resolved popup window settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoWindowSettings {
    pub open: bool,
    pub max_width: u32,
}

/// Fully resolved display settings, built once per map instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub info_window: InfoWindowSettings,
    pub zoom_level: f64,
    pub marker_opts: HashMap<String, serde_json::Value>,
    pub center: LatLng,
    pub zoom_position: ControlPosition,
    pub scroll_wheel_zoom: bool,
}

impl Settings {
    /// Overlay caller options onto the defaults. Cannot fail and has no side
    /// effects; `address_count` only influences the `info_window.open`
    /// default.
    pub fn resolve(options: &MapOptions, address_count: usize) -> Self {
        let default_open = address_count <= 1;
        Self {
            info_window: InfoWindowSettings {
                open: options.info_window.open.unwrap_or(default_open),
                max_width: options
                    .info_window
                    .max_width
                    .unwrap_or(constants::DEFAULT_POPUP_MAX_WIDTH),
            },
            zoom_level: options.zoom_level.unwrap_or(constants::DEFAULT_ZOOM_LEVEL),
            marker_opts: options.marker_opts.clone().unwrap_or_default(),
            center: options.center.unwrap_or(constants::DEFAULT_CENTER),
            zoom_position: options.zoom_position.unwrap_or_default(),
            scroll_wheel_zoom: options.scroll_wheel_zoom.unwrap_or(false),
        }
    }
}
