//! Marker placement engine
//!
//! One call per resolved address: create the marker, style it, bind the
//! popup (and tooltip, when requested), and register both handles under the
//! record id. Backend errors propagate to the caller; nothing is suppressed
//! here.

use log::debug;

use crate::{
    core::{constants, geo::LatLng, map::Registries},
    data::address::AddressRecord,
    layers::popup::render_popup,
    traits::{MapBackend, MarkerIcon, MarkerStyle, PopupOptions},
    Result, Settings,
};

/// Place a marker and its popup for one resolved record.
///
/// Styling starts from the global `marker_opts`; a per-record `icon` is
/// applied on top for this marker only and never mutates the global map.
pub fn place_marker<B: MapBackend>(
    backend: &mut B,
    settings: &Settings,
    registries: &mut Registries<B>,
    position: LatLng,
    record: &AddressRecord,
) -> Result<()> {
    let mut style = MarkerStyle::from_options(&settings.marker_opts);
    if let Some(icon_url) = &record.icon {
        style.icon = Some(MarkerIcon::new(
            icon_url.clone(),
            constants::MARKER_ICON_SIZE,
        ));
    }

    let marker = backend.add_marker(position, &style)?;

    let content = render_popup(record);
    let popup_opts = PopupOptions {
        max_width: settings.info_window.max_width,
    };
    let popup = backend.bind_popup(&marker, &content, &popup_opts)?;

    if settings.info_window.open {
        backend.open_popup(&popup)?;
    }

    if let Some(label) = &record.marker_label {
        // Bind to the marker created above, never a stale handle.
        backend.bind_tooltip(&marker, label)?;
        backend.open_tooltip(&marker)?;
    }

    debug!("placed marker for {} at {}", record.id, position);
    registries.insert(&record.id, marker, popup);
    Ok(())
}
