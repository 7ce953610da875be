//! Address resolution orchestrator
//!
//! [`MapWrapper::new`] sets up the viewport synchronously, then walks the
//! address collection once: records that already carry coordinates are pinned
//! on the spot, everything else becomes an independent tokio task that
//! geocodes and places on success. Records never wait on each other and a
//! failed resolution only costs that one record a warning.
//!
//! Must be constructed inside a tokio runtime; geocode resolution tasks are
//! spawned on it. There is no cancellation: dropping the wrapper detaches any
//! in-flight lookups, which still place their markers when they land.

use std::sync::{Arc, Mutex};

use futures::future::join_all;
use log::warn;
use tokio::task::JoinHandle;

use crate::{
    core::{
        config::{MapOptions, Settings},
        constants,
    },
    data::address::AddressRecord,
    geocode::client::{GeocodeQuery, Geocoder},
    layers::marker::place_marker,
    prelude::HashMap,
    traits::{MapBackend, TileLayerOptions, ViewportOptions},
    Result,
};

/// Owned marker and popup handles, keyed by address record id.
///
/// Both maps grow monotonically and always hold the same key set: entries
/// are created in pairs, exactly once per id, at the moment the address is
/// placed. Teardown is the caller's concern.
pub struct Registries<B: MapBackend> {
    markers: HashMap<String, B::Marker>,
    popups: HashMap<String, B::Popup>,
}

impl<B: MapBackend> Registries<B> {
    fn new() -> Self {
        Self {
            markers: HashMap::default(),
            popups: HashMap::default(),
        }
    }

    pub(crate) fn insert(&mut self, id: &str, marker: B::Marker, popup: B::Popup) {
        self.markers.insert(id.to_string(), marker);
        self.popups.insert(id.to_string(), popup);
    }

    pub fn marker(&self, id: &str) -> Option<B::Marker> {
        self.markers.get(id).cloned()
    }

    pub fn popup(&self, id: &str) -> Option<B::Popup> {
        self.popups.get(id).cloned()
    }

    pub fn marker_ids(&self) -> Vec<String> {
        self.markers.keys().cloned().collect()
    }

    pub fn popup_ids(&self) -> Vec<String> {
        self.popups.keys().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.markers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Handle returned by the construction API: the live backend, the resolved
/// settings, and read-only access to the marker/popup registries.
pub struct MapWrapper<B: MapBackend> {
    container: String,
    backend: Arc<Mutex<B>>,
    options: Settings,
    registries: Arc<Mutex<Registries<B>>>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl<B: MapBackend> MapWrapper<B> {
    /// Initialize the map and start resolving addresses.
    ///
    /// Synchronous part: resolve settings, bind the backend to `selector`
    /// (a leading `#` is stripped), apply the viewport, attach the OSM tile
    /// layer and the zoom control, and pin every record that already has
    /// coordinates. Asynchronous part: one spawned task per remaining record,
    /// geocoding and placing independently, in whatever order the network
    /// answers.
    pub fn new<G>(
        selector: &str,
        addresses: Vec<AddressRecord>,
        options: MapOptions,
        backend: B,
        geocoder: G,
    ) -> Result<Self>
    where
        G: Geocoder + 'static,
    {
        let container = selector.trim_start_matches('#').to_string();
        let settings = Settings::resolve(&options, addresses.len());
        let backend = Arc::new(Mutex::new(backend));
        let registries = Arc::new(Mutex::new(Registries::new()));
        let geocoder: Arc<dyn Geocoder> = Arc::new(geocoder);

        {
            let mut map = backend.lock().expect("backend lock poisoned");
            let viewport = ViewportOptions {
                center: settings.center,
                zoom_level: settings.zoom_level,
                scroll_wheel_zoom: settings.scroll_wheel_zoom,
                zoom_control: false,
            };
            map.init_view(&container, &viewport)?;
            map.add_tile_layer(
                constants::TILE_URL_TEMPLATE,
                &TileLayerOptions {
                    attribution: constants::TILE_ATTRIBUTION.to_string(),
                    max_zoom: constants::TILE_MAX_ZOOM,
                },
            )?;
            map.add_zoom_control(settings.zoom_position)?;
        }

        let mut pending = Vec::new();
        for mut record in addresses {
            if record.has_coordinates() {
                let position = record.coerce_coordinates();
                let mut map = backend.lock().expect("backend lock poisoned");
                let mut regs = registries.lock().expect("registry lock poisoned");
                place_marker(&mut *map, &settings, &mut regs, position, &record)?;
            } else {
                pending.push(tokio::spawn(resolve_and_place(
                    Arc::clone(&backend),
                    Arc::clone(&registries),
                    settings.clone(),
                    Arc::clone(&geocoder),
                    record,
                )));
            }
        }

        Ok(Self {
            container,
            backend,
            options: settings,
            registries,
            pending: Mutex::new(pending),
        })
    }

    /// The container the map was bound to, without any selector prefix.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// The rendering backend, shared with any in-flight resolution tasks.
    pub fn map(&self) -> Arc<Mutex<B>> {
        Arc::clone(&self.backend)
    }

    /// The settings resolved at construction time.
    pub fn options(&self) -> &Settings {
        &self.options
    }

    /// Read-only view of the marker/popup registries.
    pub fn with_registries<R>(&self, f: impl FnOnce(&Registries<B>) -> R) -> R {
        let regs = self.registries.lock().expect("registry lock poisoned");
        f(&regs)
    }

    /// Clone of the marker handle registered for `id`, if that address has
    /// been placed.
    pub fn marker(&self, id: &str) -> Option<B::Marker> {
        self.with_registries(|regs| regs.marker(id))
    }

    /// Clone of the popup handle registered for `id`.
    pub fn popup(&self, id: &str) -> Option<B::Popup> {
        self.with_registries(|regs| regs.popup(id))
    }

    /// Ids of all addresses placed so far.
    pub fn marker_ids(&self) -> Vec<String> {
        self.with_registries(Registries::marker_ids)
    }

    /// Resolves once every resolution task dispatched at construction has
    /// finished, successfully or not. Purely observational; placement happens
    /// whether or not anyone awaits this.
    pub async fn settled(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut pending = self.pending.lock().expect("pending lock poisoned");
            pending.drain(..).collect()
        };
        for joined in join_all(handles).await {
            if let Err(err) = joined {
                warn!("address resolution task failed to join: {err}");
            }
        }
    }
}

/// Per-record resolution task: one geocode call, then either placement or a
/// warning. Failures stay local to this record.
async fn resolve_and_place<B: MapBackend>(
    backend: Arc<Mutex<B>>,
    registries: Arc<Mutex<Registries<B>>>,
    settings: Settings,
    geocoder: Arc<dyn Geocoder>,
    record: AddressRecord,
) {
    let query = GeocodeQuery {
        address: record.address.clone(),
        mls_number: record.lookup_key(),
    };

    match geocoder.geocode(&query).await {
        Ok(response) => {
            if response.success {
                if let Some(location) = response.best_location() {
                    let mut map = backend.lock().expect("backend lock poisoned");
                    let mut regs = registries.lock().expect("registry lock poisoned");
                    if let Err(err) =
                        place_marker(&mut *map, &settings, &mut regs, location, &record)
                    {
                        warn!("failed to place marker for {}: {err}", record.id);
                    }
                    return;
                }
            }
            if response.errors.is_empty() {
                warn!(
                    "geocode was not successful for {} ({})",
                    record.id, record.address
                );
            } else {
                let detail = serde_json::to_string(&response.errors)
                    .unwrap_or_else(|_| format!("{:?}", response.errors));
                warn!("geocode was not successful for {}: {detail}", record.id);
            }
        }
        Err(err) => {
            warn!(
                "geocode request failed for {} ({}): {err}",
                record.id, record.address
            );
        }
    }
}
