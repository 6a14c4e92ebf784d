//! Events-Map-Marker Library.
//! Marker-Widget, Registry und Event-Bus als Library exportiert für
//! Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod shared;

pub use app::{EventMarker, MapEvent, MapEventBus, MarkerInteraction, MarkerRegistry};
pub use core::{select_icon, City, Event, IconSet, IconSpec, LatLng, LatLngOffset, MarkerIconKind};
pub use map::{
    InfoWindowHandle, LogMapLibrary, LogMapView, MapLibrary, MapView, MarkerDescriptor,
    MarkerHandle,
};
