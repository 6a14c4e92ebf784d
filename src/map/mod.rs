//! Schnittstelle zur Karten-Bibliothek samt Log-Backend.

pub mod backend;
pub mod logging;

pub use backend::{InfoWindowHandle, MapLibrary, MapView, MarkerDescriptor, MarkerHandle};
pub use logging::{LogMapLibrary, LogMapView};
