//! Log-Backend: schreibt alle Karten-Aufrufe über das `log`-Crate.
//!
//! Dient als Stand-in, solange keine echte Karten-Bibliothek angebunden
//! ist (Demo-Binary, manuelle Tests).

use super::backend::{InfoWindowHandle, MapLibrary, MapView, MarkerDescriptor, MarkerHandle};
use crate::core::IconSpec;

/// Kartensicht mit festem Zoom-Faktor.
#[derive(Debug, Clone, Copy)]
pub struct LogMapView {
    zoom: f64,
}

impl LogMapView {
    /// Erstellt eine Kartensicht mit dem angegebenen Zoom.
    pub fn new(zoom: f64) -> Self {
        Self { zoom }
    }
}

impl MapView for LogMapView {
    fn zoom(&self) -> f64 {
        self.zoom
    }
}

/// Karten-Bibliothek, die alle Aufrufe nur protokolliert.
#[derive(Debug, Default)]
pub struct LogMapLibrary {
    created_markers: usize,
}

impl LogMapLibrary {
    /// Erstellt ein leeres Log-Backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl bisher erzeugter Marker.
    pub fn created_markers(&self) -> usize {
        self.created_markers
    }
}

impl MapLibrary for LogMapLibrary {
    fn create_marker(&mut self, descriptor: &MarkerDescriptor) -> Box<dyn MarkerHandle> {
        self.created_markers += 1;
        log::info!(
            "Marker '{}' erzeugt bei ({:.4}, {:.4}), attached={}, icon={}",
            descriptor.title,
            descriptor.position.lat,
            descriptor.position.lng,
            descriptor.attached,
            descriptor.icon.url
        );
        Box::new(LogMarkerHandle {
            title: descriptor.title.clone(),
        })
    }

    fn create_info_window(&mut self, content: &str) -> Box<dyn InfoWindowHandle> {
        log::info!("Info-Fenster erzeugt: '{content}'");
        Box::new(LogInfoWindowHandle {
            content: content.to_string(),
        })
    }
}

struct LogMarkerHandle {
    title: String,
}

impl MarkerHandle for LogMarkerHandle {
    fn set_icon(&mut self, icon: &IconSpec) {
        log::debug!("Marker '{}': Icon → {}", self.title, icon.url);
    }

    fn set_z_index(&mut self, z_index: i32) {
        log::debug!("Marker '{}': Z-Index → {z_index}", self.title);
    }

    fn set_visible(&mut self, visible: bool) {
        log::debug!("Marker '{}': sichtbar → {visible}", self.title);
    }
}

impl Drop for LogMarkerHandle {
    fn drop(&mut self) {
        log::debug!("Marker '{}' freigegeben", self.title);
    }
}

struct LogInfoWindowHandle {
    content: String,
}

impl InfoWindowHandle for LogInfoWindowHandle {
    fn open(&mut self) {
        log::debug!("Info-Fenster geöffnet: '{}'", self.content);
    }

    fn close(&mut self) {
        log::debug!("Info-Fenster geschlossen: '{}'", self.content);
    }
}
