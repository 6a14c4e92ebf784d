//! Trait-Schnittstelle zur darunterliegenden Karten-Bibliothek.
//!
//! Das Widget kennt die konkrete Karten-Implementierung nicht. Es erzeugt
//! Marker- und Info-Fenster-Handles über `MapLibrary` und steuert sie
//! danach ausschließlich über die Handle-Traits. Alle Aufrufe gelten als
//! unfehlbar; Fehler der Karten-Bibliothek sind nicht Sache des Widgets.

use crate::core::{IconSpec, LatLng};

/// Sicht auf die aktuell dargestellte Karte.
pub trait MapView {
    /// Aktueller Zoom-Faktor der Karte.
    fn zoom(&self) -> f64;
}

/// Parameter für die Marker-Erzeugung, gespiegelt auf den
/// Create-Marker-Aufruf der Karten-Bibliothek.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    /// Tooltip-Titel
    pub title: String,
    /// Geo-Position
    pub position: LatLng,
    /// Marker per Maus verschiebbar
    pub draggable: bool,
    /// Anfangs sichtbar
    pub visible: bool,
    /// Anfangs-Icon
    pub icon: IconSpec,
    /// An eine Karte gebunden oder freistehend erzeugt
    pub attached: bool,
}

/// Fabrik für Marker- und Info-Fenster-Handles.
pub trait MapLibrary {
    /// Erzeugt einen Karten-Marker.
    fn create_marker(&mut self, descriptor: &MarkerDescriptor) -> Box<dyn MarkerHandle>;

    /// Erzeugt ein Info-Fenster mit Text-Inhalt (anfangs geschlossen).
    fn create_info_window(&mut self, content: &str) -> Box<dyn InfoWindowHandle>;
}

/// Handle auf einen erzeugten Karten-Marker.
///
/// Implementierungen geben Bibliotheks-Ressourcen in `Drop` frei.
pub trait MarkerHandle {
    /// Setzt das dargestellte Icon.
    fn set_icon(&mut self, icon: &IconSpec);

    /// Setzt die Stapel-Ebene (höher = weiter vorn).
    fn set_z_index(&mut self, z_index: i32);

    /// Schaltet die Sichtbarkeit um.
    fn set_visible(&mut self, visible: bool);
}

/// Handle auf ein erzeugtes Info-Fenster.
pub trait InfoWindowHandle {
    /// Öffnet das Fenster an der Marker-Position.
    fn open(&mut self);

    /// Schließt das Fenster.
    fn close(&mut self);
}
