//! Geo-Koordinaten und Marker-Offsets.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Geographische Koordinate (Breiten-/Längengrad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine neue Koordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Koordinate als `DVec2` (x = lat, y = lng).
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.lat, self.lng)
    }
}

impl From<DVec2> for LatLng {
    fn from(v: DVec2) -> Self {
        Self { lat: v.x, lng: v.y }
    }
}

/// Verschiebung einer Koordinate in Breiten-/Längengrad.
///
/// Wird pro Marker einmalig bei der Konstruktion vergeben und bleibt
/// für die Lebensdauer des Markers unverändert (z.B. um mehrere Events
/// derselben Stadt nebeneinander darzustellen).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLngOffset {
    /// Breitengrad-Anteil
    pub lat: f64,
    /// Längengrad-Anteil
    pub lng: f64,
}

impl LatLngOffset {
    /// Erstellt einen neuen Offset.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Offset ohne Verschiebung.
    pub const ZERO: Self = Self { lat: 0.0, lng: 0.0 };
}

impl Add<LatLngOffset> for LatLng {
    type Output = LatLng;

    /// Komponentenweise exakte Gleitkomma-Addition.
    fn add(self, offset: LatLngOffset) -> LatLng {
        LatLng::from(self.as_dvec2() + DVec2::new(offset.lat, offset.lng))
    }
}
