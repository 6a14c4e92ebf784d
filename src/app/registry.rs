//! Registry für die Zuordnung Event-ID → Marker.
//!
//! Ersetzt eine Rückreferenz am Event-Objekt: Events bleiben read-only,
//! die Registry besitzt die Marker und hält die Einfüge-Reihenfolge
//! deterministisch fest.

use indexmap::IndexMap;

use super::marker::EventMarker;

/// Besitzt alle Marker einer Karte, Schlüssel ist die Event-ID.
#[derive(Default)]
pub struct MarkerRegistry {
    markers: IndexMap<u64, EventMarker>,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Marker unter seiner Event-ID ein.
    /// Gibt einen vorher registrierten Marker derselben ID zurück.
    pub fn insert(&mut self, marker: EventMarker) -> Option<EventMarker> {
        let id = marker.event().id;
        self.markers.insert(id, marker)
    }

    /// Gibt `true` zurück, wenn für die Event-ID ein Marker existiert.
    pub fn contains(&self, event_id: u64) -> bool {
        self.markers.contains_key(&event_id)
    }

    /// Marker zu einer Event-ID.
    pub fn get(&self, event_id: u64) -> Option<&EventMarker> {
        self.markers.get(&event_id)
    }

    /// Mutabler Marker zu einer Event-ID.
    pub fn get_mut(&mut self, event_id: u64) -> Option<&mut EventMarker> {
        self.markers.get_mut(&event_id)
    }

    /// Entfernt den Marker einer Event-ID und gibt ihn zurück.
    /// Die Einfüge-Reihenfolge der übrigen Marker bleibt erhalten.
    pub fn remove(&mut self, event_id: u64) -> Option<EventMarker> {
        self.markers.shift_remove(&event_id)
    }

    /// Anzahl registrierter Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker registriert sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iteriert über alle Marker in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&u64, &EventMarker)> {
        self.markers.iter()
    }

    /// Iteriert mutabel über alle Marker in Einfüge-Reihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&u64, &mut EventMarker)> {
        self.markers.iter_mut()
    }
}
