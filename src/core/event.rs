//! Event- und City-Datenmodell.
//!
//! Events sind read-only Eingangsdaten für das Marker-Widget. Das Widget
//! hält sie als `Arc<Event>`; die Zuordnung Event → Marker läuft über die
//! `MarkerRegistry` (Event-ID als Schlüssel) statt über eine Rückreferenz
//! am Event selbst.

use serde::{Deserialize, Serialize};

use super::geo::LatLng;

/// Stadt, in der ein Event stattfindet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Anzeigename
    pub name: String,
    /// Geo-Position des Stadtzentrums
    pub position: LatLng,
}

impl City {
    /// Erstellt eine neue Stadt.
    pub fn new(name: impl Into<String>, position: LatLng) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Ein Event auf der Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Eindeutige Event-ID
    pub id: u64,
    /// Titel (Marker-Tooltip und Info-Fenster-Inhalt)
    pub title: String,
    /// Austragungsstadt
    pub city: City,
    /// Frei vergebene Tags
    pub tags: Vec<String>,
}

impl Event {
    /// Erstellt ein neues Event.
    pub fn new(id: u64, title: impl Into<String>, city: City, tags: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            city,
            tags,
        }
    }

    /// Gibt `true` zurück, wenn das Event mindestens ein Tag trägt.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_tags_reflects_tag_list() {
        let city = City::new("Berlin", LatLng::new(52.52, 13.405));
        let plain = Event::new(1, "Lesung", city.clone(), vec![]);
        let tagged = Event::new(2, "Konzert", city, vec!["musik".into()]);

        assert!(!plain.has_tags());
        assert!(tagged.has_tags());
    }
}
