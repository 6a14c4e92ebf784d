//! Bus-Events und Marker-Interaktionen.
//!
//! `MarkerInteraction` sind rohe Eingaben, die die Karten-Schicht an
//! einen Marker meldet. `MapEvent` sind die daraus veröffentlichten
//! Benachrichtigungen auf dem `MapEventBus`.

use std::sync::Arc;

use crate::core::Event;

/// Rohe Interaktion der Karten-Schicht mit einem Marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerInteraction {
    /// Marker angeklickt
    Clicked,
    /// Mauszeiger über den Marker bewegt
    PointerEntered,
    /// Mauszeiger hat den Marker verlassen
    PointerExited,
    /// Info-Fenster über dessen Schließen-Aktion geschlossen
    InfoWindowClosed,
}

/// Auf dem Bus veröffentlichte Benachrichtigung.
#[derive(Debug, Clone)]
pub enum MapEvent {
    /// Event per Marker-Klick ausgewählt
    EventSelected {
        /// Das ausgewählte Event
        event: Arc<Event>,
    },
    /// Marker per Hover hervorgehoben
    EventHighlighted {
        /// Das hervorgehobene Event
        event: Arc<Event>,
    },
    /// Hervorhebung wieder aufgehoben
    EventUnhighlighted {
        /// Das betroffene Event
        event: Arc<Event>,
    },
    /// Auswahl über das Info-Fenster aufgehoben (ohne Payload)
    EventDeselected,
}
