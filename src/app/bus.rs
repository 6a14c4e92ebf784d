//! Publish/Subscribe-Bus für Karten-Benachrichtigungen.
//!
//! Der Bus wird explizit übergeben (keine globale Instanz), damit Tests
//! und mehrere Karten-Instanzen isoliert bleiben. Listener leben für die
//! Lebensdauer des Busses; einen Unsubscribe-Pfad gibt es nicht.

use super::events::MapEvent;

/// Listener-Callback für Bus-Events.
pub type MapEventListener = Box<dyn FnMut(&MapEvent)>;

/// Synchroner Publish/Subscribe-Bus.
///
/// Veröffentlichte Events werden zusätzlich in einer begrenzten Historie
/// festgehalten (Debugging und Tests).
#[derive(Default)]
pub struct MapEventBus {
    listeners: Vec<MapEventListener>,
    history: Vec<MapEvent>,
}

impl MapEventBus {
    const MAX_HISTORY: usize = 1000;

    /// Erstellt einen Bus ohne Listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener für alle künftigen Events.
    pub fn subscribe(&mut self, listener: impl FnMut(&MapEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Anzahl registrierter Listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Veröffentlicht ein Event an alle Listener in Registrierungs-Reihenfolge.
    /// Begrenzt die Historie auf MAX_HISTORY, ältere Einträge werden verworfen.
    pub fn publish(&mut self, event: MapEvent) {
        log::debug!("MapEvent: {event:?}");

        if self.history.len() >= Self::MAX_HISTORY {
            self.history.drain(..Self::MAX_HISTORY / 2);
        }
        self.history.push(event.clone());

        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Liefert eine read-only Sicht auf die Event-Historie.
    pub fn history(&self) -> &[MapEvent] {
        &self.history
    }

    /// Anzahl der Events in der Historie.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
