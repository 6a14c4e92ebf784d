//! Demo-Binary: fährt den Marker-Lebenszyklus gegen das Log-Backend.
//!
//! Erzeugt zwei Events, simuliert Hover/Klick und die imperativen
//! Zustandswechsel. Alle Karten-Aufrufe landen im Log.

use std::sync::Arc;

use events_map_marker::{
    City, Event, EventMarker, IconSet, LatLng, LatLngOffset, LogMapLibrary, LogMapView, MapEvent,
    MapEventBus, MarkerInteraction, MarkerRegistry,
};

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    log::info!(
        "Events-Map-Marker Demo v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let mut library = LogMapLibrary::new();
    let view = LogMapView::new(6.0);
    let mut bus = MapEventBus::new();
    let mut registry = MarkerRegistry::new();

    bus.subscribe(|event| match event {
        MapEvent::EventSelected { event } => log::info!("Ausgewählt: {}", event.title),
        MapEvent::EventHighlighted { event } => log::info!("Hervorgehoben: {}", event.title),
        MapEvent::EventUnhighlighted { event } => log::info!("Nicht mehr hervorgehoben: {}", event.title),
        MapEvent::EventDeselected => log::info!("Auswahl aufgehoben"),
    });

    let berlin = City::new("Berlin", LatLng::new(52.52, 13.405));
    let hamburg = City::new("Hamburg", LatLng::new(53.5511, 9.9937));

    let events = [
        Arc::new(Event::new(1, "Open-Air-Konzert", berlin, vec!["musik".into()])),
        Arc::new(Event::new(2, "Hafengeburtstag", hamburg, vec![])),
    ];

    for (i, event) in events.iter().enumerate() {
        let offset = LatLngOffset::new(0.0, 0.01 * i as f64);
        let marker = EventMarker::new(
            Arc::clone(event),
            Some(&view),
            offset,
            IconSet::default(),
            &mut library,
        );
        registry.insert(marker);
    }

    // Hover über den ersten Marker, dann Klick samt Info-Fenster
    let marker = registry.get_mut(1).expect("Marker 1 registriert");
    marker.handle_interaction(MarkerInteraction::PointerEntered, &mut bus);
    marker.handle_interaction(MarkerInteraction::Clicked, &mut bus);
    marker.open_info_window();
    marker.handle_interaction(MarkerInteraction::PointerExited, &mut bus);
    marker.handle_interaction(MarkerInteraction::InfoWindowClosed, &mut bus);

    // Imperative Zustandswechsel auf dem zweiten Marker
    let marker = registry.get_mut(2).expect("Marker 2 registriert");
    marker.deactivate();
    marker.hide();
    marker.show();
    marker.activate();

    // Abbau über die Registry
    if let Some(marker) = registry.remove(2) {
        marker.dispose();
    }

    log::info!(
        "Demo beendet: {} Marker erzeugt, {} Events auf dem Bus",
        library.created_markers(),
        bus.history_len()
    );
}
