//! Integrationstests für Registry und Event-Bus:
//! - Zuordnung Event-ID → Marker mit deterministischer Reihenfolge
//! - Bus-Fluss über mehrere Marker samt Subscriber

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use common::RecordingMapLibrary;
use events_map_marker::{
    City, Event, EventMarker, IconSet, LatLng, LatLngOffset, MapEvent, MapEventBus,
    MarkerInteraction, MarkerRegistry,
};

fn event_in(id: u64, city_name: &str, lat: f64, lng: f64) -> Arc<Event> {
    let city = City::new(city_name, LatLng::new(lat, lng));
    Arc::new(Event::new(id, format!("Event {id}"), city, vec![]))
}

fn detached_marker(event: Arc<Event>, library: &mut RecordingMapLibrary) -> EventMarker {
    EventMarker::new(
        event,
        None,
        LatLngOffset::ZERO,
        IconSet::default(),
        library,
    )
}

#[test]
fn test_registry_insert_and_lookup_by_event_id() {
    let mut library = RecordingMapLibrary::new();
    let mut registry = MarkerRegistry::new();

    assert!(registry.is_empty());

    let event = event_in(1, "Berlin", 52.52, 13.405);
    registry.insert(detached_marker(Arc::clone(&event), &mut library));

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(1));
    assert!(!registry.contains(2));

    let marker = registry.get(1).expect("Marker 1 sollte registriert sein");
    assert!(Arc::ptr_eq(marker.event(), &event));
}

#[test]
fn test_registry_insert_displaces_previous_marker_of_same_event() {
    let mut library = RecordingMapLibrary::new();
    let mut registry = MarkerRegistry::new();

    let event = event_in(1, "Berlin", 52.52, 13.405);
    registry.insert(detached_marker(Arc::clone(&event), &mut library));
    let displaced = registry.insert(detached_marker(event, &mut library));

    assert!(displaced.is_some(), "Zweiter Insert muss den ersten Marker verdrängen");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_remove_keeps_insertion_order() {
    let mut library = RecordingMapLibrary::new();
    let mut registry = MarkerRegistry::new();

    registry.insert(detached_marker(event_in(1, "Berlin", 52.52, 13.405), &mut library));
    registry.insert(detached_marker(event_in(2, "Hamburg", 53.5511, 9.9937), &mut library));
    registry.insert(detached_marker(event_in(3, "München", 48.1351, 11.582), &mut library));

    let removed = registry.remove(2).expect("Marker 2 sollte entfernbar sein");
    removed.dispose();

    let ids: Vec<u64> = registry.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(!registry.contains(2));
}

#[test]
fn test_bus_flow_over_multiple_markers() {
    let mut library = RecordingMapLibrary::new();
    let mut registry = MarkerRegistry::new();
    let mut bus = MapEventBus::new();

    let highlighted = Rc::new(RefCell::new(Vec::new()));
    {
        let highlighted = Rc::clone(&highlighted);
        bus.subscribe(move |event| {
            if let MapEvent::EventHighlighted { event } = event {
                highlighted.borrow_mut().push(event.id);
            }
        });
    }

    registry.insert(detached_marker(event_in(1, "Berlin", 52.52, 13.405), &mut library));
    registry.insert(detached_marker(event_in(2, "Hamburg", 53.5511, 9.9937), &mut library));

    for id in [1, 2] {
        let marker = registry.get_mut(id).expect("Marker sollte registriert sein");
        marker.handle_interaction(MarkerInteraction::PointerEntered, &mut bus);
        marker.handle_interaction(MarkerInteraction::PointerExited, &mut bus);
    }

    assert_eq!(highlighted.borrow().as_slice(), [1, 2]);
    assert_eq!(bus.history_len(), 4);
    assert!(matches!(bus.history()[0], MapEvent::EventHighlighted { .. }));
    assert!(matches!(bus.history()[3], MapEvent::EventUnhighlighted { .. }));
}
