//! Das Marker-Widget: bindet ein Event an Karten-Marker und Info-Fenster.

use std::sync::Arc;

use super::bus::MapEventBus;
use super::events::{MapEvent, MarkerInteraction};
use crate::core::{select_icon, Event, IconSet, IconSpec, LatLng, LatLngOffset, MarkerIconKind};
use crate::map::{InfoWindowHandle, MapLibrary, MapView, MarkerDescriptor, MarkerHandle};
use crate::shared::options::{MARKER_Z_ACTIVE, MARKER_Z_HOVER, MARKER_Z_INACTIVE};

/// Karten-Marker für genau ein Event.
///
/// Besitzt genau einen Marker- und einen Info-Fenster-Handle (1:1,
/// gemeinsame Lebensdauer). Zustand: `is_active` (Default `true`) und
/// `is_highlighted` (Default `false`); Deaktivierung hebt eine
/// Hervorhebung immer auf.
pub struct EventMarker {
    event: Arc<Event>,
    offset: LatLngOffset,
    icons: IconSet,
    is_active: bool,
    is_highlighted: bool,
    marker: Box<dyn MarkerHandle>,
    info_window: Box<dyn InfoWindowHandle>,
}

impl EventMarker {
    /// Erzeugt Marker und Info-Fenster für ein Event.
    ///
    /// Ohne `map_view` wird der Marker freistehend erzeugt (nicht an eine
    /// Karte gebunden). Der Offset bleibt für die Lebensdauer des Markers
    /// unverändert.
    pub fn new(
        event: Arc<Event>,
        map_view: Option<&dyn MapView>,
        offset: LatLngOffset,
        icons: IconSet,
        library: &mut dyn MapLibrary,
    ) -> Self {
        let is_active = true;
        let is_highlighted = false;

        let position = event.city.position + offset;
        let icon = icons.spec(select_icon(is_active, is_highlighted, event.has_tags()));

        if let Some(view) = map_view {
            log::debug!(
                "Marker '{}' bei Zoom {:.2} erzeugt",
                event.title,
                view.zoom()
            );
        }

        let marker = library.create_marker(&MarkerDescriptor {
            title: event.title.clone(),
            position,
            draggable: false,
            visible: true,
            icon,
            attached: map_view.is_some(),
        });

        let info_window = library.create_info_window(&event.title);

        Self {
            event,
            offset,
            icons,
            is_active,
            is_highlighted,
            marker,
            info_window,
        }
    }

    /// Das dargestellte Event.
    pub fn event(&self) -> &Arc<Event> {
        &self.event
    }

    /// Gibt `true` zurück, wenn der Marker aktiv ist.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Gibt `true` zurück, wenn der Marker hervorgehoben ist.
    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    /// Geo-Position des Markers: Stadt-Position plus Offset.
    pub fn position(&self) -> LatLng {
        self.event.city.position + self.offset
    }

    /// Aktuelle Icon-Variante aus dem Marker-Zustand.
    pub fn icon_kind(&self) -> MarkerIconKind {
        select_icon(self.is_active, self.is_highlighted, self.event.has_tags())
    }

    /// Aktuelle Render-Parameter des Icons.
    pub fn icon(&self) -> IconSpec {
        self.icons.spec(self.icon_kind())
    }

    /// Verarbeitet eine von der Karten-Schicht gemeldete Interaktion und
    /// veröffentlicht die zugehörige Benachrichtigung auf dem Bus.
    pub fn handle_interaction(&mut self, interaction: MarkerInteraction, bus: &mut MapEventBus) {
        match interaction {
            MarkerInteraction::Clicked => {
                bus.publish(MapEvent::EventSelected {
                    event: Arc::clone(&self.event),
                });
            }
            MarkerInteraction::PointerEntered => {
                self.highlight();
                bus.publish(MapEvent::EventHighlighted {
                    event: Arc::clone(&self.event),
                });
            }
            MarkerInteraction::PointerExited => {
                self.unhighlight();
                bus.publish(MapEvent::EventUnhighlighted {
                    event: Arc::clone(&self.event),
                });
            }
            MarkerInteraction::InfoWindowClosed => {
                bus.publish(MapEvent::EventDeselected);
            }
        }
    }

    /// Öffnet das Info-Fenster an der Marker-Position.
    pub fn open_info_window(&mut self) {
        self.info_window.open();
    }

    /// Schließt das Info-Fenster.
    pub fn close_info_window(&mut self) {
        self.info_window.close();
    }

    /// Hebt den Marker hervor (Hover-Ebene). Wirkungsgleich bei
    /// wiederholtem Aufruf.
    pub fn highlight(&mut self) {
        self.is_highlighted = true;
        self.apply_icon();
        self.marker.set_z_index(MARKER_Z_HOVER);
    }

    /// Hebt die Hervorhebung auf und stellt die Ebene des
    /// Aktiv-Zustands wieder her.
    pub fn unhighlight(&mut self) {
        self.is_highlighted = false;
        self.apply_icon();
        self.marker.set_z_index(self.base_z_index());
    }

    /// Aktiviert den Marker; eine Hervorhebung wird dabei immer
    /// aufgehoben.
    pub fn activate(&mut self) {
        self.is_active = true;
        self.is_highlighted = false;
        self.apply_icon();
        self.marker.set_z_index(MARKER_Z_ACTIVE);
    }

    /// Deaktiviert den Marker; eine Hervorhebung wird dabei immer
    /// aufgehoben.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.is_highlighted = false;
        self.apply_icon();
        self.marker.set_z_index(MARKER_Z_INACTIVE);
    }

    /// Blendet den Marker ein. Zustand und Ebene bleiben unberührt.
    pub fn show(&mut self) {
        self.marker.set_visible(true);
    }

    /// Blendet den Marker aus. Zustand und Ebene bleiben unberührt.
    pub fn hide(&mut self) {
        self.marker.set_visible(false);
    }

    /// Baut das Widget ab: schließt das Info-Fenster, blendet den Marker
    /// aus und gibt beide Handles frei.
    pub fn dispose(mut self) {
        self.info_window.close();
        self.marker.set_visible(false);
        // Handles werden beim Drop der Felder freigegeben.
    }

    fn apply_icon(&mut self) {
        let icon = self.icon();
        self.marker.set_icon(&icon);
    }

    fn base_z_index(&self) -> i32 {
        if self.is_active {
            MARKER_Z_ACTIVE
        } else {
            MARKER_Z_INACTIVE
        }
    }
}
