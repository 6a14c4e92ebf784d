//! Core-Domänentypen: Geo-Koordinaten, Events, Icon-Auswahl.

pub mod event;
pub mod geo;
pub mod icon;

pub use event::{City, Event};
pub use geo::{LatLng, LatLngOffset};
pub use icon::{select_icon, IconSet, IconSpec, MarkerIconKind};
