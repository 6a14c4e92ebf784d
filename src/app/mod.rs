//! App-Schicht: Marker-Widget, Registry und Event-Bus.

pub mod bus;
pub mod events;
pub mod marker;
pub mod registry;

pub use bus::{MapEventBus, MapEventListener};
pub use events::{MapEvent, MarkerInteraction};
pub use marker::EventMarker;
pub use registry::MarkerRegistry;
