//! Aufzeichnendes Karten-Backend für Integrationstests.

use std::cell::RefCell;
use std::rc::Rc;

use events_map_marker::{
    IconSpec, InfoWindowHandle, MapLibrary, MarkerDescriptor, MarkerHandle,
};

/// Aufgezeichnete Aufrufe eines Marker-Handles.
#[derive(Default)]
pub struct MarkerLog {
    pub icons: Vec<IconSpec>,
    pub z_indices: Vec<i32>,
    pub visibility: Vec<bool>,
    pub dropped: bool,
}

/// Aufgezeichnete Aufrufe eines Info-Fenster-Handles.
#[derive(Default)]
pub struct InfoWindowLog {
    pub content: String,
    pub opens: usize,
    pub closes: usize,
    pub dropped: bool,
}

/// Backend, das alle Aufrufe der Karten-Schnittstelle aufzeichnet.
#[derive(Default)]
pub struct RecordingMapLibrary {
    pub descriptors: Vec<MarkerDescriptor>,
    marker_logs: Vec<Rc<RefCell<MarkerLog>>>,
    window_logs: Vec<Rc<RefCell<InfoWindowLog>>>,
}

impl RecordingMapLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log des i-ten erzeugten Markers.
    pub fn marker_log(&self, index: usize) -> Rc<RefCell<MarkerLog>> {
        Rc::clone(&self.marker_logs[index])
    }

    /// Log des i-ten erzeugten Info-Fensters.
    pub fn window_log(&self, index: usize) -> Rc<RefCell<InfoWindowLog>> {
        Rc::clone(&self.window_logs[index])
    }
}

impl MapLibrary for RecordingMapLibrary {
    fn create_marker(&mut self, descriptor: &MarkerDescriptor) -> Box<dyn MarkerHandle> {
        self.descriptors.push(descriptor.clone());
        let log = Rc::new(RefCell::new(MarkerLog::default()));
        self.marker_logs.push(Rc::clone(&log));
        Box::new(RecordingMarkerHandle { log })
    }

    fn create_info_window(&mut self, content: &str) -> Box<dyn InfoWindowHandle> {
        let log = Rc::new(RefCell::new(InfoWindowLog {
            content: content.to_string(),
            ..Default::default()
        }));
        self.window_logs.push(Rc::clone(&log));
        Box::new(RecordingInfoWindowHandle { log })
    }
}

struct RecordingMarkerHandle {
    log: Rc<RefCell<MarkerLog>>,
}

impl MarkerHandle for RecordingMarkerHandle {
    fn set_icon(&mut self, icon: &IconSpec) {
        self.log.borrow_mut().icons.push(icon.clone());
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.log.borrow_mut().z_indices.push(z_index);
    }

    fn set_visible(&mut self, visible: bool) {
        self.log.borrow_mut().visibility.push(visible);
    }
}

impl Drop for RecordingMarkerHandle {
    fn drop(&mut self) {
        self.log.borrow_mut().dropped = true;
    }
}

struct RecordingInfoWindowHandle {
    log: Rc<RefCell<InfoWindowLog>>,
}

impl InfoWindowHandle for RecordingInfoWindowHandle {
    fn open(&mut self) {
        self.log.borrow_mut().opens += 1;
    }

    fn close(&mut self) {
        self.log.borrow_mut().closes += 1;
    }
}

impl Drop for RecordingInfoWindowHandle {
    fn drop(&mut self) {
        self.log.borrow_mut().dropped = true;
    }
}
