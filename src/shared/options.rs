//! Zentrale Konstanten für Marker-Darstellung.

// ── Stapel-Ebenen ───────────────────────────────────────────────────

/// Z-Index deaktivierter Marker.
pub const MARKER_Z_INACTIVE: i32 = 1;
/// Z-Index aktiver Marker.
pub const MARKER_Z_ACTIVE: i32 = 2;
/// Z-Index hervorgehobener Marker (Hover liegt über allen anderen).
pub const MARKER_Z_HOVER: i32 = 30;

// ── Icon-Rendering ──────────────────────────────────────────────────

/// Kantenlänge der quadratischen Marker-Icons in logischen Pixeln.
pub const MARKER_ICON_SIZE_PX: u32 = 15;
/// Deckkraft der Marker-Icons.
pub const MARKER_ICON_OPACITY: f32 = 1.0;
