//! Icon-Auswahl und Icon-Assets für Marker.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::shared::options::{MARKER_ICON_OPACITY, MARKER_ICON_SIZE_PX};

/// Die fünf visuell unterscheidbaren Marker-Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIconKind {
    /// Aktiv, ohne Tags
    Default,
    /// Deaktiviert
    Inactive,
    /// Hervorgehoben (Hover), ohne Tags
    Highlighted,
    /// Aktiv, mit Tags
    Tagged,
    /// Hervorgehoben (Hover), mit Tags
    TaggedHighlighted,
}

/// Wählt die Icon-Variante aus dem aktuellen Marker-Zustand.
///
/// Reine Funktion über `(is_active, is_highlighted, has_tags)`:
/// Hervorhebung überdeckt den Aktiv-Zustand, deaktivierte Marker
/// unterscheiden nicht nach Tags.
pub fn select_icon(is_active: bool, is_highlighted: bool, has_tags: bool) -> MarkerIconKind {
    if is_highlighted {
        if has_tags {
            MarkerIconKind::TaggedHighlighted
        } else {
            MarkerIconKind::Highlighted
        }
    } else if is_active {
        if has_tags {
            MarkerIconKind::Tagged
        } else {
            MarkerIconKind::Default
        }
    } else {
        MarkerIconKind::Inactive
    }
}

/// Render-Parameter eines Marker-Icons, wie sie an die Karten-Bibliothek
/// durchgereicht werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    /// Asset-URL des Bildes
    pub url: String,
    /// Darstellungsbreite in logischen Pixeln
    pub width: u32,
    /// Darstellungshöhe in logischen Pixeln
    pub height: u32,
    /// Deckkraft (0.0–1.0)
    pub opacity: f32,
}

/// Asset-URLs aller fünf Icon-Varianten.
///
/// Deployments können die Pfade per TOML überschreiben; die Defaults
/// zeigen auf die mitgelieferten Assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    /// Aktiv, ohne Tags
    pub default_url: String,
    /// Deaktiviert
    pub inactive_url: String,
    /// Hervorgehoben, ohne Tags
    pub highlighted_url: String,
    /// Aktiv, mit Tags
    pub tagged_url: String,
    /// Hervorgehoben, mit Tags
    pub tagged_highlighted_url: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            default_url: "assets/marker-icon.png".to_string(),
            inactive_url: "assets/marker-icon-inactive.png".to_string(),
            highlighted_url: "assets/marker-icon-highlighted.png".to_string(),
            tagged_url: "assets/marker-icon-tagged.png".to_string(),
            tagged_highlighted_url: "assets/marker-icon-tagged-highlighted.png".to_string(),
        }
    }
}

impl IconSet {
    /// Liest ein IconSet aus einem TOML-String.
    /// Fehlende Felder fallen auf die Default-Pfade zurück.
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        toml::from_str(input).context("IconSet-TOML konnte nicht gelesen werden")
    }

    /// Asset-URL einer Variante.
    pub fn url_for(&self, kind: MarkerIconKind) -> &str {
        match kind {
            MarkerIconKind::Default => &self.default_url,
            MarkerIconKind::Inactive => &self.inactive_url,
            MarkerIconKind::Highlighted => &self.highlighted_url,
            MarkerIconKind::Tagged => &self.tagged_url,
            MarkerIconKind::TaggedHighlighted => &self.tagged_highlighted_url,
        }
    }

    /// Vollständige Render-Parameter einer Variante (15×15, volle Deckkraft).
    pub fn spec(&self, kind: MarkerIconKind) -> IconSpec {
        IconSpec {
            url: self.url_for(kind).to_string(),
            width: MARKER_ICON_SIZE_PX,
            height: MARKER_ICON_SIZE_PX,
            opacity: MARKER_ICON_OPACITY,
        }
    }
}
