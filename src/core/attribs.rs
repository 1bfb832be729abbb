//! Darstellungs-Attribute, die jede gerenderte Kurve mitbringt.

use serde::{Deserialize, Serialize};

/// ACI-Farbindex "BYLAYER".
pub const BYLAYER: u16 = 256;
/// Standard-Layer jeder Zeichnung.
pub const DEFAULT_LAYER: &str = "0";

/// Layer, Farbe, Linientyp und Geschlossen-Flag einer Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicAttribs {
    /// Layer-Name
    pub layer: String,
    /// ACI-Farbindex (256 = BYLAYER)
    pub color: u16,
    /// Linientyp, `None` = vom Layer
    pub linetype: Option<String>,
    /// Geschlossene Polylinie
    pub closed: bool,
}

impl Default for GraphicAttribs {
    fn default() -> Self {
        Self {
            layer: DEFAULT_LAYER.to_string(),
            color: BYLAYER,
            linetype: None,
            closed: false,
        }
    }
}

impl GraphicAttribs {
    /// Erstellt Attribute für einen Layer, sonst Standardwerte
    pub fn on_layer(layer: impl Into<String>) -> Self {
        Self {
            layer: layer.into(),
            ..Self::default()
        }
    }

    /// Kopie mit gesetztem Geschlossen-Flag
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }
}
