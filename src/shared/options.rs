//! Zentrale Konfiguration für Rendern und DXF-Export.
//!
//! `DrawingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DEFAULT_LAYER;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Standard-Nachkommastellen für Koordinaten im DXF.
pub const FLOAT_PRECISION: usize = 6;

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "dxf_curve_kit.toml";

/// Alle zur Laufzeit änderbaren Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingOptions {
    /// Nachkommastellen für Gleitkommawerte im DXF
    pub float_precision: usize,
    /// Bézier-Kurven immer als 3D-Polylinie ausgeben
    #[serde(default)]
    pub force_3d: bool,
    /// Layer für Entities ohne Layer-Namen
    #[serde(default = "default_layer")]
    pub default_layer: String,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            float_precision: FLOAT_PRECISION,
            force_3d: false,
            default_layer: default_layer(),
        }
    }
}

/// Serde-Default für `default_layer` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_layer() -> String {
    DEFAULT_LAYER.to_string()
}

impl DrawingOptions {
    /// Liest und prüft eine Optionen-Datei.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        let options: Self = toml::from_str(&content)
            .with_context(|| format!("Optionen fehlerhaft: {}", path.display()))?;
        if options.default_layer.is_empty() {
            anyhow::bail!("default_layer darf nicht leer sein: {}", path.display());
        }
        Ok(options)
    }

    /// Wie [`Self::read`], fällt bei fehlender oder fehlerhafter Datei auf Standardwerte zurück.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Keine Optionen-Datei, Standardwerte aktiv");
            return Self::default();
        }
        match Self::read(path) {
            Ok(options) => {
                log::info!("Optionen geladen aus: {}", path.display());
                options
            }
            Err(e) => {
                log::warn!("{:#}; Standardwerte aktiv", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// `dxf_curve_kit.toml` im Verzeichnis der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }
}
