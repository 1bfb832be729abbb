//! Geteilte Typen für layer-übergreifende Verträge (Konfiguration).

pub mod options;

pub use options::{DrawingOptions, CONFIG_FILE_NAME, FLOAT_PRECISION};
