//! Ein einzelner getaggter DXF-Record (Group-Code + Wert).

use std::fmt;

/// Group-Code/Wert-Paar, wie es im ASCII-DXF als zwei Zeilen erscheint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxfTag {
    /// Group-Code
    pub code: i32,
    /// Wert als Text (bereits formatiert)
    pub value: String,
}

impl DxfTag {
    /// Erstellt einen neuen Record
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }
}

impl fmt::Display for DxfTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Group-Codes werden rechtsbündig auf 3 Stellen gesetzt (AutoCAD-Konvention)
        writeln!(f, "{:>3}", self.code)?;
        writeln!(f, "{}", self.value)
    }
}
