//! Kleine Hilfsfunktionen für Winkel und Toleranzvergleiche.

use glam::DVec2;

/// Absolute Toleranz für [`equals_almost`].
pub const ABS_TOL: f64 = 1e-9;

/// Dreht einen Punkt um den Ursprung (Winkel in Radiant, gegen den Uhrzeigersinn).
pub fn rotate_2d(point: DVec2, angle: f64) -> DVec2 {
    DVec2::from_angle(angle).rotate(point)
}

/// Vergleich zweier Gleitkommazahlen mit absoluter Toleranz.
pub fn equals_almost(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABS_TOL
}

/// Normalisiert einen Winkel in Grad auf `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let angle = angle % 360.0;
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}
