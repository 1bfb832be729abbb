//! Parametrische Kurven, die als Polylinien in eine Zeichnung gerendert werden.
//!
//! Geschlossene Menge von Varianten hinter [`Curve`], ein einziger Render-Einstieg
//! über [`Curve::render`] gegen eine [`PolylineSink`].
//!
//! Aufgeteilt in:
//! - `ellipse`     — Ellipse/Ellipsenbogen als 2D-Polylinie
//! - `bezier`      — Mehrsegment-Bézier mit Tangenten je Kontrollpunkt
//! - `spline`      — Fit-Punkt-Spline, B-Spline, rationale B-Spline
//! - `clothoid`    — Klothoide mit Spiegelung und Drehung
//! - `coords`      — Punkte mit 2 oder 3 Koordinaten einlesen
//! - `definitions` — Kurven-Definitionen aus TOML/JSON laden

mod bezier;
mod clothoid;
mod coords;
pub mod definitions;
mod ellipse;
mod spline;

pub use bezier::{Bezier, BezierPoint};
pub use clothoid::Clothoid;
pub use definitions::{load_curve_definitions, CurveSet};
pub use ellipse::Ellipse;
pub use spline::{Spline, SplineMode};

use crate::core::PolylineSink;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fehler beim Rendern einer Kurve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Zu wenige Definitionspunkte
    #[error("{curve}: mindestens {required} Punkte benötigt, {actual} vorhanden")]
    TooFewPoints {
        curve: &'static str,
        required: usize,
        actual: usize,
    },
    /// Gewichte passen nicht zu den Kontrollpunkten
    #[error("Rationale B-Spline: {weights} Gewichte für {points} Kontrollpunkte")]
    WeightCount { points: usize, weights: usize },
    /// Parameter außerhalb des gültigen Bereichs
    #[error("{curve}: ungültiger Wert für {name}: {value}")]
    InvalidParameter {
        curve: &'static str,
        name: &'static str,
        value: f64,
    },
}

/// Eine renderbare Kurve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Curve {
    Ellipse(Ellipse),
    Bezier(Bezier),
    Spline(Spline),
    Clothoid(Clothoid),
}

impl Curve {
    /// Rendert die Kurve als Polylinie in `sink`.
    pub fn render<S: PolylineSink + ?Sized>(&self, sink: &mut S) -> Result<(), CurveError> {
        log::debug!("Rendere {}", self.name());
        match self {
            Curve::Ellipse(c) => c.render(sink),
            Curve::Bezier(c) => c.render(sink),
            Curve::Spline(c) => c.render(sink),
            Curve::Clothoid(c) => c.render(sink),
        }
    }

    /// Kurzname der Variante (für Logs und Fehlermeldungen)
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Ellipse(_) => "Ellipse",
            Curve::Bezier(_) => "Bezier",
            Curve::Spline(_) => "Spline",
            Curve::Clothoid(_) => "Clothoid",
        }
    }
}

/// Lehnt `segments == 0` ab (Division durch Null in allen Approximationen).
fn check_segments(curve: &'static str, segments: usize) -> Result<(), CurveError> {
    if segments == 0 {
        return Err(CurveError::InvalidParameter {
            curve,
            name: "segments",
            value: 0.0,
        });
    }
    Ok(())
}
