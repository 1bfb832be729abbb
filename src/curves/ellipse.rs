//! Ellipse bzw. Ellipsenbogen, angenähert durch eine 2D-Polylinie.

use super::{check_segments, coords, CurveError};
use crate::core::{GraphicAttribs, PolylineSink};
use crate::math::{equals_almost, normalize_deg, rotate_2d};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Standard-Segmentanzahl einer Ellipse.
pub const DEFAULT_ELLIPSE_SEGMENTS: usize = 100;

/// Ellipse mit Halbachsen `rx`/`ry`, Winkel in Grad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ellipse {
    /// Mittelpunkt, z ist die Elevation der Polylinie
    #[serde(deserialize_with = "coords::point")]
    pub center: DVec3,
    pub rx: f64,
    pub ry: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Drehung der Hauptachse um den Mittelpunkt
    pub rotation: f64,
    pub segments: usize,
    pub attribs: GraphicAttribs,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            rx: 1.0,
            ry: 1.0,
            start_angle: 0.0,
            end_angle: 360.0,
            rotation: 0.0,
            segments: DEFAULT_ELLIPSE_SEGMENTS,
            attribs: GraphicAttribs::default(),
        }
    }
}

impl Ellipse {
    /// Vollellipse um `center`
    pub fn new(center: DVec3, rx: f64, ry: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            ..Self::default()
        }
    }

    /// Geschlossen, wenn Start- und (normalisierter) Endwinkel zusammenfallen.
    pub fn is_closed(&self) -> bool {
        equals_almost(self.start_angle, normalize_deg(self.end_angle))
    }

    /// `segments` Punkte ab dem Startwinkel, der Endwinkel selbst wird nicht erzeugt.
    pub fn points(&self) -> Vec<DVec3> {
        let delta = (self.end_angle - self.start_angle) / self.segments as f64;
        let rotation = self.rotation.to_radians();
        (0..self.segments)
            .map(|i| {
                let alpha = (self.start_angle + delta * i as f64).to_radians();
                let local = DVec2::new(alpha.cos() * self.rx, alpha.sin() * self.ry);
                let p = rotate_2d(local, rotation) + self.center.truncate();
                p.extend(self.center.z)
            })
            .collect()
    }

    pub(super) fn render<S: PolylineSink + ?Sized>(&self, sink: &mut S) -> Result<(), CurveError> {
        check_segments("Ellipse", self.segments)?;
        let attribs = self.attribs.clone().with_closed(self.is_closed());
        sink.add_polyline2d(self.points(), attribs);
        Ok(())
    }
}
