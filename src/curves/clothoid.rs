//! Klothoide, gespiegelt/gedreht/verschoben in die Zeichnung gesetzt.

use super::{check_segments, coords, CurveError};
use crate::core::{GraphicAttribs, PolylineSink};
use crate::math::{rotate_2d, ClothoidValues};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Standard-Segmentanzahl einer Klothoide.
pub const DEFAULT_CLOTHOID_SEGMENTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clothoid {
    /// Startpunkt, z ist die Höhe aller Punkte
    #[serde(deserialize_with = "coords::point")]
    pub start: DVec3,
    /// Drehung in Grad
    pub rotation: f64,
    /// Bogenlänge
    pub length: f64,
    /// Klothoiden-Parameter A (A² = R·L)
    pub param_a: f64,
    /// "x" spiegelt an der x-Achse, "y" an der y-Achse, beides kombinierbar
    pub mirror: String,
    pub segments: usize,
    pub attribs: GraphicAttribs,
}

impl Default for Clothoid {
    fn default() -> Self {
        Self {
            start: DVec3::ZERO,
            rotation: 0.0,
            length: 1.0,
            param_a: 1.0,
            mirror: String::new(),
            segments: DEFAULT_CLOTHOID_SEGMENTS,
            attribs: GraphicAttribs::default(),
        }
    }
}

impl Clothoid {
    fn mirror_x(&self) -> bool {
        self.mirror.to_lowercase().contains('x')
    }

    fn mirror_y(&self) -> bool {
        self.mirror.to_lowercase().contains('y')
    }

    /// Punkte in Zeichnungskoordinaten
    pub fn points(&self) -> Vec<DVec3> {
        let (mirror_x, mirror_y) = (self.mirror_x(), self.mirror_y());
        let rotation = self.rotation.to_radians();
        let origin = self.start.truncate();

        ClothoidValues::new(self.param_a)
            .approximate(self.length, self.segments)
            .into_iter()
            .map(|mut p| {
                if mirror_x {
                    p.y = -p.y;
                }
                if mirror_y {
                    p.x = -p.x;
                }
                let p: DVec2 = rotate_2d(p, rotation) + origin;
                p.extend(self.start.z)
            })
            .collect()
    }

    pub(super) fn render<S: PolylineSink + ?Sized>(&self, sink: &mut S) -> Result<(), CurveError> {
        check_segments("Clothoid", self.segments)?;
        if self.param_a.is_nan() || self.param_a <= 0.0 {
            return Err(CurveError::InvalidParameter {
                curve: "Clothoid",
                name: "param_a",
                value: self.param_a,
            });
        }
        if !self.length.is_finite() {
            return Err(CurveError::InvalidParameter {
                curve: "Clothoid",
                name: "length",
                value: self.length,
            });
        }
        sink.add_polyline3d(self.points(), self.attribs.clone());
        Ok(())
    }
}
