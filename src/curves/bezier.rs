//! Mehrsegment-Bézier-Kurve (2D/3D).
//!
//! Jedes Segment ist eine kubische Bézier-Kurve. Ihre vier Kontrollpunkte sind:
//! Startpunkt, Startpunkt + Ausgangstangente, Endpunkt + Eingangstangente, Endpunkt.
//! Die Segmentanzahl gehört jeweils zum Ziel-Kontrollpunkt.

use super::{check_segments, coords, CurveError};
use crate::core::{GraphicAttribs, PolylineSink};
use crate::math::Bezier4P;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Standard-Segmentanzahl vom vorherigen Kontrollpunkt zu diesem.
pub const DEFAULT_BEZIER_SEGMENTS: usize = 20;

fn default_bezier_segments() -> usize {
    DEFAULT_BEZIER_SEGMENTS
}

/// Kontrollpunkt mit zwei Tangenten (als Vektoren relativ zum Punkt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierPoint {
    #[serde(deserialize_with = "coords::point")]
    pub point: DVec3,
    /// Tangente links vom Punkt (Ankunft), `None` am Startpunkt
    #[serde(default, deserialize_with = "coords::optional_point")]
    pub tangent_in: Option<DVec3>,
    /// Tangente rechts vom Punkt (Abfahrt), `None` = −tangent_in
    #[serde(default, deserialize_with = "coords::optional_point")]
    pub tangent_out: Option<DVec3>,
    /// Segmente vom vorherigen Kontrollpunkt bis hierher
    #[serde(default = "default_bezier_segments")]
    pub segments: usize,
}

impl BezierPoint {
    fn incoming(&self) -> DVec3 {
        self.tangent_in.unwrap_or(DVec3::ZERO)
    }

    fn outgoing(&self) -> DVec3 {
        self.tangent_out.unwrap_or(-self.incoming())
    }
}

/// Bézier-Kurve über beliebig viele Kontrollpunkte
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bezier {
    pub points: Vec<BezierPoint>,
    /// Immer als 3D-Polylinie rendern
    pub force3d: bool,
    pub attribs: GraphicAttribs,
}

impl Bezier {
    pub fn new(attribs: GraphicAttribs) -> Self {
        Self {
            attribs,
            ..Self::default()
        }
    }

    /// Setzt Startpunkt und Starttangente.
    ///
    /// `tangent` als Vektor, z.B. (5, 0, 0) = horizontale Tangente mit 5 Zeichnungseinheiten.
    pub fn start(&mut self, point: DVec3, tangent: DVec3) {
        self.points.push(BezierPoint {
            point,
            tangent_in: None,
            tangent_out: Some(tangent),
            segments: DEFAULT_BEZIER_SEGMENTS,
        });
    }

    /// Hängt einen Kontrollpunkt an.
    ///
    /// `tangent2` fehlt → `-tangent1` (glatter Übergang).
    pub fn append(
        &mut self,
        point: DVec3,
        tangent1: DVec3,
        tangent2: Option<DVec3>,
        segments: usize,
    ) {
        self.points.push(BezierPoint {
            point,
            tangent_in: Some(tangent1),
            tangent_out: Some(tangent2.unwrap_or(-tangent1)),
            segments,
        });
    }

    /// Approximiert alle Segmente; Stoßpunkte zwischen Segmenten erscheinen einmal.
    pub fn points(&self) -> Result<Vec<DVec3>, CurveError> {
        if self.points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                curve: "Bezier",
                required: 2,
                actual: self.points.len(),
            });
        }

        let mut result = Vec::new();
        for pair in self.points.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            check_segments("Bezier", to.segments)?;
            let segment = Bezier4P::new([
                from.point,
                from.point + from.outgoing(),
                to.point + to.incoming(),
                to.point,
            ]);
            let approx = segment.approximate(to.segments);
            let skip = usize::from(!result.is_empty());
            result.extend(approx.into_iter().skip(skip));
        }
        Ok(result)
    }

    pub(super) fn render<S: PolylineSink + ?Sized>(&self, sink: &mut S) -> Result<(), CurveError> {
        let points = self.points()?;
        if self.force3d || points.iter().any(|p| p.z != 0.0) {
            sink.add_polyline3d(points, self.attribs.clone());
        } else {
            sink.add_polyline2d(points, self.attribs.clone());
        }
        Ok(())
    }
}
