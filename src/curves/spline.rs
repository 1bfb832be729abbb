//! Spline-Kurve über Definitionspunkte.
//!
//! Je nach Modus sind die Punkte Fit-Punkte (kubische Spline, 2D-Polylinie)
//! oder Kontrollpunkte einer B-Spline bzw. rationalen B-Spline (3D-Polylinie).

use super::{check_segments, coords, CurveError};
use crate::core::{GraphicAttribs, PolylineSink};
use crate::math::{BSpline, CubicSpline};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Standard-Segmentanzahl einer Spline.
pub const DEFAULT_SPLINE_SEGMENTS: usize = 100;

/// Bedeutung der Definitionspunkte
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplineMode {
    /// Kubische Spline durch alle Punkte
    #[default]
    FitPoints,
    /// B-Spline mit den Punkten als Kontrollpunkte
    BSpline,
    /// Rationale B-Spline, ohne Gewichte alle 1.0
    RationalBSpline {
        #[serde(default)]
        weights: Option<Vec<f64>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spline {
    #[serde(deserialize_with = "coords::points")]
    pub points: Vec<DVec3>,
    pub segments: usize,
    pub mode: SplineMode,
    pub attribs: GraphicAttribs,
}

impl Default for Spline {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            segments: DEFAULT_SPLINE_SEGMENTS,
            mode: SplineMode::FitPoints,
            attribs: GraphicAttribs::default(),
        }
    }
}

impl Spline {
    pub fn new(points: Vec<DVec3>, mode: SplineMode) -> Self {
        Self {
            points,
            mode,
            ..Self::default()
        }
    }

    pub(super) fn render<S: PolylineSink + ?Sized>(&self, sink: &mut S) -> Result<(), CurveError> {
        check_segments("Spline", self.segments)?;
        if self.points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                curve: "Spline",
                required: 2,
                actual: self.points.len(),
            });
        }

        match &self.mode {
            SplineMode::FitPoints => {
                let spline = CubicSpline::new(&self.points);
                sink.add_polyline2d(spline.approximate(self.segments), self.attribs.clone());
            }
            SplineMode::BSpline => {
                let spline = BSpline::new(&self.points);
                sink.add_polyline3d(spline.approximate(self.segments), self.attribs.clone());
            }
            SplineMode::RationalBSpline { weights } => {
                let weights = weights
                    .clone()
                    .unwrap_or_else(|| vec![1.0; self.points.len()]);
                let spline = BSpline::with_weights(&self.points, &weights).ok_or(
                    CurveError::WeightCount {
                        points: self.points.len(),
                        weights: weights.len(),
                    },
                )?;
                sink.add_polyline3d(spline.approximate(self.segments), self.attribs.clone());
            }
        }
        Ok(())
    }
}
