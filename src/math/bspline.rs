//! Offene, gleichmäßige B-Spline (optional rational) über Kontrollpunkte.
//!
//! Knotenvektor geklemmt: die Kurve beginnt im ersten und endet im letzten
//! Kontrollpunkt. Auswertung per de-Boor-Algorithmus in homogenen Koordinaten,
//! damit rationale und nicht-rationale Splines denselben Pfad nehmen.

use glam::{DVec3, DVec4};

/// Standard-Ordnung (Grad 3).
pub const DEFAULT_ORDER: usize = 4;

/// B-Spline mit geklemmtem, gleichmäßigem Knotenvektor.
#[derive(Debug, Clone, PartialEq)]
pub struct BSpline {
    /// Kontrollpunkte homogen: (w·x, w·y, w·z, w)
    control_points: Vec<DVec4>,
    order: usize,
    knots: Vec<f64>,
}

impl BSpline {
    /// Nicht-rationale B-Spline der Ordnung 4.
    ///
    /// Bei weniger Kontrollpunkten als der Ordnung wird die Ordnung auf die
    /// Punktanzahl reduziert (mindestens 2, also linear).
    pub fn new(control_points: &[DVec3]) -> Self {
        Self::build(control_points.iter().map(|p| p.extend(1.0)).collect())
    }

    /// Rationale B-Spline. `None`, wenn die Anzahl der Gewichte nicht passt.
    pub fn with_weights(control_points: &[DVec3], weights: &[f64]) -> Option<Self> {
        if control_points.len() != weights.len() {
            return None;
        }
        let homogeneous = control_points
            .iter()
            .zip(weights)
            .map(|(p, &w)| (*p * w).extend(w))
            .collect();
        Some(Self::build(homogeneous))
    }

    fn build(control_points: Vec<DVec4>) -> Self {
        let order = DEFAULT_ORDER.min(control_points.len()).max(2);
        let knots = open_uniform_knots(control_points.len(), order);
        Self {
            control_points,
            order,
            knots,
        }
    }

    /// Wirksame Ordnung nach eventueller Reduktion.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Größter Parameterwert (`n - order + 1`).
    pub fn max_t(&self) -> f64 {
        self.knots.last().copied().unwrap_or(0.0)
    }

    /// Punkt beim Parameter `t ∈ [0, max_t]`.
    pub fn point(&self, t: f64) -> DVec3 {
        let n = self.control_points.len();
        match n {
            0 => return DVec3::ZERO,
            1 => return dehomogenize(self.control_points[0]),
            _ => {}
        }

        let degree = self.order - 1;
        let t = t.clamp(0.0, self.max_t());
        let span = self.find_span(t);

        let mut d: Vec<DVec4> = (0..=degree)
            .map(|j| self.control_points[j + span - degree])
            .collect();

        for r in 1..=degree {
            for j in (r..=degree).rev() {
                let left = self.knots[j + span - degree];
                let right = self.knots[j + 1 + span - r];
                let alpha = if right > left {
                    (t - left) / (right - left)
                } else {
                    0.0
                };
                d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
            }
        }

        dehomogenize(d[degree])
    }

    /// `segments + 1` Punkte vom ersten bis zum letzten Kontrollpunkt.
    pub fn approximate(&self, segments: usize) -> Vec<DVec3> {
        let segments = segments.max(1);
        let max_t = self.max_t();
        (0..=segments)
            .map(|i| self.point(max_t * i as f64 / segments as f64))
            .collect()
    }

    /// Knoten-Intervall mit knots[span] <= t < knots[span + 1];
    /// am rechten Rand das letzte nicht-leere Intervall.
    fn find_span(&self, t: f64) -> usize {
        let n = self.control_points.len();
        let degree = self.order - 1;
        if t >= self.knots[n] {
            return n - 1;
        }
        // knots ist sortiert, partition_point liefert den ersten Knoten > t
        let idx = self.knots.partition_point(|&k| k <= t);
        (idx - 1).clamp(degree, n - 1)
    }
}

/// Knotenvektor: `order` Nullen, 1..n-order, `order`-mal (n - order + 1).
fn open_uniform_knots(count: usize, order: usize) -> Vec<f64> {
    let inner = count.saturating_sub(order);
    let max = (inner + 1) as f64;
    let mut knots = Vec::with_capacity(count + order);
    knots.extend(std::iter::repeat(0.0).take(order));
    knots.extend((1..=inner).map(|k| k as f64));
    knots.extend(std::iter::repeat(max).take(order));
    knots
}

fn dehomogenize(p: DVec4) -> DVec3 {
    if p.w.abs() > f64::EPSILON {
        p.truncate() / p.w
    } else {
        p.truncate()
    }
}
