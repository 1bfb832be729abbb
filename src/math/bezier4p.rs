//! Kubische Bézier-Kurve aus vier Kontrollpunkten.

use glam::DVec3;

/// Kubische Bézier-Kurve: Start, zwei Steuerpunkte, Ende.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier4P {
    control_points: [DVec3; 4],
}

impl Bezier4P {
    pub fn new(control_points: [DVec3; 4]) -> Self {
        Self { control_points }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn point(&self, t: f64) -> DVec3 {
        let [p0, p1, p2, p3] = self.control_points;
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
    }

    /// `segments + 1` Punkte bei gleichmäßig verteiltem Parameter t, Endpunkte inklusive.
    pub fn approximate(&self, segments: usize) -> Vec<DVec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(i as f64 / segments as f64))
            .collect()
    }
}
