//! Natürliche kubische Spline durch Fit-Punkte.
//!
//! Parametrisiert über den Punktindex (t = 0 .. n-1), die Koordinaten werden
//! unabhängig voneinander interpoliert. Randbedingung: zweite Ableitung 0 an
//! beiden Enden.

use glam::DVec3;

/// Kubische Spline, die exakt durch alle Fit-Punkte läuft.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    points: Vec<DVec3>,
    /// Zweite Ableitungen an den Stützstellen
    moments: Vec<DVec3>,
}

impl CubicSpline {
    /// Berechnet die Spline-Momente. Weniger als drei Punkte ergeben eine Gerade.
    pub fn new(points: &[DVec3]) -> Self {
        Self {
            points: points.to_vec(),
            moments: solve_moments(points),
        }
    }

    /// Punkt beim Parameter `t ∈ [0, n-1]`.
    pub fn point(&self, t: f64) -> DVec3 {
        let n = self.points.len();
        match n {
            0 => DVec3::ZERO,
            1 => self.points[0],
            _ => {
                let t = t.clamp(0.0, (n - 1) as f64);
                let seg = (t.floor() as usize).min(n - 2);
                let u = t - seg as f64;
                let v = 1.0 - u;
                v * self.points[seg]
                    + u * self.points[seg + 1]
                    + (v * v * v - v) * self.moments[seg] / 6.0
                    + (u * u * u - u) * self.moments[seg + 1] / 6.0
            }
        }
    }

    /// `segments + 1` Punkte vom ersten bis zum letzten Fit-Punkt.
    pub fn approximate(&self, segments: usize) -> Vec<DVec3> {
        if self.points.len() < 2 {
            return self.points.clone();
        }
        let segments = segments.max(1);
        let max_t = (self.points.len() - 1) as f64;
        (0..=segments)
            .map(|i| self.point(max_t * i as f64 / segments as f64))
            .collect()
    }
}

/// Tridiagonales System M[i-1] + 4·M[i] + M[i+1] = 6·(P[i+1] − 2·P[i] + P[i-1])
/// mit M[0] = M[n-1] = 0 (Thomas-Algorithmus).
fn solve_moments(points: &[DVec3]) -> Vec<DVec3> {
    let n = points.len();
    let mut moments = vec![DVec3::ZERO; n];
    if n < 3 {
        return moments;
    }

    let m = n - 2;
    let mut c_prime = vec![0.0f64; m];
    let mut d_prime = vec![DVec3::ZERO; m];

    for k in 0..m {
        let i = k + 1;
        let rhs = 6.0 * (points[i + 1] - 2.0 * points[i] + points[i - 1]);
        if k == 0 {
            c_prime[0] = 1.0 / 4.0;
            d_prime[0] = rhs / 4.0;
        } else {
            let denom = 4.0 - c_prime[k - 1];
            c_prime[k] = 1.0 / denom;
            d_prime[k] = (rhs - d_prime[k - 1]) / denom;
        }
    }

    moments[m] = d_prime[m - 1];
    for k in (0..m - 1).rev() {
        moments[k + 1] = d_prime[k] - c_prime[k] * moments[k + 2];
    }
    moments
}
