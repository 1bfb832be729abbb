//! Klothoide (Euler-Spirale) mit Parameter A: Krümmung wächst linear mit der Bogenlänge.

use glam::DVec2;

/// Obergrenze der Reihenglieder pro Punkt.
const MAX_SERIES_TERMS: usize = 200;

/// Bis zu diesem Tangentenwinkel τ ist die Reihe ohne Auslöschung auswertbar.
const SERIES_TAU_LIMIT: f64 = 4.0;

/// Winkeländerung pro Gauß-Intervall oberhalb von [`SERIES_TAU_LIMIT`].
const PHASE_STEP: f64 = 0.25;

/// Gauß-Legendre, 5 Stützstellen auf [-1, 1]: (Knoten, Gewicht)
const GAUSS_5: [(f64, f64); 5] = [
    (-0.906_179_845_938_664, 0.236_926_885_056_189_1),
    (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.0, 0.568_888_888_888_888_9),
    (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.906_179_845_938_664, 0.236_926_885_056_189_1),
];

/// Klothoide in Normallage: Start im Ursprung, Starttangente entlang +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothoidValues {
    param_a: f64,
}

impl ClothoidValues {
    pub fn new(param_a: f64) -> Self {
        Self { param_a }
    }

    /// Punkt bei Bogenlänge `s`: `x = ∫cos(u²/2A²) du`, `y = ∫sin(u²/2A²) du` über `0..s`.
    ///
    /// Für τ = s²/(2A²) ≤ 4 über die Fresnel-Reihen, darüber ab der Reihengrenze
    /// per Gauß-Legendre in Intervallen konstanter Winkeländerung.
    /// Für s → ∞ strebt der Punkt gegen (A·√π/2, A·√π/2).
    pub fn point(&self, s: f64) -> DVec2 {
        let tau = self.tangent_angle(s);
        if tau <= SERIES_TAU_LIMIT {
            return self.series_point(s);
        }

        let s0 = self.arc_length_at(SERIES_TAU_LIMIT);
        let mut sum = self.series_point(s0);
        let panels = ((tau - SERIES_TAU_LIMIT) / PHASE_STEP).ceil() as usize;
        let mut lower = s0;
        for i in 1..=panels {
            let upper = if i == panels {
                s.abs()
            } else {
                self.arc_length_at(SERIES_TAU_LIMIT + PHASE_STEP * i as f64)
            };
            sum += self.integrate_panel(lower, upper);
            lower = upper;
        }
        // x und y sind ungerade in s
        sum * s.signum()
    }

    /// Fresnel-Reihen mit τ = s²/(2A²):
    /// `x = s · Σ (−1)ⁿ τ²ⁿ / ((4n+1)(2n)!)`,
    /// `y = s · Σ (−1)ⁿ τ²ⁿ⁺¹ / ((4n+3)(2n+1)!)`
    fn series_point(&self, s: f64) -> DVec2 {
        let tau = self.tangent_angle(s);
        let mut x = 0.0;
        let mut y = 0.0;
        // term = τᵏ / k!
        let mut term = 1.0;

        for k in 0..MAX_SERIES_TERMS {
            if k > 0 {
                term *= tau / k as f64;
            }
            let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
            let contribution = sign * term / (2 * k + 1) as f64;
            if k % 2 == 0 {
                x += contribution;
            } else {
                y += contribution;
            }
            if k as f64 > tau && term < f64::EPSILON * 1e-3 {
                break;
            }
        }

        DVec2::new(s * x, s * y)
    }

    /// Bogenlänge, an der der Tangentenwinkel `tau` erreicht wird
    fn arc_length_at(&self, tau: f64) -> f64 {
        self.param_a * (2.0 * tau).sqrt()
    }

    fn integrate_panel(&self, lower: f64, upper: f64) -> DVec2 {
        let half = 0.5 * (upper - lower);
        let mid = 0.5 * (upper + lower);
        GAUSS_5
            .iter()
            .map(|&(node, weight)| {
                let angle = self.tangent_angle(mid + half * node);
                DVec2::new(angle.cos(), angle.sin()) * weight
            })
            .sum::<DVec2>()
            * half
    }

    /// Tangentenwinkel bei Bogenlänge `s` (Radiant).
    pub fn tangent_angle(&self, s: f64) -> f64 {
        s * s / (2.0 * self.param_a * self.param_a)
    }

    /// Krümmungsradius bei Bogenlänge `s` (`A² / s`, unendlich am Start).
    pub fn radius(&self, s: f64) -> f64 {
        if s > 0.0 {
            self.param_a * self.param_a / s
        } else {
            f64::INFINITY
        }
    }

    /// `segments + 1` Punkte gleichmäßig über die Bogenlänge `0..=length`.
    pub fn approximate(&self, length: f64, segments: usize) -> Vec<DVec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(length * i as f64 / segments as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_and_leading_terms() {
        let clothoid = ClothoidValues::new(2.0);
        assert_eq!(clothoid.point(0.0), DVec2::ZERO);

        // Kleine Bogenlänge: x ≈ s − s⁵/(40A⁴), y ≈ s³/(6A²)
        let s = 0.1;
        let p = clothoid.point(s);
        assert_relative_eq!(p.x, s - s.powi(5) / (40.0 * 16.0), epsilon = 1e-12);
        assert_relative_eq!(p.y, s.powi(3) / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_length_matches_parameter() {
        let clothoid = ClothoidValues::new(10.0);
        let points = clothoid.approximate(20.0, 2000);
        let length: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
        assert_relative_eq!(length, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fresnel_reference_values() {
        // A = 1/√π → x(s) = C(s), y(s) = S(s) (normierte Fresnel-Integrale)
        let clothoid = ClothoidValues::new(1.0 / std::f64::consts::PI.sqrt());
        let p = clothoid.point(1.0);
        assert_relative_eq!(p.x, 0.779_893_4, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.438_259_1, epsilon = 1e-6);

        // τ ≈ 14.1, jenseits der Reihe
        let p = clothoid.point(3.0);
        assert_relative_eq!(p.x, 0.605_720_8, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.496_312_9, epsilon = 1e-6);
    }

    #[test]
    fn test_continuous_at_series_limit() {
        let clothoid = ClothoidValues::new(1.0);
        let s0 = clothoid.arc_length_at(SERIES_TAU_LIMIT);
        let below = clothoid.point(s0 - 1e-9);
        let above = clothoid.point(s0 + 1e-9);
        assert_relative_eq!(below.x, above.x, epsilon = 1e-8);
        assert_relative_eq!(below.y, above.y, epsilon = 1e-8);
    }

    #[test]
    fn test_long_arc_approaches_fresnel_limit() {
        let param_a = 1.0;
        let clothoid = ClothoidValues::new(param_a);
        let limit = std::f64::consts::PI.sqrt() * param_a / 2.0;
        // Restschwingung um den Grenzpunkt hat Amplitude ≈ A²/s
        for s in [12.0, 15.0, 30.0, 100.0] {
            let p = clothoid.point(s);
            assert!(p.is_finite(), "s = {}: {:?}", s, p);
            let tolerance = 1.5 * param_a * param_a / s;
            assert_relative_eq!(p.x, limit, epsilon = tolerance);
            assert_relative_eq!(p.y, limit, epsilon = tolerance);
        }
    }

    #[test]
    fn test_point_is_odd_in_arc_length() {
        let clothoid = ClothoidValues::new(1.0);
        for s in [0.5, 5.0] {
            let (forward, backward) = (clothoid.point(s), clothoid.point(-s));
            assert_relative_eq!(backward.x, -forward.x, epsilon = 1e-12);
            assert_relative_eq!(backward.y, -forward.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_radius_at_length() {
        let clothoid = ClothoidValues::new(10.0);
        assert_relative_eq!(clothoid.radius(25.0), 4.0);
        assert!(clothoid.radius(0.0).is_infinite());
    }
}
