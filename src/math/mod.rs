//! Numerische Kurven-Primitive (Bézier, kubische Spline, B-Spline, Klothoide).
//!
//! Layer-neutral: kennt weder Attribute noch Zeichnung, nur Punkte.

pub mod base;
pub mod bezier4p;
pub mod bspline;
pub mod clothoid;
pub mod cspline;

pub use base::{equals_almost, normalize_deg, rotate_2d};
pub use bezier4p::Bezier4P;
pub use bspline::BSpline;
pub use clothoid::ClothoidValues;
pub use cspline::CubicSpline;
