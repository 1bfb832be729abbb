//! Kurven-Definitionen aus TOML- oder JSON-Dateien.
//!
//! TOML-Layout:
//!
//! ```toml
//! [[curve]]
//! type = "ellipse"
//! center = [0.0, 0.0]        # z optional, Standard 0
//! rx = 5.0
//! ry = 3.0
//!
//! [curve.attribs]
//! layer = "CURVES"
//! ```

use super::Curve;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Liste von Kurven-Definitionen in Dateireihenfolge
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveSet {
    #[serde(rename = "curve", default)]
    pub curves: Vec<Curve>,
}

impl CurveSet {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Kurven-Definitionen (TOML) fehlerhaft")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Kurven-Definitionen (JSON) fehlerhaft")
    }
}

/// Lädt Kurven-Definitionen, Format anhand der Dateiendung (`.toml` / `.json`).
pub fn load_curve_definitions(path: &Path) -> Result<Vec<Curve>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let set = match extension.as_deref() {
        Some("toml") => CurveSet::from_toml_str(&content)?,
        Some("json") => CurveSet::from_json_str(&content)?,
        other => bail!(
            "Unbekanntes Definitionsformat '{}' (erwartet .toml oder .json)",
            other.unwrap_or("")
        ),
    };

    log::info!(
        "{} Kurven-Definitionen geladen aus: {}",
        set.curves.len(),
        path.display()
    );
    Ok(set.curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::SplineMode;
    use glam::DVec3;

    #[test]
    fn test_parse_toml_curve_set() {
        let toml = r#"
            [[curve]]
            type = "ellipse"
            center = [1.0, 2.0, 0.0]
            rx = 5.0
            ry = 3.0

            [curve.attribs]
            layer = "ELLIPSEN"
            color = 1

            [[curve]]
            type = "spline"
            points = [[0.0, 0.0, 0.0], [5.0, 5.0, 0.0], [10.0, 0.0, 0.0]]
            mode = { kind = "rational_b_spline", weights = [1.0, 2.0, 1.0] }

            [[curve]]
            type = "clothoid"
            length = 20.0
            param_a = 10.0
            mirror = "x"
        "#;

        let set = CurveSet::from_toml_str(toml).expect("TOML-Parsing fehlgeschlagen");
        assert_eq!(set.curves.len(), 3);

        match &set.curves[0] {
            Curve::Ellipse(e) => {
                assert_eq!(e.rx, 5.0);
                assert_eq!(e.segments, 100, "Default-Segmente erwartet");
                assert_eq!(e.attribs.layer, "ELLIPSEN");
                assert_eq!(e.attribs.color, 1);
            }
            other => panic!("Ellipse erwartet, erhalten: {}", other.name()),
        }
        match &set.curves[1] {
            Curve::Spline(s) => assert_eq!(
                s.mode,
                SplineMode::RationalBSpline {
                    weights: Some(vec![1.0, 2.0, 1.0])
                }
            ),
            other => panic!("Spline erwartet, erhalten: {}", other.name()),
        }
        assert!(matches!(&set.curves[2], Curve::Clothoid(c) if c.mirror == "x"));
    }

    #[test]
    fn test_parse_json_bezier() {
        let json = r#"{
            "curve": [{
                "type": "bezier",
                "points": [
                    { "point": [0.0, 0.0, 0.0], "tangent_out": [2.0, 0.0, 0.0] },
                    { "point": [10.0, 0.0, 0.0], "tangent_in": [-2.0, 2.0, 0.0], "segments": 8 }
                ]
            }]
        }"#;

        let set = CurveSet::from_json_str(json).expect("JSON-Parsing fehlgeschlagen");
        match &set.curves[0] {
            Curve::Bezier(b) => {
                assert_eq!(b.points.len(), 2);
                assert_eq!(b.points[0].segments, 20);
                assert_eq!(b.points[1].segments, 8);
            }
            other => panic!("Bezier erwartet, erhalten: {}", other.name()),
        }
    }

    #[test]
    fn test_planar_points_default_z_to_zero() {
        let toml = r#"
            [[curve]]
            type = "ellipse"
            center = [1.0, 2.0]

            [[curve]]
            type = "clothoid"
            start = [3.0, 4.0]

            [[curve]]
            type = "spline"
            points = [[0.0, 0.0], [5.0, 5.0, 1.0], [10.0, 0.0]]

            [[curve]]
            type = "bezier"
            points = [
                { point = [0.0, 0.0], tangent_out = [2.0, 0.0] },
                { point = [10.0, 0.0, 2.0], tangent_in = [-2.0, 2.0] },
            ]
        "#;

        let set = CurveSet::from_toml_str(toml).expect("TOML-Parsing fehlgeschlagen");
        assert!(matches!(&set.curves[0], Curve::Ellipse(e) if e.center == DVec3::new(1.0, 2.0, 0.0)));
        assert!(matches!(&set.curves[1], Curve::Clothoid(c) if c.start == DVec3::new(3.0, 4.0, 0.0)));
        match &set.curves[2] {
            Curve::Spline(s) => assert_eq!(s.points[1], DVec3::new(5.0, 5.0, 1.0)),
            other => panic!("Spline erwartet, erhalten: {}", other.name()),
        }
        match &set.curves[3] {
            Curve::Bezier(b) => {
                assert_eq!(b.points[0].tangent_out, Some(DVec3::new(2.0, 0.0, 0.0)));
                assert_eq!(b.points[1].point, DVec3::new(10.0, 0.0, 2.0));
                assert_eq!(b.points[1].tangent_in, Some(DVec3::new(-2.0, 2.0, 0.0)));
            }
            other => panic!("Bezier erwartet, erhalten: {}", other.name()),
        }
    }

    #[test]
    fn test_single_coordinate_point_rejected() {
        let json = r#"{ "curve": [{ "type": "ellipse", "center": [1.0] }] }"#;
        assert!(CurveSet::from_json_str(json).is_err());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = std::env::temp_dir().join("dxf_curve_kit_defs_test.yaml");
        std::fs::write(&path, "curve: []").expect("Schreiben fehlgeschlagen");
        let result = load_curve_definitions(&path);
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }
}
