use approx::assert_relative_eq;
use dxf_curve_kit::curves::CurveSet;
use dxf_curve_kit::{
    load_curve_definitions, write_drawing, Curve, Drawing, DrawingOptions, PolylineKind,
    PolylineSink,
};
use glam::DVec3;
use std::path::Path;

/// Zählt nur die Aufrufe, speichert nichts
#[derive(Default)]
struct CountingSink {
    polylines_2d: usize,
    polylines_3d: usize,
    vertices: usize,
}

impl PolylineSink for CountingSink {
    fn add_polyline2d(&mut self, points: Vec<DVec3>, _attribs: dxf_curve_kit::GraphicAttribs) {
        self.polylines_2d += 1;
        self.vertices += points.len();
    }

    fn add_polyline3d(&mut self, points: Vec<DVec3>, _attribs: dxf_curve_kit::GraphicAttribs) {
        self.polylines_3d += 1;
        self.vertices += points.len();
    }
}

fn fixture_curves() -> Vec<Curve> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/curves.toml");
    load_curve_definitions(&path).expect("Fixture nicht ladbar")
}

#[test]
fn test_fixture_renders_into_drawing() {
    let curves = fixture_curves();
    assert_eq!(curves.len(), 4);

    let mut drawing = Drawing::new();
    for curve in &curves {
        curve.render(&mut drawing).expect("Rendern fehlgeschlagen");
    }

    let kinds: Vec<PolylineKind> = drawing.polylines().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PolylineKind::TwoD,
            PolylineKind::TwoD,
            PolylineKind::ThreeD,
            PolylineKind::ThreeD,
        ]
    );

    let counts: Vec<usize> = drawing.polylines().map(|p| p.points.len()).collect();
    assert_eq!(counts, vec![36, 21, 25, 21]);

    let ellipse = drawing.polylines().next().expect("Ellipse erwartet");
    assert_eq!(ellipse.attribs.layer, "ELLIPSEN");
    assert_eq!(ellipse.attribs.color, 1);
    assert!(ellipse.attribs.closed);

    let spline = drawing.polylines().nth(2).expect("Spline erwartet");
    assert_eq!(spline.attribs.linetype.as_deref(), Some("DASHED"));
}

#[test]
fn test_custom_sink_receives_render_calls() {
    let mut sink = CountingSink::default();
    for curve in fixture_curves() {
        curve.render(&mut sink).expect("Rendern fehlgeschlagen");
    }
    assert_eq!(sink.polylines_2d, 2);
    assert_eq!(sink.polylines_3d, 2);
    assert_eq!(sink.vertices, 36 + 21 + 25 + 21);
}

#[test]
fn test_dyn_sink_dispatch() {
    let mut drawing = Drawing::new();
    let sink: &mut dyn PolylineSink = &mut drawing;
    for curve in fixture_curves() {
        curve.render(&mut *sink).expect("Rendern fehlgeschlagen");
    }
    assert_eq!(drawing.entity_count(), 4);
}

#[test]
fn test_mirrored_clothoid_from_fixture() {
    let curves = fixture_curves();
    let Curve::Clothoid(clothoid) = &curves[3] else {
        panic!("Klothoide erwartet, erhalten: {}", curves[3].name());
    };
    let points = clothoid.points();
    assert_eq!(points[0], DVec3::new(2.0, 2.0, 0.0));
    // Spiegelung an der y-Achse + 30° Drehung: Startrichtung zeigt nach links unten
    let direction = (points[1] - points[0]).normalize();
    assert_relative_eq!(direction.x, -(30f64.to_radians().cos()), epsilon = 1e-3);
    assert_relative_eq!(direction.y, -(30f64.to_radians().sin()), epsilon = 1e-3);
}

#[test]
fn test_fixture_pipeline_writes_dxf() {
    let mut drawing = Drawing::new();
    for curve in fixture_curves() {
        curve.render(&mut drawing).expect("Rendern fehlgeschlagen");
    }
    let dxf = write_drawing(&drawing, &DrawingOptions::default()).expect("Export fehlgeschlagen");
    assert_eq!(dxf.matches("\nPOLYLINE\n").count(), 4);
    assert_eq!(dxf.matches("\nSEQEND\n").count(), 4);
    assert!(dxf.ends_with("  0\nEOF\n"));
}

#[test]
fn test_curve_set_serialization_roundtrip() {
    let set = CurveSet {
        curves: fixture_curves(),
    };
    let json = serde_json::to_string(&set).expect("JSON-Export fehlgeschlagen");
    let reparsed = CurveSet::from_json_str(&json).expect("JSON-Parsing fehlgeschlagen");
    assert_eq!(reparsed, set);
}
