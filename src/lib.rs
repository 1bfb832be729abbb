//! DXF Curve Kit Library.
//! Parametrische Kurven als Polylinien und Text-Chunk-Codec für getaggte DXF-Records.

pub mod core;
pub mod curves;
pub mod dxf;
pub mod math;
pub mod shared;

pub use self::core::{Body, Drawing, Entity, GraphicAttribs, Polyline, PolylineKind, PolylineSink};
pub use curves::{
    load_curve_definitions, Bezier, Clothoid, Curve, CurveError, Ellipse, Spline, SplineMode,
};
pub use dxf::{
    dxf_tags_to_text_lines, tags_to_text_lines, text_lines_to_dxf_tags, text_lines_to_tags,
    write_drawing, ChunkError, ChunkTag, DxfTag, MAX_STR_LEN,
};
pub use shared::DrawingOptions;
