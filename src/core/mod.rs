//! Core-Domänentypen: Darstellungs-Attribute, Zeichnung, Polylinien-Senke.

pub mod attribs;
pub mod drawing;

pub use attribs::{GraphicAttribs, BYLAYER, DEFAULT_LAYER};
pub use drawing::{Body, Drawing, Entity, Polyline, PolylineKind, PolylineSink};
