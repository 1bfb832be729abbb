//! In-Memory-Zeichnung, die gerenderte Polylinien und ACIS-Körper aufnimmt.

use super::GraphicAttribs;
use crate::dxf::text_chunks::{dxf_tags_to_text_lines, ChunkError};
use crate::dxf::DxfTag;
use glam::DVec3;

/// Empfänger für gerenderte Kurven.
///
/// 2D-Polylinien liegen in einer Ebene, die Elevation kommt aus der z-Koordinate
/// der Punkte. 3D-Polylinien tragen echte 3D-Vertices.
pub trait PolylineSink {
    /// Fügt eine ebene Polylinie hinzu
    fn add_polyline2d(&mut self, points: Vec<DVec3>, attribs: GraphicAttribs);
    /// Fügt eine 3D-Polylinie hinzu
    fn add_polyline3d(&mut self, points: Vec<DVec3>, attribs: GraphicAttribs);
}

/// Art einer Polylinie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineKind {
    /// Ebene Polylinie mit Elevation
    TwoD,
    /// 3D-Polylinie
    ThreeD,
}

/// Eine gespeicherte Polylinie
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub kind: PolylineKind,
    pub points: Vec<DVec3>,
    pub attribs: GraphicAttribs,
}

impl Polyline {
    /// Elevation einer 2D-Polylinie (z des ersten Punkts, sonst 0)
    pub fn elevation(&self) -> f64 {
        self.points.first().map(|p| p.z).unwrap_or(0.0)
    }
}

/// ACIS-Volumenkörper als Folge von Textzeilen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    /// ACIS-Daten, eine Zeile pro Eintrag
    pub acis: Vec<String>,
    pub attribs: GraphicAttribs,
}

impl Body {
    /// Baut einen Body aus Records mit Group-Code 1/3 (Primary/Continuation).
    pub fn from_acis_tags(tags: &[DxfTag], attribs: GraphicAttribs) -> Result<Self, ChunkError> {
        let acis = dxf_tags_to_text_lines(tags)?;
        log::debug!(
            "Body aus {} Records gelesen: {} ACIS-Zeilen",
            tags.len(),
            acis.len()
        );
        Ok(Self { acis, attribs })
    }
}

/// Eine Entity der Zeichnung
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Polyline(Polyline),
    Body(Body),
}

/// Modelspace einer Zeichnung, Entities in Einfügereihenfolge
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    entities: Vec<Entity>,
}

impl Drawing {
    /// Erstellt eine leere Zeichnung
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ACIS-Körper hinzu
    pub fn add_body(&mut self, acis: Vec<String>, attribs: GraphicAttribs) {
        self.entities.push(Entity::Body(Body { acis, attribs }));
    }

    /// Alle Entities in Einfügereihenfolge
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Nur die Polylinien
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Polyline(p) => Some(p),
            Entity::Body(_) => None,
        })
    }

    /// Anzahl der Entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn push_polyline(&mut self, kind: PolylineKind, points: Vec<DVec3>, attribs: GraphicAttribs) {
        log::debug!(
            "Polyline {:?} mit {} Punkten auf Layer '{}'",
            kind,
            points.len(),
            attribs.layer
        );
        self.entities.push(Entity::Polyline(Polyline {
            kind,
            points,
            attribs,
        }));
    }
}

impl PolylineSink for Drawing {
    fn add_polyline2d(&mut self, points: Vec<DVec3>, attribs: GraphicAttribs) {
        self.push_polyline(PolylineKind::TwoD, points, attribs);
    }

    fn add_polyline3d(&mut self, points: Vec<DVec3>, attribs: GraphicAttribs) {
        self.push_polyline(PolylineKind::ThreeD, points, attribs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_keeps_insertion_order() {
        let mut drawing = Drawing::new();
        drawing.add_polyline3d(vec![DVec3::ZERO, DVec3::X], GraphicAttribs::default());
        drawing.add_body(vec!["acis".into()], GraphicAttribs::default());
        drawing.add_polyline2d(vec![DVec3::new(0.0, 0.0, 2.0)], GraphicAttribs::default());

        assert_eq!(drawing.entity_count(), 3);
        assert!(matches!(drawing.entities()[1], Entity::Body(_)));
        let kinds: Vec<_> = drawing.polylines().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PolylineKind::ThreeD, PolylineKind::TwoD]);
        assert_eq!(drawing.polylines().nth(1).map(|p| p.elevation()), Some(2.0));
    }

    #[test]
    fn test_body_from_acis_tags() {
        let tags = vec![
            DxfTag::new(1, "400 0 1 0"),
            DxfTag::new(1, "16Autodesk AutoCAD"),
            DxfTag::new(3, " 19 ASM"),
        ];
        let body = Body::from_acis_tags(&tags, GraphicAttribs::default())
            .expect("Body erwartet");
        assert_eq!(body.acis, vec!["400 0 1 0", "16Autodesk AutoCAD 19 ASM"]);
    }

    #[test]
    fn test_body_from_acis_tags_malformed() {
        let tags = vec![DxfTag::new(3, "dangling")];
        assert!(matches!(
            Body::from_acis_tags(&tags, GraphicAttribs::default()),
            Err(ChunkError::MalformedContinuation { index: 0 })
        ));
    }
}
