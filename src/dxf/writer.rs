//! Writer für den ENTITIES-Abschnitt einer ASCII-DXF-Datei.

use super::tag::DxfTag;
use super::text_chunks::text_lines_to_dxf_tags;
use crate::core::{Body, Drawing, Entity, Polyline, PolylineKind, BYLAYER};
use crate::shared::DrawingOptions;
use anyhow::{bail, Context, Result};
use glam::DVec3;

/// POLYLINE-Flag: geschlossen
const POLYLINE_CLOSED: i32 = 1;
/// POLYLINE-Flag: 3D-Polylinie
const POLYLINE_3D: i32 = 8;
/// VERTEX-Flag: Vertex einer 3D-Polylinie
const VERTEX_3D: i32 = 32;
/// ACIS-Modeler-Version im BODY-Record
const ACIS_MODELER_VERSION: i32 = 1;

/// Sammelt Records in Schreibreihenfolge.
#[derive(Debug, Clone)]
pub struct TagWriter {
    tags: Vec<DxfTag>,
    precision: usize,
}

impl TagWriter {
    /// `precision`: Nachkommastellen für Gleitkommawerte
    pub fn new(precision: usize) -> Self {
        Self {
            tags: Vec::new(),
            precision,
        }
    }

    pub fn write_str(&mut self, code: i32, value: &str) {
        self.tags.push(DxfTag::new(code, value));
    }

    pub fn write_int(&mut self, code: i32, value: i64) {
        self.tags.push(DxfTag::new(code, value.to_string()));
    }

    pub fn write_float(&mut self, code: i32, value: f64) {
        self.tags.push(DxfTag::new(code, format_float(value, self.precision)));
    }

    /// Schreibt einen Punkt als Group-Codes `code`, `code + 10`, `code + 20`.
    pub fn write_vertex(&mut self, code: i32, point: DVec3) {
        self.write_float(code, point.x);
        self.write_float(code + 10, point.y);
        self.write_float(code + 20, point.z);
    }

    pub fn write_tags(&mut self, tags: impl IntoIterator<Item = DxfTag>) {
        self.tags.extend(tags);
    }

    pub fn tags(&self) -> &[DxfTag] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<DxfTag> {
        self.tags
    }

    /// Alle Records als ASCII-DXF-Text
    pub fn to_dxf_string(&self) -> String {
        self.tags.iter().map(|tag| tag.to_string()).collect()
    }
}

/// Schreibt alle Entities einer Zeichnung als ENTITIES-Abschnitt mit EOF.
pub fn write_drawing(drawing: &Drawing, options: &DrawingOptions) -> Result<String> {
    Ok(drawing_to_writer(drawing, options)?.to_dxf_string())
}

/// Wie [`write_drawing`], liefert aber die Records statt Text.
pub fn drawing_to_writer(drawing: &Drawing, options: &DrawingOptions) -> Result<TagWriter> {
    let mut writer = TagWriter::new(options.float_precision);
    writer.write_str(0, "SECTION");
    writer.write_str(2, "ENTITIES");

    for (index, entity) in drawing.entities().iter().enumerate() {
        match entity {
            Entity::Polyline(polyline) => {
                if polyline.points.is_empty() {
                    bail!("Polyline {} hat keine Punkte", index);
                }
                write_polyline(&mut writer, polyline, options);
            }
            Entity::Body(body) => write_body(&mut writer, body, options)
                .with_context(|| format!("BODY {} nicht exportierbar", index))?,
        }
    }

    writer.write_str(0, "ENDSEC");
    writer.write_str(0, "EOF");

    log::info!(
        "{} Entities als {} Records geschrieben",
        drawing.entity_count(),
        writer.tags().len()
    );
    Ok(writer)
}

fn write_polyline(writer: &mut TagWriter, polyline: &Polyline, options: &DrawingOptions) {
    let is_3d = polyline.kind == PolylineKind::ThreeD;
    let layer = layer_name(&polyline.attribs.layer, options);

    let mut flags = 0;
    if polyline.attribs.closed {
        flags |= POLYLINE_CLOSED;
    }
    if is_3d {
        flags |= POLYLINE_3D;
    }

    writer.write_str(0, "POLYLINE");
    write_common(writer, layer, &polyline.attribs);
    writer.write_int(66, 1);
    let elevation = if is_3d { 0.0 } else { polyline.elevation() };
    writer.write_vertex(10, DVec3::new(0.0, 0.0, elevation));
    writer.write_int(70, flags.into());

    for point in &polyline.points {
        writer.write_str(0, "VERTEX");
        writer.write_str(8, layer);
        writer.write_vertex(10, *point);
        if is_3d {
            writer.write_int(70, VERTEX_3D.into());
        }
    }

    writer.write_str(0, "SEQEND");
    writer.write_str(8, layer);
}

fn write_body(writer: &mut TagWriter, body: &Body, options: &DrawingOptions) -> Result<()> {
    // Jeder Record-Wert belegt genau eine Textzeile
    if let Some(line) = body.acis.iter().position(|l| l.contains(['\n', '\r'])) {
        bail!("ACIS-Zeile {} enthält einen Zeilenumbruch", line);
    }
    let layer = layer_name(&body.attribs.layer, options);
    writer.write_str(0, "BODY");
    write_common(writer, layer, &body.attribs);
    writer.write_int(70, ACIS_MODELER_VERSION.into());
    let tags = text_lines_to_dxf_tags(&body.acis);
    log::debug!(
        "BODY: {} ACIS-Zeilen als {} Records",
        body.acis.len(),
        tags.len()
    );
    writer.write_tags(tags);
    Ok(())
}

fn write_common(writer: &mut TagWriter, layer: &str, attribs: &crate::core::GraphicAttribs) {
    writer.write_str(8, layer);
    if let Some(linetype) = &attribs.linetype {
        writer.write_str(6, linetype);
    }
    if attribs.color != BYLAYER {
        writer.write_int(62, attribs.color.into());
    }
}

/// Leerer Layer-Name fällt auf den Standard-Layer der Optionen zurück.
fn layer_name<'a>(layer: &'a str, options: &'a DrawingOptions) -> &'a str {
    if layer.is_empty() {
        &options.default_layer
    } else {
        layer
    }
}

fn format_float(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    // -0.000 vermeiden
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}
