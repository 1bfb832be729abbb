//! Text-Chunk-Codec für lange Textzeilen in getaggten DXF-Records.
//!
//! Eine Textzeile wird in Fragmente von höchstens [`MAX_STR_LEN`] Zeichen zerlegt.
//! Das erste Fragment trägt den Group-Code 1 (Primary), alle weiteren den
//! Group-Code 3 (Continuation). Beim Lesen beginnt jeder Primary-Record eine neue
//! Zeile, Continuation-Records werden an die aktuelle Zeile angehängt.
//!
//! Gezählt wird in Unicode-Skalarwerten (`char`), ein Fragment endet nie mitten
//! in einem Zeichen.

use super::tag::DxfTag;
use thiserror::Error;

/// Maximale Nutzlast eines Fragments in Zeichen (fest im DXF-Format).
pub const MAX_STR_LEN: usize = 255;

/// Group-Code eines Primary-Fragments.
pub const PRIMARY_CODE: i32 = 1;
/// Group-Code eines Continuation-Fragments.
pub const CONTINUATION_CODE: i32 = 3;

/// Unterscheidet den Beginn einer Zeile von ihrer Fortsetzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkTag {
    /// Beginnt eine neue Textzeile
    Primary,
    /// Hängt an das vorherige Fragment an
    Continuation,
}

impl ChunkTag {
    /// Numerischer Group-Code im Record-Stream.
    pub fn code(self) -> i32 {
        match self {
            ChunkTag::Primary => PRIMARY_CODE,
            ChunkTag::Continuation => CONTINUATION_CODE,
        }
    }

    /// Ordnet einen Group-Code zu, `None` für fremde Codes.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            PRIMARY_CODE => Some(ChunkTag::Primary),
            CONTINUATION_CODE => Some(ChunkTag::Continuation),
            _ => None,
        }
    }
}

/// Fehler beim Zusammensetzen von Text-Fragmenten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// Continuation-Fragment ohne vorangehendes Primary-Fragment
    #[error("Continuation-Fragment an Position {index} ohne vorangehendes Primary-Fragment")]
    MalformedContinuation { index: usize },
    /// Record mit einem Group-Code, der weder 1 noch 3 ist
    #[error("Unerwarteter Group-Code {code} an Position {index} (erwartet 1 oder 3)")]
    UnknownTagCode { code: i32, index: usize },
}

/// Zerlegt Textzeilen in getaggte Fragmente.
///
/// Jede Zeile erzeugt mindestens ein Paar (auch die leere Zeile), die Reihenfolge
/// der Eingabe bleibt erhalten.
pub fn text_lines_to_tags<I, S>(lines: I) -> Vec<(ChunkTag, String)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = Vec::new();
    for line in lines {
        let mut tag = ChunkTag::Primary;
        for fragment in split_line(line.as_ref()) {
            tags.push((tag, fragment.to_string()));
            tag = ChunkTag::Continuation;
        }
    }
    tags
}

/// Setzt getaggte Fragmente wieder zu Textzeilen zusammen.
///
/// Bricht beim ersten Continuation-Fragment ohne offene Zeile ab.
pub fn tags_to_text_lines<I, S>(tags: I) -> Result<Vec<String>, ChunkError>
where
    I: IntoIterator<Item = (ChunkTag, S)>,
    S: AsRef<str>,
{
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for (index, (tag, fragment)) in tags.into_iter().enumerate() {
        match tag {
            ChunkTag::Primary => {
                if let Some(line) = current.replace(fragment.as_ref().to_string()) {
                    lines.push(line);
                }
            }
            ChunkTag::Continuation => match current.as_mut() {
                Some(line) => line.push_str(fragment.as_ref()),
                None => return Err(ChunkError::MalformedContinuation { index }),
            },
        }
    }

    lines.extend(current);
    Ok(lines)
}

/// Wie [`text_lines_to_tags`], liefert aber fertige Records mit Group-Code.
pub fn text_lines_to_dxf_tags<I, S>(lines: I) -> Vec<DxfTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    text_lines_to_tags(lines)
        .into_iter()
        .map(|(tag, fragment)| DxfTag::new(tag.code(), fragment))
        .collect()
}

/// Wie [`tags_to_text_lines`], liest aber Records mit Group-Code 1/3.
///
/// Andere Group-Codes führen zu [`ChunkError::UnknownTagCode`].
pub fn dxf_tags_to_text_lines(tags: &[DxfTag]) -> Result<Vec<String>, ChunkError> {
    let pairs = tags
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            ChunkTag::from_code(tag.code)
                .map(|chunk_tag| (chunk_tag, tag.value.as_str()))
                .ok_or(ChunkError::UnknownTagCode {
                    code: tag.code,
                    index,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tags_to_text_lines(pairs)
}

/// Schneidet eine Zeile in Fragmente zu je höchstens `MAX_STR_LEN` Zeichen.
///
/// Die leere Zeile liefert genau ein leeres Fragment; ein exaktes Vielfaches
/// von `MAX_STR_LEN` erzeugt kein leeres Rest-Fragment.
fn split_line(line: &str) -> Vec<&str> {
    let mut fragments = Vec::with_capacity(line.len() / MAX_STR_LEN + 1);
    let mut start = 0;
    let mut count = 0;

    for (byte_idx, _) in line.char_indices() {
        if count == MAX_STR_LEN {
            fragments.push(&line[start..byte_idx]);
            start = byte_idx;
            count = 0;
        }
        count += 1;
    }

    fragments.push(&line[start..]);
    fragments
}
