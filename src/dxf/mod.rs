//! DXF-Records: getaggte Group-Code/Wert-Paare, Text-Chunk-Codec, Writer.
//!
//! Lesen eines kompletten Record-Streams ist nicht Teil dieses Moduls; der
//! Codec arbeitet auf bereits getrennten Records.

pub mod tag;
pub mod text_chunks;
pub mod writer;

pub use tag::DxfTag;
pub use text_chunks::{
    dxf_tags_to_text_lines, tags_to_text_lines, text_lines_to_dxf_tags, text_lines_to_tags,
    ChunkError, ChunkTag, MAX_STR_LEN,
};
pub use writer::{drawing_to_writer, write_drawing, TagWriter};
