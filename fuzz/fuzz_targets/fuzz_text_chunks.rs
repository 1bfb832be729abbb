#![no_main]

use dxf_curve_kit::{tags_to_text_lines, text_lines_to_tags, ChunkTag, MAX_STR_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let lines: Vec<&str> = text.split('\n').collect();

    let tags = text_lines_to_tags(&lines);
    assert!(tags
        .iter()
        .all(|(_, fragment)| fragment.chars().count() <= MAX_STR_LEN));
    assert_eq!(
        tags.iter().filter(|(tag, _)| *tag == ChunkTag::Primary).count(),
        lines.len()
    );

    let decoded = tags_to_text_lines(tags).expect("Encoder liefert nie fuehrende Continuation");
    assert_eq!(decoded, lines);

    // Beliebige Tag-Folgen duerfen nur mit MalformedContinuation scheitern
    let arbitrary = data
        .chunks(2)
        .map(|pair| {
            let tag = if pair[0] % 2 == 0 {
                ChunkTag::Primary
            } else {
                ChunkTag::Continuation
            };
            (tag, String::from_utf8_lossy(pair).into_owned())
        });
    let _ = tags_to_text_lines(arbitrary);
});
