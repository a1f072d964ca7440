use std::sync::LazyLock;

use regex::Regex;

use crate::server::model::passage::{StructuredParagraph, VerseNode, VerseSpan};

/// `[12]`, `[ 12 ]` and similar; group 1 holds the verse number.
static VERSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*([0-9]+)\s*\]").expect("verse marker pattern is a valid regex")
});

/// Builds the prefix shared by every verse id of a passage.
///
/// Each whitespace character is replaced by `.` and a single `.` is appended, so both
/// `JHN 3` and `JHN.3` become `JHN.3.`. Casing is preserved.
pub fn sid_prefix(reference: &str) -> String {
    let mut prefix: String = reference
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { c })
        .collect();
    prefix.push('.');
    prefix
}

/// Splits raw passage text at its verse markers.
///
/// A span runs from the end of one marker to the start of the next (or the end of the
/// text) and is trimmed. Text before the first marker is discarded, as are spans that
/// are empty after trimming. Spans come back in textual order, not numeric order.
pub fn verse_spans(raw_text: &str) -> Vec<VerseSpan> {
    let markers: Vec<(usize, usize, &str)> = VERSE_MARKER
        .captures_iter(raw_text)
        .filter_map(|caps| {
            let marker = caps.get(0)?;
            let number = caps.get(1)?;
            Some((marker.start(), marker.end(), number.as_str()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, text_start, verse_number))| {
            let text_end = markers
                .get(i + 1)
                .map_or(raw_text.len(), |&(next_start, _, _)| next_start);
            let text = raw_text[text_start..text_end].trim();

            if text.is_empty() {
                return None;
            }

            Some(VerseSpan {
                verse_number: verse_number.to_string(),
                text: text.to_string(),
            })
        })
        .collect()
}

/// Segments raw ESV passage text into a structured paragraph.
///
/// Every retained verse span becomes a `VerseNode` whose sid is the reference's
/// [`sid_prefix`] followed by the verse number. Text without any markers yields an empty
/// paragraph.
///
/// # Arguments
/// - `reference` - Reference as supplied by the caller, e.g. `JHN.3` or `JHN 3`
/// - `raw_text` - Passage text containing `[n]` verse markers
///
/// # Returns
/// - `StructuredParagraph` holding the verses in textual order
pub fn segment(reference: &str, raw_text: &str) -> StructuredParagraph {
    let prefix = sid_prefix(reference);

    let verses = verse_spans(raw_text)
        .into_iter()
        .map(|span| VerseNode {
            sid: format!("{}{}", prefix, span.verse_number),
            text: span.text,
        })
        .collect();

    StructuredParagraph { verses }
}
