//! Payloads shaped like api.esv.org `v3/passage/text` responses.

use serde_json::{json, Value};

/// Creates a passage text response with a single passage.
///
/// # Arguments
/// - `canonical` - Canonical reference echoed by the provider, e.g. `John 3:16`
/// - `text` - Passage text containing `[n]` verse markers
pub fn passage(canonical: &str, text: &str) -> Value {
    json!({
        "query": canonical,
        "canonical": canonical,
        "passages": [text]
    })
}

/// Creates a passage text response for a query that matched nothing.
pub fn empty() -> Value {
    json!({
        "query": "",
        "canonical": "",
        "passages": []
    })
}

/// Passage text for the opening of Nahum 1 as returned with short copyright enabled.
pub fn nahum_1() -> &'static str {
    "Nahum 1\n\n  [1] An oracle concerning Nineveh. The book of the vision of Nahum of Elkosh.\n\n  [2] The LORD is a jealous and avenging God; the LORD is avenging and wrathful; (ESV)"
}
