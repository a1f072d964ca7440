//! Payloads shaped like scripture.api.bible `v1` responses.

use serde_json::{json, Value};

/// Bible id of the King James Version on scripture.api.bible.
pub const KJV_ID: &str = "de4e12af7f28f599-02";

/// Creates a `GET /bibles` response listing a single translation.
pub fn bibles() -> Value {
    json!({
        "data": [
            {
                "id": KJV_ID,
                "dblId": "de4e12af7f28f599",
                "abbreviation": "engKJV",
                "name": "King James (Authorised) Version",
                "language": { "id": "eng", "name": "English" }
            }
        ]
    })
}

/// Creates a `GET /bibles/{bible_id}/books` response with Genesis and John.
pub fn books(bible_id: &str) -> Value {
    json!({
        "data": [
            { "id": "GEN", "bibleId": bible_id, "abbreviation": "Gen", "name": "Genesis" },
            { "id": "JHN", "bibleId": bible_id, "abbreviation": "Jhn", "name": "John" }
        ]
    })
}

/// Creates a `GET /bibles/{bible_id}/books/{book_id}/chapters` response.
///
/// The list starts with the `intro` pseudo-chapter followed by chapters `1..=count`,
/// matching how the provider lists books that carry an introduction.
pub fn chapters(bible_id: &str, book_id: &str, count: u32) -> Value {
    let mut data = vec![json!({
        "id": format!("{}.intro", book_id),
        "bibleId": bible_id,
        "bookId": book_id,
        "number": "intro",
        "reference": format!("{} Introduction", book_id)
    })];

    for number in 1..=count {
        data.push(json!({
            "id": format!("{}.{}", book_id, number),
            "bibleId": bible_id,
            "bookId": book_id,
            "number": number.to_string(),
            "reference": format!("{} {}", book_id, number)
        }));
    }

    json!({ "data": data })
}

/// Creates a `GET /bibles/{bible_id}/chapters/{chapter_id}?content-type=json` response
/// holding a single verse.
pub fn chapter(bible_id: &str, chapter_id: &str) -> Value {
    json!({
        "data": {
            "id": chapter_id,
            "bibleId": bible_id,
            "reference": chapter_id,
            "content": [
                {
                    "name": "para",
                    "type": "tag",
                    "attrs": { "style": "p" },
                    "items": [
                        {
                            "name": "verse",
                            "type": "tag",
                            "attrs": { "number": "1", "style": "v", "sid": format!("{}.1", chapter_id) },
                            "items": [ { "type": "text", "text": "In the beginning was the Word" } ]
                        }
                    ]
                }
            ]
        }
    })
}
