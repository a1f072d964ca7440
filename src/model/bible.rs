use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured passage response.
///
/// Mirrors the document shape returned by scripture.api.bible for a chapter so that
/// consumers handle passages identically regardless of which provider served them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PassageDto {
    pub data: PassageContentDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PassageContentDto {
    pub content: Vec<ParagraphDto>,
}

/// A `para` node holding the verses of a passage in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParagraphDto {
    pub name: String,
    pub items: Vec<VerseDto>,
}

/// A `verse` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VerseDto {
    pub name: String,
    pub attrs: VerseAttrsDto,
    pub items: Vec<TextDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VerseAttrsDto {
    /// Verse identifier in `BOOK.CHAPTER.VERSE` form, e.g. `JHN.3.16`.
    pub sid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}
