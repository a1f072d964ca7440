//! Domain models for structured passages.
//!
//! These values are produced by the passage parser and converted to `PassageDto` at the
//! controller boundary. None of them outlive a request.

use serde_json::Value;

use crate::model::bible::{
    ParagraphDto, PassageContentDto, PassageDto, TextDto, VerseAttrsDto, VerseDto,
};

/// Text belonging to a single `[n]` verse marker.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseSpan {
    /// Digits exactly as written inside the marker, e.g. `"16"`.
    pub verse_number: String,
    /// Trimmed prose between this marker and the next one. Never empty.
    pub text: String,
}

/// A verse node ready to be placed in a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseNode {
    /// Verse identifier, e.g. `"JHN.3.16"`.
    pub sid: String,
    /// Verse text.
    pub text: String,
}

impl VerseNode {
    pub fn into_dto(self) -> VerseDto {
        VerseDto {
            name: "verse".to_string(),
            attrs: VerseAttrsDto { sid: self.sid },
            items: vec![TextDto {
                kind: "text".to_string(),
                text: self.text,
            }],
        }
    }
}

/// The single paragraph wrapping every verse of a segmented passage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredParagraph {
    /// Verses in the order their markers appear in the source text.
    pub verses: Vec<VerseNode>,
}

impl StructuredParagraph {
    /// Converts the paragraph to the full passage response document.
    ///
    /// The paragraph is always emitted, so a passage with no verses still serializes as
    /// `{"data":{"content":[{"name":"para","items":[]}]}}`.
    pub fn into_dto(self) -> PassageDto {
        PassageDto {
            data: PassageContentDto {
                content: vec![ParagraphDto {
                    name: "para".to_string(),
                    items: self.verses.into_iter().map(VerseNode::into_dto).collect(),
                }],
            },
        }
    }
}

/// A passage as served by one of the upstream providers.
#[derive(Debug, Clone, PartialEq)]
pub enum Passage {
    /// ESV text segmented into the structured shape.
    Structured(StructuredParagraph),
    /// scripture.api.bible chapter document, forwarded untouched.
    Forwarded(Value),
}
