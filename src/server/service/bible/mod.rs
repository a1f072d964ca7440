//! Bible content service.
//!
//! Serves translations, books, chapters and passages by combining the two upstream
//! providers. scripture.api.bible is the default source; the ESV translation is not
//! available there and is served from the ESV API instead, with its plain text reshaped
//! to match scripture.api.bible's structured chapter documents.

use serde_json::{json, Value};

use crate::server::{
    config::ApiEndpoint,
    data::{esv::EsvApiRepository, scripture::ScriptureApiRepository},
    error::{
        upstream::{UpstreamError, UpstreamResource},
        AppError,
    },
    model::passage::Passage,
    util::passage::{normalize, segment},
};

/// Translation id that routes passage requests to the ESV API.
pub const ESV_TRANSLATION_ID: &str = "ESV";

/// Display name advertised for the ESV in the translation list.
pub const ESV_TRANSLATION_NAME: &str = "English Standard Version";

/// Chapter number scripture.api.bible uses for book introductions.
const INTRO_CHAPTER: &str = "intro";

pub struct BibleService<'a> {
    http_client: &'a reqwest::Client,
    scripture: &'a ApiEndpoint,
    esv: &'a ApiEndpoint,
}

impl<'a> BibleService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        scripture: &'a ApiEndpoint,
        esv: &'a ApiEndpoint,
    ) -> Self {
        Self {
            http_client,
            scripture,
            esv,
        }
    }

    /// Gets all available translations, with the ESV appended.
    ///
    /// The upstream document is returned whole so any fields the provider adds reach
    /// the client; only the `data` array is extended.
    ///
    /// # Returns
    /// - `Ok(Value)` - Translation list document ending with the ESV entry
    /// - `Err(AppError::UpstreamErr(InvalidFormat))` - Upstream `data` is not an array
    /// - `Err(AppError::UpstreamErr)` - Upstream request failed
    pub async fn get_translations(&self) -> Result<Value, AppError> {
        let mut bibles = ScriptureApiRepository::new(self.http_client, self.scripture)
            .get_bibles()
            .await?;

        data_array(&mut bibles, UpstreamResource::Translations)?.push(json!({
            "id": ESV_TRANSLATION_ID,
            "name": ESV_TRANSLATION_NAME,
        }));

        Ok(bibles)
    }

    /// Gets the books of a translation, forwarded as-is.
    pub async fn get_books(&self, bible_id: &str) -> Result<Value, AppError> {
        ScriptureApiRepository::new(self.http_client, self.scripture)
            .get_books(bible_id)
            .await
    }

    /// Gets the chapters of a book without the `intro` pseudo-chapter.
    ///
    /// # Returns
    /// - `Ok(Value)` - Chapter list document with intro entries removed
    /// - `Err(AppError::UpstreamErr(InvalidFormat))` - Upstream `data` is not an array
    /// - `Err(AppError::UpstreamErr)` - Upstream request failed
    pub async fn get_chapters(&self, bible_id: &str, book_id: &str) -> Result<Value, AppError> {
        let mut chapters = ScriptureApiRepository::new(self.http_client, self.scripture)
            .get_chapters(bible_id, book_id)
            .await?;

        data_array(&mut chapters, UpstreamResource::Chapters)?
            .retain(|chapter| chapter.get("number").and_then(Value::as_str) != Some(INTRO_CHAPTER));

        Ok(chapters)
    }

    /// Gets a passage from whichever provider serves the translation.
    ///
    /// For the ESV, `reference` is normalized into an ESV query, the returned text is
    /// segmented at its verse markers and verse ids are built from the original
    /// `reference`. Every other translation is fetched from scripture.api.bible as a
    /// structured chapter and forwarded untouched.
    ///
    /// # Arguments
    /// - `translation_id` - `ESV` or a scripture.api.bible translation id
    /// - `reference` - Dotted chapter reference, e.g. `JHN.3`
    ///
    /// # Returns
    /// - `Ok(Passage::Structured)` - Segmented ESV passage (possibly without verses)
    /// - `Ok(Passage::Forwarded)` - scripture.api.bible chapter document
    /// - `Err(AppError::UpstreamErr)` - Upstream request failed
    pub async fn get_passage(
        &self,
        translation_id: &str,
        reference: &str,
    ) -> Result<Passage, AppError> {
        if translation_id != ESV_TRANSLATION_ID {
            let chapter = ScriptureApiRepository::new(self.http_client, self.scripture)
                .get_chapter(translation_id, reference)
                .await?;

            return Ok(Passage::Forwarded(chapter));
        }

        let query = normalize(reference);
        let text = EsvApiRepository::new(self.http_client, self.esv)
            .get_passage_text(&query)
            .await?;

        let paragraph = segment(reference, &text);
        tracing::debug!(
            "Segmented ESV passage {} into {} verses",
            query,
            paragraph.verses.len()
        );

        Ok(Passage::Structured(paragraph))
    }
}

/// Returns the `data` array of an upstream list document.
fn data_array(
    document: &mut Value,
    resource: UpstreamResource,
) -> Result<&mut Vec<Value>, UpstreamError> {
    document
        .get_mut("data")
        .and_then(Value::as_array_mut)
        .ok_or(UpstreamError::InvalidFormat { resource })
}

#[cfg(test)]
mod test;
