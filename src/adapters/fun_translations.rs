//! FunTranslations API client.
//!
//! `GET {base}/translate/{yoda|shakespeare}.json?text=...` answers with
//! `{"success": {...}, "contents": {"translated": "..."}}`. Every failure is
//! reported as `PokedexError::TranslationError`, which the information
//! service treats as "fall back to the original description".

use crate::adapters::poke_api::parse_base_url;
use crate::domain::model::Tone;
use crate::domain::ports::TranslationClient;
use crate::utils::error::{PokedexError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TRANSLATION_URL: &str = "https://api.funtranslations.com";

/// Returned when the provider answers without translated text.
pub const TRANSLATION_NOT_AVAILABLE: &str = "Translation not available.";

#[derive(Debug, Clone)]
pub struct FunTranslationsClient {
    client: Client,
    base_url: Url,
}

impl FunTranslationsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("translation_url", base_url)?,
        })
    }

    fn endpoint(&self, tone: Tone) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PokedexError::ConfigError {
                message: format!("Translation URL cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .push("translate")
            .push(&format!("{}.json", tone.translation_type()));
        Ok(url)
    }

    async fn request_translation(&self, text: &str, tone: Tone) -> Result<String> {
        let url = self.endpoint(tone)?;

        tracing::debug!("Requesting {} translation from: {}", tone, url);
        let response = self
            .client
            .get(url.clone())
            .query(&[("text", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let json: serde_json::Value = serde_json::from_str(&body)?;
        extract_translated_text(&json)
    }
}

#[async_trait]
impl TranslationClient for FunTranslationsClient {
    async fn translate(&self, text: &str, tone: Tone) -> Result<String> {
        self.request_translation(text, tone).await.map_err(|e| {
            tracing::error!(
                translation_type = tone.translation_type(),
                error = %e,
                "An unexpected error occurred while getting translation"
            );
            PokedexError::TranslationError {
                message: format!(
                    "An unexpected error occurred while getting {} translation: {}",
                    tone.translation_type(),
                    e
                ),
            }
        })
    }
}

/// 取出 `contents.translated`，欄位缺少或為 null 時回傳 sentinel 字串
///
/// Root and `contents` must be objects and `translated` must be a string
/// when present; anything else is a malformed response.
pub fn extract_translated_text(json: &serde_json::Value) -> Result<String> {
    let root = json.as_object().ok_or_else(|| malformed("response root is not an object"))?;

    let contents = match root.get("contents") {
        None | Some(serde_json::Value::Null) => return Ok(TRANSLATION_NOT_AVAILABLE.to_string()),
        Some(contents) => contents
            .as_object()
            .ok_or_else(|| malformed("`contents` is not an object"))?,
    };

    match contents.get("translated") {
        None | Some(serde_json::Value::Null) => Ok(TRANSLATION_NOT_AVAILABLE.to_string()),
        Some(serde_json::Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(malformed("`contents.translated` is not a string")),
    }
}

fn malformed(reason: &str) -> PokedexError {
    PokedexError::TranslationError {
        message: format!("Unexpected translation response: {}", reason),
    }
}
