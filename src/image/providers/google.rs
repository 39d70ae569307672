//! Google Generative Language API studio (Gemini editing, Imagen generation).

use crate::error::{parse_retry_after, sanitize_error_message, Result, StudioError};
use crate::image::provider::ImageStudio;
use crate::image::providers::gemini::{self, GeminiModel};
use crate::image::providers::imagen::{self, ImagenModel};
use crate::image::types::{DataUrl, SourceImage};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared HTTP plumbing for the Google endpoints.
pub(crate) struct ApiContext {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ApiContext {
    /// URL of `method` on `model`, e.g. `models/x:predict`.
    pub(crate) fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    /// POSTs `body` as JSON and decodes a successful JSON response.
    pub(crate) async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        tracing::debug!(url, "sending Google API request");
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let text = response.text().await.unwrap_or_default();
            return Err(parse_error(status.as_u16(), &text, &headers));
        }

        Ok(response.json().await?)
    }
}

fn parse_error(status: u16, text: &str, headers: &reqwest::header::HeaderMap) -> StudioError {
    let text = sanitize_error_message(text);
    if status == 404 {
        return StudioError::InvalidRequest(
            "Model not found. Verify the model name is correct.".into(),
        );
    }
    if status == 429 {
        let retry_after = parse_retry_after(headers).map(std::time::Duration::from_secs);
        return StudioError::RateLimited { retry_after };
    }
    if status == 401 || status == 403 {
        return StudioError::Auth(text);
    }
    let lower = text.to_lowercase();
    if lower.contains("safety") || lower.contains("blocked") || lower.contains("prohibited") {
        return StudioError::ContentBlocked(text);
    }
    StudioError::Api {
        status,
        message: text,
    }
}

/// Builder for GoogleStudio.
#[derive(Debug, Clone, Default)]
pub struct GoogleStudioBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    edit_model: GeminiModel,
    generate_model: ImagenModel,
}

impl GoogleStudioBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to `API_KEY`, then `GOOGLE_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the model used for editing.
    pub fn edit_model(mut self, model: GeminiModel) -> Self {
        self.edit_model = model;
        self
    }

    /// Sets the model used for generation.
    pub fn generate_model(mut self, model: ImagenModel) -> Self {
        self.generate_model = model;
        self
    }

    /// Builds the studio, resolving the API key.
    pub fn build(self) -> Result<GoogleStudio> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                StudioError::Auth("API_KEY environment variable not set".into())
            })?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(GoogleStudio {
            api: ApiContext {
                client: reqwest::Client::new(),
                api_key,
                base_url,
            },
            edit_model: self.edit_model,
            generate_model: self.generate_model,
        })
    }
}

/// Edits with Gemini and generates with Imagen.
pub struct GoogleStudio {
    api: ApiContext,
    edit_model: GeminiModel,
    generate_model: ImagenModel,
}

impl GoogleStudio {
    /// Creates a new `GoogleStudioBuilder`.
    pub fn builder() -> GoogleStudioBuilder {
        GoogleStudioBuilder::new()
    }

    /// Model used for editing.
    pub fn edit_model(&self) -> GeminiModel {
        self.edit_model
    }

    /// Model used for generation.
    pub fn generate_model(&self) -> ImagenModel {
        self.generate_model
    }
}

#[async_trait]
impl ImageStudio for GoogleStudio {
    async fn edit_image(&self, image: &SourceImage, instruction: &str) -> Result<DataUrl> {
        gemini::edit_image(&self.api, self.edit_model, image, instruction).await
    }

    async fn generate_image(&self, instruction: &str) -> Result<DataUrl> {
        imagen::generate_image(&self.api, self.generate_model, instruction).await
    }

    fn name(&self) -> &str {
        "Gemini (Google)"
    }
}
