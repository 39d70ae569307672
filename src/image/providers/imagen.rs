//! Imagen (Google) text-to-image generation.

use crate::error::{Result, StudioError};
use crate::image::providers::google::ApiContext;
use crate::image::types::{AspectRatio, DataUrl, ImageFormat};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Imagen model variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImagenModel {
    /// Imagen 4.
    #[default]
    Imagen4,
    /// Imagen 4 Fast.
    Imagen4Fast,
}

impl ImagenModel {
    /// Returns the API model identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Imagen4 => "imagen-4.0-generate-001",
            Self::Imagen4Fast => "imagen-4.0-fast-generate-001",
        }
    }
}

/// One square JPEG per request.
const OUTPUT_FORMAT: ImageFormat = ImageFormat::Jpeg;
const OUTPUT_ASPECT_RATIO: AspectRatio = AspectRatio::Square;

pub(crate) async fn generate_image(
    api: &ApiContext,
    model: ImagenModel,
    prompt: &str,
) -> Result<DataUrl> {
    let start = Instant::now();
    let url = api.model_url(model.as_str(), "predict");
    let body = ImagenRequest::new(prompt);

    let response: ImagenResponse = api.post_json(&url, &body).await?;
    let generated = response.into_image()?;

    tracing::debug!(
        model = model.as_str(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Imagen generation complete"
    );
    Ok(generated)
}

// Request/Response types
#[derive(Debug, Serialize)]
struct ImagenRequest {
    instances: Vec<ImagenInstance>,
    parameters: ImagenParameters,
}

#[derive(Debug, Serialize)]
struct ImagenInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagenParameters {
    sample_count: u32,
    output_mime_type: &'static str,
    aspect_ratio: AspectRatio,
}

impl ImagenRequest {
    fn new(prompt: &str) -> Self {
        Self {
            instances: vec![ImagenInstance {
                prompt: prompt.to_string(),
            }],
            parameters: ImagenParameters {
                sample_count: 1,
                output_mime_type: OUTPUT_FORMAT.mime_type(),
                aspect_ratio: OUTPUT_ASPECT_RATIO,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImagenResponse {
    #[serde(default)]
    predictions: Vec<ImagenPrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImagenPrediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    rai_filtered_reason: Option<String>,
}

impl ImagenResponse {
    fn into_image(self) -> Result<DataUrl> {
        let mut filtered = None;
        for prediction in self.predictions {
            if let Some(data) = prediction.bytes_base64_encoded {
                let mime = prediction
                    .mime_type
                    .unwrap_or_else(|| OUTPUT_FORMAT.mime_type().to_string());
                return Ok(DataUrl::new(mime, data));
            }
            filtered = filtered.or(prediction.rai_filtered_reason);
        }
        match filtered {
            Some(reason) => Err(StudioError::ContentBlocked(reason)),
            None => Err(StudioError::NoImage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imagen_model_as_str() {
        assert_eq!(ImagenModel::default().as_str(), "imagen-4.0-generate-001");
    }

    #[test]
    fn test_request_shape() {
        let json = serde_json::to_value(ImagenRequest::new("a cat")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "instances": [{"prompt": "a cat"}],
                "parameters": {
                    "sampleCount": 1,
                    "outputMimeType": "image/jpeg",
                    "aspectRatio": "1:1"
                }
            })
        );
    }

    #[test]
    fn test_response_to_data_url() {
        let json = r#"{"predictions": [{"bytesBase64Encoded": "/9j/4AAQ", "mimeType": "image/jpeg"}]}"#;
        let resp: ImagenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.into_image().unwrap().to_string(),
            "data:image/jpeg;base64,/9j/4AAQ"
        );
    }

    #[test]
    fn test_response_defaults_to_jpeg() {
        let json = r#"{"predictions": [{"bytesBase64Encoded": "/9j/"}]}"#;
        let resp: ImagenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_image().unwrap().mime_type(), "image/jpeg");
    }

    #[test]
    fn test_empty_response_is_no_image() {
        let resp: ImagenResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(resp.into_image(), Err(StudioError::NoImage)));
    }

    #[test]
    fn test_filtered_response_is_blocked() {
        let json = r#"{"predictions": [{"raiFilteredReason": "filtered by safety"}]}"#;
        let resp: ImagenResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            resp.into_image(),
            Err(StudioError::ContentBlocked(_))
        ));
    }
}
