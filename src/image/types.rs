//! Core types for image editing and generation.

use crate::error::{Result, StudioError};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format (lossy).
    Jpeg,
    /// WebP format.
    WebP,
}

impl ImageFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// Attempts to detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Maps a MIME type back to a format.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detects image format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 12 {
            return None;
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }

        None
    }
}

/// Aspect ratios accepted by Imagen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1 square aspect ratio.
    #[serde(rename = "1:1")]
    Square,
    /// 16:9 landscape aspect ratio.
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 portrait aspect ratio.
    #[serde(rename = "9:16")]
    Portrait,
    /// 4:3 standard landscape aspect ratio.
    #[serde(rename = "4:3")]
    Standard,
    /// 3:4 standard portrait aspect ratio.
    #[serde(rename = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    /// Returns the aspect ratio as a string (e.g., "16:9").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Standard => "4:3",
            Self::StandardPortrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A base64 `data:` URL, the currency images travel in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    data: String,
}

impl DataUrl {
    /// Wraps an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64_data.into(),
        }
    }

    /// Encodes raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(
            mime_type,
            base64::engine::general_purpose::STANDARD.encode(bytes),
        )
    }

    /// Parses `data:<mime>;base64,<payload>`.
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| StudioError::Decode("not a data URL".into()))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| StudioError::Decode("data URL has no payload".into()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| StudioError::Decode("data URL is not base64".into()))?;
        Ok(Self::new(mime_type, data))
    }

    /// MIME type of the payload.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload.
    pub fn base64_data(&self) -> &str {
        &self.data
    }

    /// Format implied by the MIME type.
    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::from_mime_type(&self.mime_type)
    }

    /// Decodes the payload.
    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| StudioError::Decode(e.to_string()))
    }

    /// Decodes the payload and writes it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let bytes = self.decode()?;
        std::fs::write(path, &bytes)?;
        Ok(bytes.len())
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

/// An image supplied by the user for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// MIME type sent to the provider.
    pub mime_type: String,
    /// Base64 image payload.
    pub data: String,
}

impl SourceImage {
    /// Takes the payload after the first comma of `data_url`; `mime_type`
    /// is authoritative over whatever the URL header claims.
    pub fn from_data_url(data_url: &str, mime_type: impl Into<String>) -> Result<Self> {
        let (_, data) = data_url
            .split_once(',')
            .ok_or_else(|| StudioError::Decode("data URL has no payload".into()))?;
        Ok(Self {
            mime_type: mime_type.into(),
            data: data.to_string(),
        })
    }

    /// Encodes raw bytes, sniffing the MIME type from magic bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let format = ImageFormat::from_magic_bytes(bytes)
            .ok_or_else(|| StudioError::Decode("Unknown image format".into()))?;
        Ok(Self {
            mime_type: format.mime_type().to_string(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        })
    }

    /// Reads an image file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        match Self::from_bytes(&bytes) {
            Ok(image) => Ok(image),
            Err(e) => {
                let format = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(ImageFormat::from_extension)
                    .ok_or(e)?;
                Ok(Self {
                    mime_type: format.mime_type().to_string(),
                    data: base64::engine::general_purpose::STANDARD.encode(&bytes),
                })
            }
        }
    }
}
