//! The AI image capability consumed by the editor and generator forms.

use crate::error::Result;
use crate::image::types::{DataUrl, SourceImage};
use async_trait::async_trait;
use std::fmt;

/// Which studio call a request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioOperation {
    /// Edit an uploaded image following an instruction.
    Edit,
    /// Generate an image from a text prompt.
    Generate,
}

impl fmt::Display for StudioOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit => write!(f, "edit"),
            Self::Generate => write!(f, "generate"),
        }
    }
}

/// Edits and generates images through some AI backend.
#[async_trait]
pub trait ImageStudio: Send + Sync {
    /// Edits `image` according to `instruction`.
    async fn edit_image(&self, image: &SourceImage, instruction: &str) -> Result<DataUrl>;

    /// Generates an image from `instruction`.
    async fn generate_image(&self, instruction: &str) -> Result<DataUrl>;

    /// Returns the name of this studio for display.
    fn name(&self) -> &str;
}

/// Runs studio calls and collapses failures to the user-facing message.
#[async_trait]
pub trait ImageStudioExt: ImageStudio {
    /// Edits, logging any failure and returning its user message.
    async fn submit_edit(
        &self,
        image: &SourceImage,
        instruction: &str,
    ) -> std::result::Result<DataUrl, String> {
        self.edit_image(image, instruction).await.map_err(|e| {
            tracing::error!(studio = self.name(), "error editing image: {e}");
            e.user_message(StudioOperation::Edit).to_string()
        })
    }

    /// Generates, logging any failure and returning its user message.
    async fn submit_generate(&self, instruction: &str) -> std::result::Result<DataUrl, String> {
        self.generate_image(instruction).await.map_err(|e| {
            tracing::error!(studio = self.name(), "error generating image: {e}");
            e.user_message(StudioOperation::Generate).to_string()
        })
    }
}

impl<T: ImageStudio + ?Sized> ImageStudioExt for T {}
