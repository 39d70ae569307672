//! Image editing and generation.

pub mod form;
mod provider;
#[cfg(feature = "google")]
pub mod providers;
mod types;

pub use form::{EditorForm, FormState, GeneratorForm};
pub use provider::{ImageStudio, ImageStudioExt, StudioOperation};
pub use types::{AspectRatio, DataUrl, ImageFormat, SourceImage};
