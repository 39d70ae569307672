//! Image studio backends.

mod gemini;
mod google;
mod imagen;

pub use gemini::GeminiModel;
pub use google::{GoogleStudio, GoogleStudioBuilder, DEFAULT_BASE_URL};
pub use imagen::ImagenModel;
