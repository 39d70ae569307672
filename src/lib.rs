#![warn(missing_docs)]
//! Plan Studio - training-plan pricing table plus AI image tools.
//!
//! The pricing side parses the embedded plan table into typed plans once
//! and hands the result to whoever renders it. The image side puts Gemini
//! editing and Imagen generation behind the [`ImageStudio`] trait.
//!
//! # Quick Start - Plans
//!
//! ```
//! use plan_studio::PlanCatalog;
//!
//! let catalog = PlanCatalog::load();
//! assert_eq!(catalog.plans().len(), 3);
//! for plan in catalog.plans() {
//!     println!("{}: {}", plan.title, plan.cta);
//! }
//! ```
//!
//! # Quick Start - Images
//!
//! ```no_run
//! use plan_studio::{GoogleStudio, ImageStudio};
//!
//! #[tokio::main]
//! async fn main() -> plan_studio::Result<()> {
//!     let studio = GoogleStudio::builder().build()?;
//!     let image = studio.generate_image("A golden retriever puppy").await?;
//!     image.save("puppy.jpg")?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `google`: Gemini/Imagen backend over HTTP
//! - `cli`: Command-line interface

mod error;
pub mod image;
pub mod pricing;

// Re-export error types at crate root
pub use error::{Result, StudioError};

pub use image::{
    DataUrl, EditorForm, FormState, GeneratorForm, ImageFormat, ImageStudio, ImageStudioExt,
    SourceImage, StudioOperation,
};
pub use pricing::{parse, ParsedTable, PlanCatalog, PricePair, PricingPlan};

#[cfg(feature = "google")]
pub use image::providers::{GeminiModel, GoogleStudio, GoogleStudioBuilder, ImagenModel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, StudioError};
    pub use crate::image::{DataUrl, ImageStudio, ImageStudioExt, SourceImage};
    pub use crate::pricing::{ParsedTable, PlanCatalog, PricingPlan};

    #[cfg(feature = "google")]
    pub use crate::image::providers::GoogleStudio;
}
