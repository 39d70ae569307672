//! Request state for the editor and generator forms.
//!
//! Each form runs at most one request at a time and owns its own loading and
//! error state. Nothing orders requests across forms.

use crate::image::provider::{ImageStudio, ImageStudioExt};
use crate::image::types::{DataUrl, SourceImage};

/// Shown when the editor is submitted without an image or instruction.
pub const EDITOR_MISSING_INPUT: &str = "Por favor, sube una imagen y escribe una instrucción.";
/// Shown when the generator is submitted without a prompt.
pub const GENERATOR_MISSING_INPUT: &str =
    "Por favor, escribe una instrucción para generar la imagen.";

/// Where a form's request stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// Nothing submitted yet, or input changed since.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request produced an image.
    Ready(DataUrl),
    /// The last request failed with this user-facing message.
    Failed(String),
}

impl FormState {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The produced image, if any.
    pub fn image(&self) -> Option<&DataUrl> {
        match self {
            Self::Ready(url) => Some(url),
            _ => None,
        }
    }

    /// The error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    fn settle(&mut self, outcome: Result<DataUrl, String>) {
        *self = match outcome {
            Ok(url) => Self::Ready(url),
            Err(msg) => Self::Failed(msg),
        };
    }
}

/// The "edit an uploaded image" form.
#[derive(Debug, Clone, Default)]
pub struct EditorForm {
    image: Option<SourceImage>,
    prompt: String,
    state: FormState,
}

impl EditorForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the uploaded image, clearing any previous result or error.
    pub fn set_image(&mut self, image: SourceImage) {
        self.image = Some(image);
        self.state = FormState::Idle;
    }

    /// Sets the edit instruction.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// The uploaded image, if any.
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Current request state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether a submission would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && self.image.is_some() && !self.prompt.is_empty()
    }

    /// Validates the input and marks the form as loading.
    ///
    /// Returns the request to run, or `None` if the form was rejected
    /// (missing input sets the error state, an in-flight request is left
    /// alone).
    pub fn begin(&mut self) -> Option<(SourceImage, String)> {
        if self.state.is_loading() {
            return None;
        }
        let image = match (&self.image, self.prompt.is_empty()) {
            (Some(image), false) => image.clone(),
            _ => {
                self.state = FormState::Failed(EDITOR_MISSING_INPUT.to_string());
                return None;
            }
        };
        self.state = FormState::Loading;
        Some((image, self.prompt.clone()))
    }

    /// Records the outcome of the request started by [`begin`](Self::begin).
    pub fn finish(&mut self, outcome: Result<DataUrl, String>) {
        self.state.settle(outcome);
    }

    /// Validates, runs the edit against `studio` and records the outcome.
    pub async fn submit(&mut self, studio: &dyn ImageStudio) -> &FormState {
        if let Some((image, prompt)) = self.begin() {
            let outcome = studio.submit_edit(&image, &prompt).await;
            self.finish(outcome);
        }
        &self.state
    }
}

/// The "generate from a prompt" form.
#[derive(Debug, Clone, Default)]
pub struct GeneratorForm {
    prompt: String,
    state: FormState,
}

impl GeneratorForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Current request state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether a submission would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && !self.prompt.is_empty()
    }

    /// Validates the prompt and marks the form as loading.
    pub fn begin(&mut self) -> Option<String> {
        if self.state.is_loading() {
            return None;
        }
        if self.prompt.is_empty() {
            self.state = FormState::Failed(GENERATOR_MISSING_INPUT.to_string());
            return None;
        }
        self.state = FormState::Loading;
        Some(self.prompt.clone())
    }

    /// Records the outcome of the request started by [`begin`](Self::begin).
    pub fn finish(&mut self, outcome: Result<DataUrl, String>) {
        self.state.settle(outcome);
    }

    /// Validates, runs the generation against `studio` and records the outcome.
    pub async fn submit(&mut self, studio: &dyn ImageStudio) -> &FormState {
        if let Some(prompt) = self.begin() {
            let outcome = studio.submit_generate(&prompt).await;
            self.finish(outcome);
        }
        &self.state
    }
}
