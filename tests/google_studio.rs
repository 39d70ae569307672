//! Drives `GoogleStudio` against a local mock of the Generative Language API.

#![cfg(feature = "google")]

use plan_studio::{
    EditorForm, GeneratorForm, GoogleStudio, ImageStudio, SourceImage, StudioError,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn studio(server: &MockServer) -> GoogleStudio {
    GoogleStudio::builder()
        .api_key("test-key")
        .base_url(format!("{}/v1beta", server.uri()))
        .build()
        .unwrap()
}

fn source() -> SourceImage {
    SourceImage::from_data_url("data:image/png;base64,iVBORw0KGgo=", "image/png").unwrap()
}

#[tokio::test]
async fn edit_posts_image_then_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [
                {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}},
                {"text": "Quitar el fondo"}
            ]}],
            "generationConfig": {"responseModalities": ["IMAGE"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "ZWRpdA=="}}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = studio(&server)
        .edit_image(&source(), "Quitar el fondo")
        .await
        .unwrap();
    assert_eq!(image.to_string(), "data:image/png;base64,ZWRpdA==");
    assert_eq!(image.decode().unwrap(), b"edit");
}

#[tokio::test]
async fn generate_posts_imagen_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
        .and(body_partial_json(json!({
            "instances": [{"prompt": "Un astronauta montando a caballo en Marte"}],
            "parameters": {"sampleCount": 1, "outputMimeType": "image/jpeg", "aspectRatio": "1:1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "Z2Vu", "mimeType": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = studio(&server)
        .generate_image("Un astronauta montando a caballo en Marte")
        .await
        .unwrap();
    assert_eq!(image.to_string(), "data:image/jpeg;base64,Z2Vu");
}

#[tokio::test]
async fn missing_image_payload_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"predictions": []})))
        .mount(&server)
        .await;

    let err = studio(&server).generate_image("a cat").await.unwrap_err();
    assert!(matches!(err, StudioError::NoImage));
}

#[tokio::test]
async fn http_errors_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = studio(&server)
        .edit_image(&source(), "retro")
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Auth(_)));
}

#[tokio::test]
async fn forms_surface_one_message_per_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    let studio = studio(&server);

    let mut editor = EditorForm::new();
    editor.set_image(source());
    editor.set_prompt("retro");
    assert_eq!(
        editor.submit(&studio).await.error(),
        Some("Failed to edit image. Please check the console for details.")
    );

    let mut generator = GeneratorForm::new();
    generator.set_prompt("a cat");
    assert_eq!(
        generator.submit(&studio).await.error(),
        Some("Failed to generate image. Please check the console for details.")
    );
}
