//! Image translation invoker.
//!
//! Loads the image, asks the model to translate it and normalizes whatever
//! comes back into a [`TranslationResult`]. Exactly one remote call is made
//! per translation.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{Result, TranslateError};
use crate::gemini::ContentGenerator;
use crate::language::translation_prompt;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse, ResponseContent};
use crate::vision::load_image;
use serde::Serialize;
use tracing::{debug, info, warn};

/// What to translate and with which model.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub image_path: String,
    pub target_language_code: String,
    pub model_name: String,
}

impl TranslationRequest {
    pub fn new(
        image_path: impl Into<String>,
        target_language_code: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            target_language_code: target_language_code.into(),
            model_name: model_name.into(),
        }
    }
}

/// Outcome of a translation, serialized as `{"translation": ...}` or
/// `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationResult {
    Translation(String),
    Error(String),
}

impl From<Result<String>> for TranslationResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => TranslationResult::Translation(text),
            Err(err) => TranslationResult::Error(err.to_string()),
        }
    }
}

impl From<TranslateError> for TranslationResult {
    fn from(err: TranslateError) -> Self {
        TranslationResult::Error(err.to_string())
    }
}

/// Translate the image, folding every failure into the result.
pub async fn translate_image<G: ContentGenerator>(
    generator: &G,
    request: &TranslationRequest,
) -> TranslationResult {
    let result = try_translate_image(generator, request).await;
    if let Err(err) = &result {
        warn!(kind = ?err.kind(), "Translation failed: {}", err);
    }
    result.into()
}

/// Translate the image, returning a typed error on failure.
pub async fn try_translate_image<G: ContentGenerator>(
    generator: &G,
    request: &TranslationRequest,
) -> Result<String> {
    let image = load_image(&request.image_path).await?;

    let prompt = translation_prompt(&request.target_language_code);
    debug!("Prompt: {}", prompt);

    let body = GenerateContentRequest::prompt_with_image(prompt, image);
    let response = generator.generate(&body, &request.model_name).await?;

    let translation = extract_translation(response)?;
    info!(
        "Received translation ({} chars) from {}",
        translation.chars().count(),
        request.model_name
    );
    Ok(translation)
}

/// Pull the translated text out of a response.
///
/// A direct text field is used as-is; otherwise the text of every part that
/// has some is joined with single spaces. Both are trimmed.
pub fn extract_translation(response: GenerateContentResponse) -> Result<String> {
    match response.into_content() {
        ResponseContent::Text(text) => Ok(text.trim().to_string()),
        ResponseContent::Parts(parts) => {
            let texts: Vec<&str> = parts.iter().filter_map(|p| p.as_text()).collect();
            if texts.is_empty() {
                return Err(TranslateError::NoTextInParts);
            }
            Ok(texts.join(" ").trim().to_string())
        }
        ResponseContent::Blocked(reason) => Err(TranslateError::Transport(format!(
            "Prompt was blocked by the model: {}",
            reason
        ))),
        ResponseContent::Empty => Err(TranslateError::UnexpectedResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use serde_json::json;
    use std::future::Future;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    /// Replays a canned JSON response and records what it was asked.
    struct CannedGenerator {
        response: std::result::Result<serde_json::Value, String>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl CannedGenerator {
        fn ok(value: serde_json::Value) -> Self {
            Self {
                response: Ok(value),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    impl ContentGenerator for CannedGenerator {
        fn generate(
            &self,
            request: &GenerateContentRequest,
            _model: &str,
        ) -> impl Future<Output = Result<GenerateContentResponse>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let prompt = request.contents[0].parts[0].as_text().map(str::to_string);
            *self.last_prompt.lock().unwrap() = prompt;
            let response = self.response.clone();
            async move {
                match response {
                    Ok(value) => Ok(serde_json::from_value(value)?),
                    Err(message) => Err(TranslateError::Transport(message)),
                }
            }
        }
    }

    fn png_file() -> tempfile::NamedTempFile {
        let bytes = base64::engine::general_purpose::STANDARD.decode(PNG_BASE64).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file
    }

    fn request_for(file: &tempfile::NamedTempFile, lang: &str) -> TranslationRequest {
        TranslationRequest::new(file.path().to_str().unwrap(), lang, "gemini-2.0-flash-lite")
    }

    #[tokio::test]
    async fn test_direct_text_is_trimmed() {
        let file = png_file();
        let generator = CannedGenerator::ok(json!({"text": "  Hola mundo \n"}));

        let result = translate_image(&generator, &request_for(&file, "es")).await;
        assert_eq!(result, TranslationResult::Translation("Hola mundo".to_string()));
        assert_eq!(
            generator.last_prompt.lock().unwrap().as_deref(),
            Some("Translate the image to Spanish")
        );
    }

    #[tokio::test]
    async fn test_parts_are_space_joined() {
        let file = png_file();
        let generator = CannedGenerator::ok(json!({
            "candidates": [{"content": {"parts": [
                {"text": " Bonjour"},
                {"functionCall": {"name": "noop", "args": {}}},
                {"text": "le monde "}
            ]}}]
        }));

        let result = translate_image(&generator, &request_for(&file, "FR")).await;
        assert_eq!(result, TranslationResult::Translation("Bonjour le monde".to_string()));
        assert_eq!(
            generator.last_prompt.lock().unwrap().as_deref(),
            Some("Translate the image to French")
        );
    }

    #[tokio::test]
    async fn test_parts_without_text() {
        let file = png_file();
        let generator = CannedGenerator::ok(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "AA=="}}]}}]
        }));

        let result = translate_image(&generator, &request_for(&file, "de")).await;
        assert_eq!(
            result,
            TranslationResult::Error("No text found in response parts.".to_string())
        );
    }

    #[tokio::test]
    async fn test_neither_text_nor_parts() {
        let file = png_file();
        let generator = CannedGenerator::ok(json!({"candidates": []}));

        let result = translate_image(&generator, &request_for(&file, "ja")).await;
        assert_eq!(
            result,
            TranslationResult::Error(
                "Failed to extract translation from response. The response might be empty or in an unexpected format."
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_transport_error() {
        let file = png_file();
        let generator = CannedGenerator::ok(json!({"promptFeedback": {"blockReason": "SAFETY"}}));

        let err = try_translate_image(&generator, &request_for(&file, "ko"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Transport);
        assert_eq!(
            TranslationResult::from(err),
            TranslationResult::Error(
                "An error occurred: Prompt was blocked by the model: SAFETY".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_remote_failure_is_wrapped() {
        let file = png_file();
        let generator = CannedGenerator::failing("429 Resource has been exhausted");

        let result = translate_image(&generator, &request_for(&file, "it")).await;
        assert_eq!(
            result,
            TranslationResult::Error(
                "An error occurred: 429 Resource has been exhausted".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_missing_image_skips_remote_call() {
        let generator = CannedGenerator::ok(json!({"text": "never"}));
        let request = TranslationRequest::new("/missing/scan.jpg", "es", "gemini-2.0-flash-lite");

        let result = translate_image(&generator, &request).await;
        assert_eq!(
            result,
            TranslationResult::Error("Image file not found: /missing/scan.jpg".to_string())
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_identical_inputs_give_identical_results() {
        let file = png_file();
        let generator = CannedGenerator::ok(json!({"text": "Привет"}));
        let request = request_for(&file, "ru");

        let first = translate_image(&generator, &request).await;
        let second = translate_image(&generator, &request).await;
        assert_eq!(first, second);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_result_serialization() {
        let ok = serde_json::to_string(&TranslationResult::Translation("hola".into())).unwrap();
        let err = serde_json::to_string(&TranslationResult::Error("boom".into())).unwrap();
        assert_eq!(ok, r#"{"translation":"hola"}"#);
        assert_eq!(err, r#"{"error":"boom"}"#);
    }
}
