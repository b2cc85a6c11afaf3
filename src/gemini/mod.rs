// Gemini API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::GeminiClient;

use crate::error::Result;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use std::future::Future;

/// Something that can answer a single `generateContent` call.
///
/// [`GeminiClient`] is the real implementation; tests substitute canned
/// responses.
pub trait ContentGenerator {
    fn generate(
        &self,
        request: &GenerateContentRequest,
        model: &str,
    ) -> impl Future<Output = Result<GenerateContentResponse>> + Send;
}
