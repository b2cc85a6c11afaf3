// Gemini generateContent API type definitions
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gemini generate content request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying the prompt followed by the image.
    pub fn prompt_with_image(prompt: impl Into<String>, image: InlineData) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text { text: prompt.into() },
                    Part::InlineData { inline_data: image },
                ],
            }],
        }
    }
}

/// Content in a turn (user or model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

fn default_role() -> String {
    "model".to_string()
}

/// Individual part of content in a Gemini request/response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content part.
    Text { text: String },

    /// Inline data (images, etc).
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },

    /// Anything else the model returns (function calls, executable code, ...).
    Other(Value),
}

impl Part {
    /// Get text content if this is a Text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Inline image data for vision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String, // base64 encoded
}

/// Raw Gemini response.
///
/// The public API returns `candidates`; some gateways and canned test
/// payloads flatten the answer into a top-level `text`. Use
/// [`GenerateContentResponse::into_content`] rather than reading fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Response candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Why a prompt was rejected before generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// The shapes a response can take, in order of precedence.
#[derive(Debug, Clone)]
pub enum ResponseContent {
    /// A non-empty direct text field.
    Text(String),
    /// The first candidate's non-empty list of parts.
    Parts(Vec<Part>),
    /// No candidates because the prompt was blocked.
    Blocked(String),
    /// Nothing usable.
    Empty,
}

impl GenerateContentResponse {
    pub fn into_content(self) -> ResponseContent {
        if let Some(text) = self.text.filter(|t| !t.is_empty()) {
            return ResponseContent::Text(text);
        }

        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();
        if !parts.is_empty() {
            return ResponseContent::Parts(parts);
        }

        match self.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => ResponseContent::Blocked(reason),
            None => ResponseContent::Empty,
        }
    }
}
