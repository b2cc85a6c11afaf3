// Wire models for the Gemini API
// Author: kelexine (https://github.com/kelexine)

pub mod gemini;

pub use gemini::{
    GenerateContentRequest, GenerateContentResponse, InlineData, Part, ResponseContent,
};
