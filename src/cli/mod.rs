// CLI module for gemini-image-translate
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;

/// Translate the text in an image with Gemini and print the result as JSON.
///
/// Reads the API key from GEMINI_API_KEY.
#[derive(Parser, Debug)]
#[command(name = "gemini-translate", version, about, long_about = None)]
pub struct Args {
    /// Path to the image file
    pub image_path: String,

    /// Target language code (e.g. 'es' for Spanish)
    pub target_language_code: String,
}
