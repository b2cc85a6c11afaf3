// gemini-image-translate - translate an image with Gemini, print JSON
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use gemini_image_translate::cli::Args;
use gemini_image_translate::config::{api_key_from_env, AppConfig, API_KEY_ENV};
use gemini_image_translate::error::TranslateError;
use gemini_image_translate::gemini::GeminiClient;
use gemini_image_translate::output::print_json;
use gemini_image_translate::translator::{translate_image, TranslationRequest, TranslationResult};
use gemini_image_translate::utils::logging;
use tracing::{debug, info};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let result = run(args).await;

    // Nothing else is left to report to if stdout itself is gone.
    let _ = print_json(&result);
}

async fn run(args: Args) -> TranslationResult {
    // Phase 1: API key, checked before touching config, files or network
    let Some(api_key) = api_key_from_env() else {
        return TranslateError::MissingApiKey(API_KEY_ENV).into();
    };

    // Phase 2: Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return err.into(),
    };

    // Phase 3: Initialize logging
    if let Err(err) = logging::init(&config.logging) {
        return err.into();
    }
    info!("Starting gemini-translate v{}", env!("CARGO_PKG_VERSION"));

    // Phase 4: Build a client scoped to this run
    let client = match GeminiClient::new(api_key, &config.gemini) {
        Ok(client) => client,
        Err(err) => return err.into(),
    };
    debug!("Using Gemini API at {}", client.base_url());

    // Phase 5: Translate
    let request = TranslationRequest::new(
        args.image_path,
        args.target_language_code,
        config.gemini.default_model,
    );
    translate_image(&client, &request).await
}
