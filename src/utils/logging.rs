//! Structured logging and secret redaction.
//!
//! Logs always go to stderr: stdout carries exactly one JSON line per run and
//! must never be interleaved with diagnostics.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs.
/// - `pretty`: Human-readable, multi-line output.
/// - `compact` (default): One line per event.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // A second init (e.g. from tests) is harmless, so the error is ignored.
    let _ = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init(),
        "pretty" => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.pretty())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.compact())
            .try_init(),
    };

    Ok(())
}

/// Placeholder written in place of a redacted key.
const REDACTED: &str = "[REDACTED_API_KEY]";

/// Literal keys shorter than this are too likely to be ordinary words.
const MIN_LITERAL_KEY_LEN: usize = 8;

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Sanitizes secrets from a message before it is logged or printed.
///
/// Redacts Google API keys (tokens starting with `AIza`) and, when given,
/// the literal API key in use, which may not follow that pattern. The
/// literal key is only replaced where it stands as a whole token and is at
/// least `MIN_LITERAL_KEY_LEN` long, so it never mangles surrounding text.
pub fn sanitize(input: &str, api_key: Option<&str>) -> String {
    let mut result = input.to_string();

    if let Some(key) = api_key.filter(|k| k.len() >= MIN_LITERAL_KEY_LEN) {
        result = replace_whole_token(&result, key);
    }

    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("AIza") {
        let start = search_from + offset;
        let end = result[start..]
            .find(|c: char| !is_key_char(c))
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, REDACTED);
        search_from = start + REDACTED.len();
    }

    result
}

fn replace_whole_token(input: &str, token: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut copied = 0;
    for (start, _) in input.match_indices(token) {
        if start < copied {
            continue;
        }
        let end = start + token.len();
        let bounded_left = input[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_key_char(c));
        let bounded_right = input[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_key_char(c));
        if bounded_left && bounded_right {
            output.push_str(&input[copied..start]);
            output.push_str(REDACTED);
            copied = end;
        }
    }
    output.push_str(&input[copied..]);
    output
}
