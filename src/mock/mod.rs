// Mocked translator backend
// Author: kelexine (https://github.com/kelexine)

use crate::output::to_json_line;
use serde_json::json;
use std::ffi::OsString;

/// Environment variable whose contents the mock echoes.
pub const MOCKED_OUTPUT_ENV: &str = "MOCKED_GEMINI_OUTPUT";

/// The bytes the mock prints for a given `MOCKED_GEMINI_OUTPUT` value.
///
/// A set, non-empty value is returned byte for byte, without being parsed
/// or required to be UTF-8.
pub fn mocked_output(value: Option<OsString>) -> Vec<u8> {
    match value.filter(|v| !v.is_empty()) {
        Some(raw) => os_bytes(raw),
        None => fallback_output().into_bytes(),
    }
}

#[cfg(unix)]
fn os_bytes(raw: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    raw.into_vec()
}

// Outside unix the platform string has no byte form to pass through.
#[cfg(not(unix))]
fn os_bytes(raw: OsString) -> Vec<u8> {
    raw.to_string_lossy().into_owned().into_bytes()
}

fn fallback_output() -> String {
    let body = json!({
        "error": format!("{} environment variable not set for mock script", MOCKED_OUTPUT_ENV)
    });
    // Serializing a string-only object cannot fail.
    to_json_line(&body).unwrap_or_default()
}

/// Read `MOCKED_GEMINI_OUTPUT` from the process environment.
pub fn mocked_output_from_env() -> Vec<u8> {
    mocked_output(std::env::var_os(MOCKED_OUTPUT_ENV))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &[u8] =
        br#"{"error": "MOCKED_GEMINI_OUTPUT environment variable not set for mock script"}"#;

    #[test]
    fn test_echoes_raw_value() {
        let raw = r#"{"translation":"hola"}"#;
        assert_eq!(mocked_output(Some(raw.into())), raw.as_bytes());
    }

    #[test]
    fn test_does_not_validate_json() {
        assert_eq!(mocked_output(Some("not json".into())), b"not json");
    }

    #[test]
    fn test_fallback_when_unset_or_empty() {
        assert_eq!(mocked_output(None), FALLBACK);
        assert_eq!(mocked_output(Some(OsString::new())), FALLBACK);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_echoed() {
        use std::os::unix::ffi::OsStringExt;
        let raw = b"{\"translation\":\"\xff\"}".to_vec();
        assert_eq!(mocked_output(Some(OsString::from_vec(raw.clone()))), raw);
    }
}
