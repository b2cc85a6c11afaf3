// Language code to display name resolution
// Author: kelexine (https://github.com/kelexine)

use phf::phf_map;

/// Known target languages, keyed by lowercase code.
static LANGUAGE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "en" => "English",
    "es" => "Spanish",
    "fr" => "French",
    "de" => "German",
    "ja" => "Japanese",
    "ko" => "Korean",
    "zh" => "Chinese",
    "it" => "Italian",
    "pt" => "Portuguese",
    "ru" => "Russian",
    "ar" => "Arabic",
    "hi" => "Hindi",
};

/// Resolve a language code to its English display name.
///
/// Lookup is case-insensitive. Unknown codes are returned unchanged, so
/// `"tlh"` resolves to `"tlh"` and the model is asked to translate to it as-is.
pub fn language_name(code: &str) -> String {
    LANGUAGE_NAMES
        .get(code.to_lowercase().as_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Build the instruction sent alongside the image.
pub fn translation_prompt(code: &str) -> String {
    format!("Translate the image to {}", language_name(code))
}

/// All codes the resolver knows about.
pub fn supported_codes() -> impl Iterator<Item = &'static str> {
    LANGUAGE_NAMES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_uses_display_name() {
        assert_eq!(translation_prompt("ja"), "Translate the image to Japanese");
    }

    #[test]
    fn test_prompt_falls_back_to_code() {
        assert_eq!(translation_prompt("Tlh"), "Translate the image to Tlh");
    }

    #[test]
    fn test_table_has_twelve_entries() {
        assert_eq!(supported_codes().count(), 12);
        assert!(supported_codes().all(|c| c == c.to_lowercase()));
    }
}
