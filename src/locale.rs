// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale code validation and display metadata.
//!
//! Locale codes double as directory names in the exported tree, so the
//! accepted shape is deliberately narrow: ASCII alphanumerics plus `-` and
//! `_`, starting with an alphanumeric, at most 24 bytes. That admits the
//! usual BCP 47 tags (`it-IT`, `es-419`, `sr-RS`) while keeping path
//! separators, dots, and whitespace out of the filesystem layer entirely.
//!
//! Reference: <https://www.rfc-editor.org/rfc/rfc5646>

use std::borrow::Borrow;
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on a locale code, in bytes. Longest real-world tags
/// (`zh-Hant-TW`, `es-419`) sit well under this.
const MAX_CODE_BYTES: usize = 24;

/// Validates whether a string is an acceptable locale code.
///
/// Checks shape, not registry membership: any `[A-Za-z0-9][A-Za-z0-9_-]*`
/// string up to 24 bytes passes, whether or not it names a real language.
/// Registry-level knowledge lives in [`language_name`] and [`native_name`].
///
/// # Examples
/// ```
/// assert!(locale_press::locale::is_valid_code("it-IT"));
/// assert!(locale_press::locale::is_valid_code("es-419"));
/// assert!(!locale_press::locale::is_valid_code("../escape"));
/// assert!(!locale_press::locale::is_valid_code("pt BR"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    if code.is_empty() || code.len() > MAX_CODE_BYTES {
        return false;
    }
    let mut chars = code.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A validated locale code, safe to use as a path segment.
///
/// Construction goes through [`LocaleCode::parse`] (or serde, which routes
/// through the same check), so holding a `LocaleCode` is proof the string
/// already passed [`is_valid_code`]. Codes are case-sensitive: `it-IT` and
/// `it-it` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse and validate a locale code.
    ///
    /// # Examples
    /// ```
    /// use locale_press::locale::LocaleCode;
    /// let code = LocaleCode::parse("ja-JP").unwrap();
    /// assert_eq!(code.as_str(), "ja-JP");
    /// assert!(LocaleCode::parse("ja/JP").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self> {
        if !is_valid_code(code) {
            bail!(
                "invalid locale code '{}' (expected [A-Za-z0-9][A-Za-z0-9_-]*, at most {} bytes)",
                code,
                MAX_CODE_BYTES
            );
        }
        Ok(LocaleCode(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// English name of this locale, if it is a known one.
    pub fn language_name(&self) -> Option<&'static str> {
        language_name(&self.0)
    }

    /// Name of this locale in its own script, if it is a known one.
    pub fn native_name(&self) -> Option<&'static str> {
        native_name(&self.0)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets IndexMap<LocaleCode, _> be queried with a plain &str.
impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = anyhow::Error;

    fn try_from(code: String) -> Result<Self> {
        LocaleCode::parse(&code)
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> String {
        code.0
    }
}

/// Returns the English name of a locale code.
///
/// Returns `None` for unrecognised codes. Only includes the locales that
/// locale-press has active landing catalogs for, plus a handful of common
/// codes for display purposes.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "it-IT" => Some("Italian"),
        "nl-NL" => Some("Dutch (Netherlands)"),
        "pl-PL" => Some("Polish"),
        "sv-SE" => Some("Swedish"),
        "da-DK" => Some("Danish"),
        "nb-NO" => Some("Bokmål Norwegian"),
        "fi-FI" => Some("Finnish"),
        "ja-JP" => Some("Japanese"),
        "zh-CN" => Some("Simplified Chinese"),
        "zh-TW" => Some("Traditional Chinese (Taiwan)"),
        "ko-KR" => Some("Korean"),
        "th-TH" => Some("Thai"),
        "vi-VN" => Some("Vietnamese"),
        "id-ID" => Some("Indonesian"),
        "ru-RU" => Some("Russian"),
        "uk-UA" => Some("Ukrainian"),
        "cs-CZ" => Some("Czech"),
        "bg-BG" => Some("Bulgarian"),
        "ro-RO" => Some("Romanian"),
        "hr-HR" => Some("Croatian"),
        "sr-RS" => Some("Serbian"),
        "en" => Some("English (United States)"),
        "en-GB" => Some("English (United Kingdom)"),
        "de-DE" => Some("German"),
        "fr-FR" => Some("French (France)"),
        "es-ES" => Some("Spanish (Spain)"),
        "es-419" => Some("Spanish (Latin America)"),
        "pt-BR" => Some("Portuguese (Brazil)"),
        "tr-TR" => Some("Turkish"),
        _ => None,
    }
}

/// Returns the native name of a locale code.
///
/// Used in locale listings where operators should see each language
/// written in its own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "it-IT" => Some("Italiano"),
        "nl-NL" => Some("Nederlands"),
        "pl-PL" => Some("Polski"),
        "sv-SE" => Some("Svenska"),
        "da-DK" => Some("Dansk"),
        "nb-NO" => Some("Norsk bokmål"),
        "fi-FI" => Some("Suomi"),
        "ja-JP" => Some("日本語"),
        "zh-CN" => Some("简体中文"),
        "zh-TW" => Some("繁體中文 (台灣)"),
        "ko-KR" => Some("한국어"),
        "th-TH" => Some("ไทย"),
        "vi-VN" => Some("Tiếng Việt"),
        "id-ID" => Some("Bahasa Indonesia"),
        "ru-RU" => Some("Русский"),
        "uk-UA" => Some("Українська"),
        "cs-CZ" => Some("Čeština"),
        "bg-BG" => Some("Български"),
        "ro-RO" => Some("Română"),
        "hr-HR" => Some("Hrvatski"),
        "sr-RS" => Some("Српски"),
        "en" => Some("English"),
        "en-GB" => Some("English (UK)"),
        "de-DE" => Some("Deutsch"),
        "fr-FR" => Some("Français"),
        "es-ES" => Some("Español"),
        "es-419" => Some("Español (Latinoamérica)"),
        "pt-BR" => Some("Português (Brasil)"),
        "tr-TR" => Some("Türkçe"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_code("it-IT"));
        assert!(is_valid_code("es-419"));
        assert!(is_valid_code("nb-NO"));
        assert!(is_valid_code("zh-Hant-TW"));
        assert!(is_valid_code("en"));
        assert!(is_valid_code("pt_BR"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("it/IT"));
        assert!(!is_valid_code("../escape"));
        assert!(!is_valid_code(".hidden"));
        assert!(!is_valid_code("-it"));
        assert!(!is_valid_code("pt BR"));
        assert!(!is_valid_code("日本語"));
        assert!(!is_valid_code("a-very-long-code-that-never-ends"));
    }

    #[test]
    fn parse_keeps_the_original_spelling() {
        let code = LocaleCode::parse("zh-TW").expect("should parse");
        assert_eq!(code.as_str(), "zh-TW");
        assert_eq!(code.to_string(), "zh-TW");
    }

    #[test]
    fn parse_rejects_path_segments() {
        assert!(LocaleCode::parse("..").is_err());
        assert!(LocaleCode::parse("it-IT/../../etc").is_err());
    }

    #[test]
    fn serde_round_trip_validates() {
        let code: LocaleCode = serde_json::from_str("\"sr-RS\"").expect("should deserialize");
        assert_eq!(code.as_str(), "sr-RS");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"sr-RS\"");

        let bad: Result<LocaleCode, _> = serde_json::from_str("\"../evil\"");
        assert!(bad.is_err(), "deserialization should reject bad codes");
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("it-IT"), Some("Italian"));
        assert_eq!(language_name("nb-NO"), Some("Bokmål Norwegian"));
        assert_eq!(language_name("xx-XX"), None);
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(native_name("ja-JP"), Some("日本語"));
        assert_eq!(native_name("cs-CZ"), Some("Čeština"));
        assert_eq!(native_name("xx-XX"), None);
    }
}
