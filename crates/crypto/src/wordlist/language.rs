//! Wordlist languages and their per-language settings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MnemonicError;

/// Languages with a standard BIP-39 wordlist
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Japanese (hiragana)
    Japanese,
    /// Korean (hangul)
    Korean,
    /// Spanish
    Spanish,
    /// Chinese, simplified characters
    ChineseSimplified,
    /// Chinese, traditional characters
    ChineseTraditional,
    /// French
    French,
    /// Italian
    Italian,
    /// Czech
    Czech,
    /// Portuguese
    Portuguese,
}

/// Per-language encoding settings consulted by the encoder and decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// String placed between words when rendering a phrase
    pub separator: &'static str,
}

impl LanguageConfig {
    /// Ordinary ASCII space separator
    pub const SPACE: LanguageConfig = LanguageConfig { separator: " " };

    /// Ideographic space (U+3000), used by the Japanese list
    pub const IDEOGRAPHIC_SPACE: LanguageConfig = LanguageConfig {
        separator: "\u{3000}",
    };
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::SPACE
    }
}

impl Language {
    /// All languages, in registry order
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::French,
        Language::Italian,
        Language::Czech,
        Language::Portuguese,
    ];

    /// Canonical tag, e.g. `"chinese_simplified"`
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Czech => "czech",
            Language::Portuguese => "portuguese",
        }
    }

    /// Short language code, e.g. `"zh-hans"`
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Spanish => "es",
            Language::ChineseSimplified => "zh-hans",
            Language::ChineseTraditional => "zh-hant",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Czech => "cs",
            Language::Portuguese => "pt",
        }
    }

    /// Encoding settings for this language
    pub fn config(self) -> LanguageConfig {
        match self {
            Language::Japanese => LanguageConfig::IDEOGRAPHIC_SPACE,
            _ => LanguageConfig::SPACE,
        }
    }

    /// Bundled wordlist text, one word per line
    pub(crate) fn bundled_words(self) -> &'static str {
        match self {
            Language::English => include_str!("words/english.txt"),
            Language::Japanese => include_str!("words/japanese.txt"),
            Language::Korean => include_str!("words/korean.txt"),
            Language::Spanish => include_str!("words/spanish.txt"),
            Language::ChineseSimplified => include_str!("words/chinese_simplified.txt"),
            Language::ChineseTraditional => include_str!("words/chinese_traditional.txt"),
            Language::French => include_str!("words/french.txt"),
            Language::Italian => include_str!("words/italian.txt"),
            Language::Czech => include_str!("words/czech.txt"),
            Language::Portuguese => include_str!("words/portuguese.txt"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag() == wanted || lang.code().replace('-', "_") == wanted)
            .or(match wanted.as_str() {
                "zh_cn" | "chinese" => Some(Language::ChineseSimplified),
                "zh_tw" => Some(Language::ChineseTraditional),
                _ => None,
            })
            .ok_or_else(|| MnemonicError::UnknownLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = MnemonicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.tag().to_string()
    }
}
