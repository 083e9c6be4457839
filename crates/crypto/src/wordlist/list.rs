//! A single validated 2048-word list

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use super::language::{Language, LanguageConfig};
use crate::error::{MnemonicError, MnemonicResult};

/// Number of words in every BIP-39 wordlist
pub const WORDLIST_SIZE: usize = 2048;

/// Normalize a word for lookup: NFKD, then lower case.
fn normalize_word(word: &str) -> String {
    word.nfkd().collect::<String>().to_lowercase()
}

/// Immutable bidirectional index↔word map for one language
///
/// Words are kept in their standard order; lookups in both directions are O(1).
pub struct Wordlist {
    language: Language,
    config: LanguageConfig,
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Build a wordlist from lines of text.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped. Every
    /// word is stored in NFKD form.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidWordlist` if the input does not hold
    /// exactly 2048 words, holds a duplicate, or holds a word with inner
    /// whitespace.
    pub fn load<I, S>(language: Language, lines: I) -> MnemonicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::load_with_config(language, language.config(), lines)
    }

    /// Build a wordlist with explicit encoding settings.
    pub fn load_with_config<I, S>(
        language: Language,
        config: LanguageConfig,
        lines: I,
    ) -> MnemonicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::with_capacity(WORDLIST_SIZE);
        let mut index = HashMap::with_capacity(WORDLIST_SIZE);

        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if word.chars().any(char::is_whitespace) {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "{}: word {:?} contains whitespace",
                    language, word
                )));
            }
            if words.len() == WORDLIST_SIZE {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "{}: more than {} words",
                    language, WORDLIST_SIZE
                )));
            }

            let key = normalize_word(word);
            if index.contains_key(&key) {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "{}: duplicate word {:?}",
                    language, word
                )));
            }

            // words.len() < 2048 here, so it always fits in u16
            index.insert(key, words.len() as u16);
            words.push(word.nfkd().collect::<String>());
        }

        if words.len() != WORDLIST_SIZE {
            return Err(MnemonicError::InvalidWordlist(format!(
                "{}: expected {} words, found {}",
                language,
                WORDLIST_SIZE,
                words.len()
            )));
        }

        Ok(Self {
            language,
            config,
            words,
            index,
        })
    }

    /// Build a wordlist from raw UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidEncoding` if the bytes are not UTF-8.
    pub fn from_bytes(language: Language, bytes: &[u8]) -> MnemonicResult<Self> {
        let text = std::str::from_utf8(bytes)?;
        Self::load(language, text.lines())
    }

    /// Load a wordlist file, one word per line.
    ///
    /// The file handle is released before this returns, on success and on
    /// every error path.
    pub fn from_file(language: Language, path: &Path) -> MnemonicResult<Self> {
        let bytes = {
            let file = File::open(path).map_err(|e| {
                MnemonicError::InvalidWordlist(format!("{}: {}", path.display(), e))
            })?;
            let mut reader = BufReader::new(file);
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).map_err(|e| {
                MnemonicError::InvalidWordlist(format!("{}: {}", path.display(), e))
            })?;
            bytes
        };

        Self::from_bytes(language, &bytes)
    }

    /// Parse the list bundled with the crate for `language`.
    pub fn bundled(language: Language) -> MnemonicResult<Self> {
        Self::load(language, language.bundled_words().lines())
    }

    /// Language this list belongs to
    pub fn language(&self) -> Language {
        self.language
    }

    /// Encoding settings for this list
    pub fn config(&self) -> LanguageConfig {
        self.config
    }

    /// Separator used when joining words into a phrase
    pub fn separator(&self) -> &'static str {
        self.config.separator
    }

    /// Word at `index`, or `None` if `index >= 2048`
    pub fn word_at(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Index of `word`, or `None` if it is not in the list
    ///
    /// Matching is case-insensitive and ignores Unicode composition
    /// differences.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(&normalize_word(word)).copied()
    }

    /// Whether `word` is in the list
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Words in standard order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words starting with `prefix`, in list order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let prefix = normalize_word(prefix.trim());
        self.words
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }
}

impl std::fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("config", &self.config)
            .field("len", &self.words.len())
            .finish()
    }
}
