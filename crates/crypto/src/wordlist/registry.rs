//! Registry of loaded wordlists

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

use super::language::Language;
use super::list::Wordlist;
use crate::error::{MnemonicError, MnemonicResult};

static BUILTIN: Lazy<WordlistRegistry> =
    Lazy::new(|| load_available(Language::ALL, Wordlist::bundled));

/// Registry of every language in `languages` that `load` accepts
///
/// A language whose list fails to load is left out and reports
/// `UnknownLanguage` on lookup; the other languages stay usable.
fn load_available<I, F>(languages: I, load: F) -> WordlistRegistry
where
    I: IntoIterator<Item = Language>,
    F: Fn(Language) -> MnemonicResult<Wordlist>,
{
    let mut builder = WordlistRegistry::builder();
    for list in languages.into_iter().filter_map(|language| load(language).ok()) {
        builder.insert(list);
    }
    builder.build()
}

/// Immutable set of wordlists keyed by language
///
/// A registry is assembled once through [`RegistryBuilder`] and is read-only
/// afterwards, so a shared reference can be used from any number of threads
/// without locking.
///
/// # Example
///
/// ```rust
/// use moke_crypto::wordlist::{Language, WordlistRegistry};
///
/// let registry = WordlistRegistry::builtin();
/// assert_eq!(registry.index_of(Language::English, "zoo").unwrap(), 2047);
/// assert_eq!(registry.word_at(Language::English, 0).unwrap(), Some("abandon"));
/// ```
#[derive(Debug, Default)]
pub struct WordlistRegistry {
    lists: BTreeMap<Language, Wordlist>,
}

impl WordlistRegistry {
    /// Start assembling a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide registry with every bundled language
    ///
    /// Built on first use; later calls return the same instance.
    pub fn builtin() -> &'static WordlistRegistry {
        &BUILTIN
    }

    /// Wordlist for `language`
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::UnknownLanguage` if the language is not loaded.
    pub fn wordlist(&self, language: Language) -> MnemonicResult<&Wordlist> {
        self.lists
            .get(&language)
            .ok_or_else(|| MnemonicError::UnknownLanguage(language.tag().to_string()))
    }

    /// Word at `index` in `language`, `None` when `index >= 2048`
    pub fn word_at(&self, language: Language, index: u16) -> MnemonicResult<Option<&str>> {
        Ok(self.wordlist(language)?.word_at(index))
    }

    /// Index of `word` in `language`
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::UnknownWord` if the word is absent.
    pub fn index_of(&self, language: Language, word: &str) -> MnemonicResult<u16> {
        self.wordlist(language)?
            .index_of(word)
            .ok_or_else(|| MnemonicError::unknown_word(word, None))
    }

    /// Loaded languages, in registry order
    pub fn languages(&self) -> Vec<Language> {
        self.lists.keys().copied().collect()
    }

    /// Words in `language` starting with `prefix`
    pub fn words_with_prefix(&self, language: Language, prefix: &str) -> MnemonicResult<Vec<&str>> {
        Ok(self.wordlist(language)?.words_with_prefix(prefix))
    }

    /// Languages whose wordlist contains every word of `phrase`
    ///
    /// Several lists share words (English and French both contain "animal"),
    /// so more than one language can match. An empty phrase matches nothing.
    pub fn detect_language(&self, phrase: &str) -> Vec<Language> {
        let normalized: String = phrase.nfkd().collect();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        self.lists
            .iter()
            .filter(|(_, list)| words.iter().all(|word| list.contains(word)))
            .map(|(language, _)| *language)
            .collect()
    }
}

/// Collects wordlists before they are frozen into a [`WordlistRegistry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    lists: BTreeMap<Language, Wordlist>,
}

impl RegistryBuilder {
    /// Load `language` from lines of text.
    ///
    /// On failure nothing is inserted for `language`; previously loaded
    /// languages are kept.
    pub fn load<I, S>(&mut self, language: Language, lines: I) -> MnemonicResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = Wordlist::load(language, lines)?;
        Ok(self.insert(list))
    }

    /// Load the list bundled with the crate for `language`.
    pub fn load_bundled(&mut self, language: Language) -> MnemonicResult<&mut Self> {
        let list = Wordlist::bundled(language)?;
        Ok(self.insert(list))
    }

    /// Load `language` from a wordlist file.
    pub fn load_file(&mut self, language: Language, path: &Path) -> MnemonicResult<&mut Self> {
        let list = Wordlist::from_file(language, path)?;
        Ok(self.insert(list))
    }

    /// Add an already validated list, replacing any list for the same language.
    pub fn insert(&mut self, list: Wordlist) -> &mut Self {
        self.lists.insert(list.language(), list);
        self
    }

    /// Freeze the registry
    pub fn build(self) -> WordlistRegistry {
        WordlistRegistry { lists: self.lists }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_languages() {
        let registry = WordlistRegistry::builtin();
        assert_eq!(registry.languages(), Language::ALL.to_vec());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = WordlistRegistry::builtin() as *const WordlistRegistry;
        let b = WordlistRegistry::builtin() as *const WordlistRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_index_of_unknown_word() {
        let registry = WordlistRegistry::builtin();
        let err = registry.index_of(Language::English, "blockchain").unwrap_err();
        assert_eq!(
            err,
            MnemonicError::UnknownWord {
                word: "blockchain".to_string(),
                position: None
            }
        );
    }

    #[test]
    fn test_unloaded_language() {
        let mut builder = WordlistRegistry::builder();
        builder.load_bundled(Language::English).unwrap();
        let registry = builder.build();

        assert_eq!(registry.languages(), vec![Language::English]);
        assert!(matches!(
            registry.wordlist(Language::Korean),
            Err(MnemonicError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_failed_load_leaves_no_partial_language() {
        let mut builder = WordlistRegistry::builder();
        builder.load_bundled(Language::English).unwrap();

        let short: Vec<&str> = Language::French.bundled_words().lines().take(100).collect();
        assert!(builder.load(Language::French, short).is_err());

        let registry = builder.build();
        assert_eq!(registry.languages(), vec![Language::English]);
    }

    #[test]
    fn test_broken_list_only_disables_its_language() {
        let registry = load_available(Language::ALL, |language| {
            if language == Language::French {
                let short: Vec<&str> = language.bundled_words().lines().take(100).collect();
                Wordlist::load(language, short)
            } else {
                Wordlist::bundled(language)
            }
        });

        assert_eq!(registry.languages().len(), Language::ALL.len() - 1);
        assert!(matches!(
            registry.wordlist(Language::French),
            Err(MnemonicError::UnknownLanguage(_))
        ));
        assert_eq!(registry.index_of(Language::English, "zoo").unwrap(), 2047);
    }

    #[test]
    fn test_detect_language() {
        let registry = WordlistRegistry::builtin();

        let english = "legal winner thank year wave sausage worth useful legal winner thank yellow";
        assert_eq!(registry.detect_language(english), vec![Language::English]);

        let japanese = "あいこくしん\u{3000}あおぞら";
        assert_eq!(registry.detect_language(japanese), vec![Language::Japanese]);

        assert!(registry.detect_language("").is_empty());
        assert!(registry.detect_language("qwertyuiop").is_empty());
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = WordlistRegistry::builtin();
        let handles: Vec<_> = (0..4u16)
            .map(|i| {
                std::thread::spawn(move || {
                    registry
                        .word_at(Language::English, i)
                        .unwrap()
                        .map(str::to_string)
                })
            })
            .collect();

        let words: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            words,
            vec![
                Some("abandon".to_string()),
                Some("ability".to_string()),
                Some("able".to_string()),
                Some("about".to_string())
            ]
        );
    }
}
