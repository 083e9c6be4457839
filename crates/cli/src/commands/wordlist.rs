//! Wordlist exploration commands

use anyhow::Result;
use moke_crypto::{Language, WordlistRegistry};

use super::common::join_phrase;

/// Execute the languages command
pub fn languages() -> Result<()> {
    let registry = WordlistRegistry::builtin();
    for language in registry.languages() {
        println!("{:<20} {}", language.tag(), language.code());
    }
    Ok(())
}

/// Execute the words command
pub fn words(prefix: &str, language: Language) -> Result<()> {
    let registry = WordlistRegistry::builtin();
    for word in registry.words_with_prefix(language, prefix)? {
        println!("{}", word);
    }
    Ok(())
}

/// Execute the detect command
pub fn detect(words: Vec<String>) -> Result<()> {
    let phrase = join_phrase(words);
    let registry = WordlistRegistry::builtin();

    let matches = registry.detect_language(&phrase);
    if matches.is_empty() {
        anyhow::bail!("No wordlist contains every word of the phrase");
    }
    for language in matches {
        println!("{}", language.tag());
    }
    Ok(())
}
