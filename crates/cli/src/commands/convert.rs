//! Entropy ↔ phrase conversion commands

use anyhow::{Context, Result};
use moke_crypto::{entropy_to_mnemonic, mnemonic_to_entropy, Entropy, Language};
use tracing::debug;

use super::common::join_phrase;

/// Execute the from-entropy command
pub fn from_entropy(hex: &str, language: Language) -> Result<()> {
    let entropy = Entropy::from_hex(hex).context("Invalid entropy")?;
    debug!(%language, bits = entropy.strength().entropy_bits(), "Encoding entropy");

    let phrase = zeroize::Zeroizing::new(entropy_to_mnemonic(entropy.as_bytes(), language)?);
    println!("{}", phrase.as_str());

    Ok(())
}

/// Execute the to-entropy command
pub fn to_entropy(words: Vec<String>, language: Language) -> Result<()> {
    let phrase = join_phrase(words);
    debug!(%language, "Decoding mnemonic");

    let entropy = mnemonic_to_entropy(&phrase, language).context("Invalid mnemonic")?;
    println!("{}", entropy.to_hex());

    Ok(())
}
