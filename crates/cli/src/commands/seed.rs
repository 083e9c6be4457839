//! Seed derivation command

use anyhow::{Context, Result};
use moke_crypto::{mnemonic_to_seed, validate_mnemonic, Language};
use std::path::Path;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::common::{join_phrase, read_passphrase_from_file};

/// Execute the seed command
///
/// The seed is derived from the phrase text even when the phrase does not
/// validate, unless `strict` names a language to check against.
pub fn execute(
    words: Vec<String>,
    passphrase: Option<String>,
    passphrase_file: Option<&Path>,
    strict: Option<Language>,
) -> Result<()> {
    let phrase = join_phrase(words);

    let passphrase = match (passphrase, passphrase_file) {
        (Some(passphrase), _) => Zeroizing::new(passphrase),
        (None, Some(file)) => read_passphrase_from_file(file)?,
        (None, None) => Zeroizing::new(String::new()),
    };

    if let Some(language) = strict {
        validate_mnemonic(&phrase, language)
            .into_result()
            .context("Refusing to derive a seed from an invalid mnemonic")?;
        debug!(%language, "Mnemonic validated");
    }

    if passphrase.is_empty() {
        warn!("No passphrase given; seed is protected by the phrase alone");
    }

    let seed = mnemonic_to_seed(&phrase, &passphrase);
    println!("{}", Zeroizing::new(seed.to_hex()).as_str());

    Ok(())
}
