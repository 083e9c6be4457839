//! Phrase validation command

use anyhow::{Context, Result};
use moke_crypto::{validate_mnemonic, Language};
use tracing::debug;

use super::common::join_phrase;

/// Execute the validate command
///
/// Prints `valid` and succeeds, or prints `invalid: <reason>` and fails with
/// the rejection reason.
pub fn execute(words: Vec<String>, language: Language) -> Result<()> {
    let phrase = join_phrase(words);
    let validation = validate_mnemonic(&phrase, language);
    debug!(%language, valid = validation.valid, "Validated mnemonic");

    match &validation.reason {
        None => println!("valid"),
        Some(reason) => println!("invalid: {}", reason),
    }

    validation
        .into_result()
        .context("Mnemonic failed validation")
}
