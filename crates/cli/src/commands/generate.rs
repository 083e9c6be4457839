//! Mnemonic generation command

use anyhow::Result;
use moke_crypto::{Language, Mnemonic, Strength};
use tracing::{debug, info};

use super::Settings;

/// Execute the generate command
pub fn execute(
    settings: &Settings,
    bits: Option<usize>,
    language: Option<Language>,
    show_entropy: bool,
) -> Result<()> {
    let strength = match bits {
        Some(bits) => Strength::from_bits(bits)?,
        None => settings.config.entropy_bits,
    };
    let language = settings.language(language);

    debug!(%language, bits = strength.entropy_bits(), "Generating mnemonic");
    let mnemonic = Mnemonic::generate(strength, language)?;
    info!(
        %language,
        words = mnemonic.word_count(),
        "Generated mnemonic"
    );

    println!("{}", mnemonic.phrase());
    if show_entropy {
        println!("{}", mnemonic.entropy().to_hex());
    }

    Ok(())
}
