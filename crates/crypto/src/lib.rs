//! BIP-39 mnemonic primitives for moke
//!
//! This crate provides:
//! - Validated wordlists for the ten standard languages, shared through a
//!   lazily built registry
//! - Secure entropy generation behind the [`RandomSource`] trait
//! - Entropy ↔ mnemonic encoding with checksum verification
//! - PBKDF2-HMAC-SHA512 seed derivation, single or batched
//!
//! The free functions below operate on the built-in registry. Use the types in
//! [`wordlist`] and [`mnemonic`] to work with custom lists.
//!
//! The library performs no I/O besides explicit wordlist file loading and never
//! logs.

pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod secure;
pub mod seed;
pub mod strength;
pub mod wordlist;

pub use entropy::{
    generate_entropy, generate_entropy_with, Entropy, OsRandom, RandomSource, RngSource,
};
pub use error::{MnemonicError, MnemonicResult};
pub use mnemonic::{Decoded, Mnemonic, Validation};
pub use secure::{IntoSecret, SecretArray, SecretBytes, SecretString};
pub use seed::{derive_seeds, Seed, PBKDF2_ROUNDS, SEED_LEN};
pub use strength::{ParseStrengthError, Strength};
pub use wordlist::{Language, LanguageConfig, Wordlist, WordlistRegistry, WORDLIST_SIZE};

// Re-export secrecy's accessor trait so callers don't need the dependency
pub use secrecy::ExposeSecret;

/// Generate a new mnemonic phrase of `bits` entropy in `language`.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidEntropySize` for unsupported sizes, or
/// `MnemonicError::RandomSourceFailure` if the OS source is unavailable.
///
/// # Example
///
/// ```rust
/// use moke_crypto::{generate_mnemonic, validate_mnemonic, Language};
///
/// let phrase = generate_mnemonic(128, Language::English).unwrap();
/// assert_eq!(phrase.split(' ').count(), 12);
/// assert!(validate_mnemonic(&phrase, Language::English).valid);
/// ```
pub fn generate_mnemonic(bits: usize, language: Language) -> MnemonicResult<String> {
    generate_mnemonic_with(&mut OsRandom, bits, language)
}

/// Generate a new mnemonic phrase using `source` for randomness.
pub fn generate_mnemonic_with<S>(
    source: &mut S,
    bits: usize,
    language: Language,
) -> MnemonicResult<String>
where
    S: RandomSource + ?Sized,
{
    let strength = Strength::from_bits(bits)?;
    let wordlist = WordlistRegistry::builtin().wordlist(language)?;
    let entropy = Entropy::generate_with(source, strength)?;
    mnemonic::encode(entropy.as_bytes(), wordlist)
}

/// Encode raw entropy as a mnemonic phrase.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidEntropySize` if `entropy` is not 16, 20, 24,
/// 28 or 32 bytes.
pub fn entropy_to_mnemonic(entropy: &[u8], language: Language) -> MnemonicResult<String> {
    let wordlist = WordlistRegistry::builtin().wordlist(language)?;
    mnemonic::encode(entropy, wordlist)
}

/// Decode a mnemonic phrase back to its entropy, verifying the checksum.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidWordCount`, `MnemonicError::UnknownWord` or
/// `MnemonicError::ChecksumMismatch`.
pub fn mnemonic_to_entropy(phrase: &str, language: Language) -> MnemonicResult<Entropy> {
    let wordlist = WordlistRegistry::builtin().wordlist(language)?;
    mnemonic::decode_verified(phrase, wordlist)
}

/// Check whether `phrase` is a valid mnemonic in `language`.
///
/// A language missing from the registry yields an invalid result whose reason
/// is `MnemonicError::UnknownLanguage`.
pub fn validate_mnemonic(phrase: &str, language: Language) -> Validation {
    match WordlistRegistry::builtin().wordlist(language) {
        Ok(wordlist) => mnemonic::validate(phrase, wordlist),
        Err(err) => Validation::rejected(err),
    }
}

/// Derive the 64-byte seed for a mnemonic and passphrase.
///
/// The mnemonic is not validated.
pub fn mnemonic_to_seed(phrase: &str, passphrase: &str) -> Seed {
    seed::derive_seed(phrase, passphrase)
}

/// Derive the seed from raw bytes, failing on invalid UTF-8.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidEncoding` if either input is not UTF-8.
pub fn mnemonic_bytes_to_seed(phrase: &[u8], passphrase: &[u8]) -> MnemonicResult<Seed> {
    seed::derive_seed_from_bytes(phrase, passphrase)
}
