//! Mnemonic phrase type
//!
//! Holds a checksum-verified phrase together with the entropy it encodes.

use secrecy::ExposeSecret;

use super::decode::decode_verified;
use super::encode::encode;
use crate::entropy::{Entropy, OsRandom, RandomSource};
use crate::error::MnemonicResult;
use crate::secure::{IntoSecret, SecretString};
use crate::seed::{derive_seed, Seed};
use crate::strength::Strength;
use crate::wordlist::{Language, Wordlist, WordlistRegistry};

/// BIP-39 mnemonic phrase
///
/// Always valid: constructing one from a phrase verifies the checksum. The
/// stored phrase is the canonical rendering (list spelling, list separator)
/// re-encoded from the entropy, whatever spacing or case the input used.
///
/// The phrase and entropy are zeroized on drop and never shown by `Debug`.
///
/// # Example
///
/// ```rust
/// use moke_crypto::mnemonic::Mnemonic;
/// use moke_crypto::{Language, Strength};
///
/// let mnemonic = Mnemonic::generate(Strength::Bits256, Language::English).unwrap();
/// assert_eq!(mnemonic.word_count(), 24);
///
/// let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
/// let imported = Mnemonic::from_phrase(phrase, Language::English).unwrap();
/// assert_eq!(imported.entropy().as_bytes(), &[0u8; 16]);
/// ```
pub struct Mnemonic {
    phrase: SecretString,
    language: Language,
    entropy: Entropy,
}

impl Mnemonic {
    /// Generate a new mnemonic from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::RandomSourceFailure` if the OS source is
    /// unavailable, or `MnemonicError::UnknownLanguage` if `language` has no
    /// built-in list.
    pub fn generate(strength: Strength, language: Language) -> MnemonicResult<Self> {
        let wordlist = WordlistRegistry::builtin().wordlist(language)?;
        Self::generate_with(&mut OsRandom, strength, wordlist)
    }

    /// Generate a new mnemonic from `source` in `wordlist`'s language.
    pub fn generate_with<S>(
        source: &mut S,
        strength: Strength,
        wordlist: &Wordlist,
    ) -> MnemonicResult<Self>
    where
        S: RandomSource + ?Sized,
    {
        let entropy = Entropy::generate_with(source, strength)?;
        Self::with_entropy(entropy, wordlist)
    }

    /// Encode existing entropy with the built-in list for `language`.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidEntropySize` if `entropy` is not 16, 20,
    /// 24, 28 or 32 bytes.
    pub fn from_entropy(entropy: &[u8], language: Language) -> MnemonicResult<Self> {
        let wordlist = WordlistRegistry::builtin().wordlist(language)?;
        Self::from_entropy_in(entropy, wordlist)
    }

    /// Encode existing entropy with `wordlist`.
    pub fn from_entropy_in(entropy: &[u8], wordlist: &Wordlist) -> MnemonicResult<Self> {
        Self::with_entropy(Entropy::new(entropy)?, wordlist)
    }

    /// Parse and verify a phrase in `language`.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidWordCount`, `MnemonicError::UnknownWord`
    /// or `MnemonicError::ChecksumMismatch` if the phrase is not valid.
    pub fn from_phrase(phrase: &str, language: Language) -> MnemonicResult<Self> {
        let wordlist = WordlistRegistry::builtin().wordlist(language)?;
        Self::from_phrase_in(phrase, wordlist)
    }

    /// Parse and verify a phrase against `wordlist`.
    pub fn from_phrase_in(phrase: &str, wordlist: &Wordlist) -> MnemonicResult<Self> {
        let entropy = decode_verified(phrase, wordlist)?;
        Self::with_entropy(entropy, wordlist)
    }

    fn with_entropy(entropy: Entropy, wordlist: &Wordlist) -> MnemonicResult<Self> {
        let phrase = encode(entropy.as_bytes(), wordlist)?;
        Ok(Self {
            phrase: phrase.into_secret(),
            language: wordlist.language(),
            entropy,
        })
    }

    /// The canonical phrase
    ///
    /// The returned reference should be used immediately and not stored.
    pub fn phrase(&self) -> &str {
        self.phrase.expose_secret()
    }

    /// Words of the phrase
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase().split_whitespace()
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.strength().word_count()
    }

    /// Language of the phrase
    pub fn language(&self) -> Language {
        self.language
    }

    /// Strength of the underlying entropy
    pub fn strength(&self) -> Strength {
        self.entropy.strength()
    }

    /// Entropy encoded by the phrase
    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    /// Derive the 64-byte seed, with an optional passphrase.
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        derive_seed(self.phrase(), passphrase.unwrap_or(""))
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}
