//! Structured phrase validation

use super::decode::decode;
use crate::error::{MnemonicError, MnemonicResult};
use crate::wordlist::Wordlist;

/// Outcome of validating a phrase
///
/// `reason` is `None` exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the phrase is a well-formed mnemonic with a matching checksum
    pub valid: bool,
    /// Why the phrase was rejected
    pub reason: Option<MnemonicError>,
}

impl Validation {
    /// A passing result
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A failing result carrying its cause
    pub fn rejected(reason: MnemonicError) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    /// Convert into a `Result`, surfacing the rejection reason as the error.
    pub fn into_result(self) -> MnemonicResult<()> {
        match self.reason {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

/// Validate `phrase` against `wordlist`.
///
/// The reason, if any, is one of `InvalidWordCount`, `UnknownWord` or
/// `ChecksumMismatch`.
pub fn validate(phrase: &str, wordlist: &Wordlist) -> Validation {
    match decode(phrase, wordlist) {
        Ok(decoded) if decoded.checksum_valid => Validation::ok(),
        Ok(_) => Validation::rejected(MnemonicError::ChecksumMismatch),
        Err(err) => Validation::rejected(err),
    }
}
