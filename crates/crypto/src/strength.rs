//! Entropy strength table
//!
//! BIP-39 ties entropy size, checksum length and word count together:
//!
//! ```text
//! entropy bits | checksum bits | words
//! -------------+---------------+------
//!          128 |             4 |    12
//!          160 |             5 |    15
//!          192 |             6 |    18
//!          224 |             7 |    21
//!          256 |             8 |    24
//! ```
//!
//! Every component resolves these numbers through [`Strength`] instead of
//! recomputing them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{MnemonicError, MnemonicResult};

/// Number of bits encoded by one mnemonic word
pub const BITS_PER_WORD: usize = 11;

/// Supported entropy strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Strength {
    /// 128 bits, 12 words
    #[default]
    Bits128,
    /// 160 bits, 15 words
    Bits160,
    /// 192 bits, 18 words
    Bits192,
    /// 224 bits, 21 words
    Bits224,
    /// 256 bits, 24 words
    Bits256,
}

impl Strength {
    /// All strengths, weakest first
    pub const ALL: [Strength; 5] = [
        Strength::Bits128,
        Strength::Bits160,
        Strength::Bits192,
        Strength::Bits224,
        Strength::Bits256,
    ];

    /// Look up a strength by entropy size in bits
    pub fn from_bits(bits: usize) -> MnemonicResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.entropy_bits() == bits)
            .ok_or(MnemonicError::InvalidEntropySize { bits })
    }

    /// Look up a strength by entropy length in bytes
    pub fn from_entropy_len(len: usize) -> MnemonicResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.entropy_bytes() == len)
            .ok_or(MnemonicError::InvalidEntropySize {
                bits: len.saturating_mul(8),
            })
    }

    /// Look up a strength by mnemonic word count
    pub fn from_word_count(count: usize) -> MnemonicResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.word_count() == count)
            .ok_or(MnemonicError::InvalidWordCount { count })
    }

    /// Entropy size in bits
    pub const fn entropy_bits(self) -> usize {
        match self {
            Strength::Bits128 => 128,
            Strength::Bits160 => 160,
            Strength::Bits192 => 192,
            Strength::Bits224 => 224,
            Strength::Bits256 => 256,
        }
    }

    /// Entropy size in bytes
    pub const fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// Checksum length in bits (`entropy_bits / 32`)
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    /// Number of words in the mnemonic
    pub const fn word_count(self) -> usize {
        self.total_bits() / BITS_PER_WORD
    }

    /// Entropy plus checksum, in bits
    pub const fn total_bits(self) -> usize {
        self.entropy_bits() + self.checksum_bits()
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entropy_bits())
    }
}

/// Error parsing a [`Strength`] from text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseStrengthError {
    /// Input is not a number of bits
    #[error("invalid entropy size: {0:?} is not a number of bits")]
    NotANumber(String),

    /// Input is a number but not a supported size
    #[error(transparent)]
    Unsupported(#[from] MnemonicError),
}

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseStrengthError::NotANumber(s.to_string()))?;
        Ok(Self::from_bits(bits)?)
    }
}

impl TryFrom<usize> for Strength {
    type Error = MnemonicError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<Strength> for usize {
    fn from(strength: Strength) -> Self {
        strength.entropy_bits()
    }
}
