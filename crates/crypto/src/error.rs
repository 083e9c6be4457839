//! Error types for mnemonic operations

use thiserror::Error;

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;

/// Exit code for malformed user input (sysexits.h `EX_DATAERR`).
pub const EXIT_DATA_ERROR: i32 = 65;

/// Exit code for an unknown language tag (sysexits.h `EX_USAGE`).
pub const EXIT_USAGE_ERROR: i32 = 64;

/// Exit code for a broken bundled resource (sysexits.h `EX_SOFTWARE`).
pub const EXIT_SOFTWARE_ERROR: i32 = 70;

/// Exit code when the OS randomness source is unavailable (sysexits.h `EX_OSERR`).
pub const EXIT_OS_ERROR: i32 = 71;

/// Errors that can occur during mnemonic operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy is not 128, 160, 192, 224 or 256 bits long
    #[error("invalid entropy size: {bits} bits (must be 128, 160, 192, 224 or 256)")]
    InvalidEntropySize {
        /// Offending size in bits
        bits: usize,
    },

    /// Phrase does not have 12, 15, 18, 21 or 24 words
    #[error("invalid word count: {count} (must be 12, 15, 18, 21 or 24)")]
    InvalidWordCount {
        /// Number of words found
        count: usize,
    },

    /// Word is not present in the wordlist
    #[error("unknown word {word:?}{}", describe_position(.position))]
    UnknownWord {
        /// The word as supplied by the caller
        word: String,
        /// 0-based position in the phrase, when known
        position: Option<usize>,
    },

    /// Embedded checksum does not match SHA-256 of the decoded entropy
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Language tag is not recognized or not loaded
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Wordlist resource failed to load
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    /// Input bytes are not valid UTF-8
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The operating system randomness source failed
    #[error("secure random source failure: {0}")]
    RandomSourceFailure(String),
}

fn describe_position(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!(" at position {}", pos),
        None => String::new(),
    }
}

impl MnemonicError {
    /// Process exit code for this error kind
    ///
    /// Follows the sysexits.h convention so shell callers can tell input
    /// errors apart from environment failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            MnemonicError::InvalidEntropySize { .. }
            | MnemonicError::InvalidWordCount { .. }
            | MnemonicError::UnknownWord { .. }
            | MnemonicError::ChecksumMismatch
            | MnemonicError::InvalidEncoding(_) => EXIT_DATA_ERROR,
            MnemonicError::UnknownLanguage(_) => EXIT_USAGE_ERROR,
            MnemonicError::InvalidWordlist(_) => EXIT_SOFTWARE_ERROR,
            MnemonicError::RandomSourceFailure(_) => EXIT_OS_ERROR,
        }
    }

    pub(crate) fn unknown_word(word: &str, position: Option<usize>) -> Self {
        MnemonicError::UnknownWord {
            word: word.to_string(),
            position,
        }
    }
}

impl From<std::str::Utf8Error> for MnemonicError {
    fn from(err: std::str::Utf8Error) -> Self {
        MnemonicError::InvalidEncoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for MnemonicError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        MnemonicError::InvalidEncoding(err.to_string())
    }
}

impl From<rand::Error> for MnemonicError {
    fn from(err: rand::Error) -> Self {
        MnemonicError::RandomSourceFailure(err.to_string())
    }
}
