//! Mnemonic → entropy decoding

use zeroize::Zeroizing;

use super::bits::{checksum, write_index};
use crate::entropy::Entropy;
use crate::error::{MnemonicError, MnemonicResult};
use crate::strength::{Strength, BITS_PER_WORD};
use crate::wordlist::Wordlist;

/// Result of decoding a phrase
#[derive(Debug)]
pub struct Decoded {
    /// Entropy carried by the phrase
    pub entropy: Entropy,
    /// Whether the embedded checksum matches SHA-256 of `entropy`
    pub checksum_valid: bool,
}

/// Decode a phrase into entropy and a checksum verdict.
///
/// Words are separated by any run of Unicode whitespace, so both ASCII and
/// ideographic spaces work. Word matching ignores case and composition.
///
/// A checksum mismatch is not an error here; it is reported through
/// [`Decoded::checksum_valid`]. Use [`decode_verified`] to reject it.
///
/// # Errors
///
/// - `MnemonicError::InvalidWordCount` if the phrase is not 12, 15, 18, 21 or
///   24 words long
/// - `MnemonicError::UnknownWord` naming the first word not found in
///   `wordlist` and its 0-based position
pub fn decode(phrase: &str, wordlist: &Wordlist) -> MnemonicResult<Decoded> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let strength = Strength::from_word_count(words.len())?;

    let entropy_len = strength.entropy_bytes();
    let mut stream = Zeroizing::new(vec![0u8; entropy_len + 1]);

    for (position, word) in words.iter().enumerate() {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| MnemonicError::unknown_word(word, Some(position)))?;
        write_index(&mut stream, position * BITS_PER_WORD, index);
    }

    let (entropy_bytes, tail) = stream.split_at(entropy_len);
    let embedded = tail[0] >> (8 - strength.checksum_bits());
    let checksum_valid = checksum(entropy_bytes, strength) == embedded;

    Ok(Decoded {
        entropy: Entropy::new(entropy_bytes)?,
        checksum_valid,
    })
}

/// Decode a phrase, rejecting it if the checksum does not match.
///
/// # Errors
///
/// Everything [`decode`] returns, plus `MnemonicError::ChecksumMismatch`.
pub fn decode_verified(phrase: &str, wordlist: &Wordlist) -> MnemonicResult<Entropy> {
    let decoded = decode(phrase, wordlist)?;
    if !decoded.checksum_valid {
        return Err(MnemonicError::ChecksumMismatch);
    }
    Ok(decoded.entropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::encode;
    use crate::wordlist::{Language, WordlistRegistry};

    const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn list(language: Language) -> &'static Wordlist {
        WordlistRegistry::builtin()
            .wordlist(language)
            .unwrap()
    }

    #[test]
    fn test_decode_zero_phrase() {
        let decoded = decode(ZERO_PHRASE, list(Language::English)).unwrap();
        assert!(decoded.checksum_valid);
        assert_eq!(decoded.entropy.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_decode_all_sizes() {
        for len in [16, 20, 24, 28, 32] {
            let entropy: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
            let phrase = encode(&entropy, list(Language::English)).unwrap();
            let decoded = decode_verified(&phrase, list(Language::English)).unwrap();
            assert_eq!(decoded.as_bytes(), &entropy[..]);
        }
    }

    #[test]
    fn test_bad_checksum_is_reported() {
        // Last word "abandon" carries checksum 0 but the real checksum is 3
        let phrase = ZERO_PHRASE.replace("about", "abandon");
        let decoded = decode(&phrase, list(Language::English)).unwrap();
        assert!(!decoded.checksum_valid);
        assert_eq!(decoded.entropy.as_bytes(), &[0u8; 16]);

        assert_eq!(
            decode_verified(&phrase, list(Language::English)).unwrap_err(),
            MnemonicError::ChecksumMismatch
        );
    }

    #[test]
    fn test_invalid_word_count() {
        for count in [0usize, 1, 11, 13, 14, 16, 23, 25, 48] {
            let phrase = vec!["abandon"; count].join(" ");
            assert_eq!(
                decode(&phrase, list(Language::English)).unwrap_err(),
                MnemonicError::InvalidWordCount { count }
            );
        }
    }

    #[test]
    fn test_word_count_checked_before_words() {
        let err = decode("nonsense words", list(Language::English)).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidWordCount { count: 2 });
    }

    #[test]
    fn test_unknown_word_position() {
        let phrase = ZERO_PHRASE.replacen("abandon", "Abandonn", 1);
        let phrase = phrase.replacen("abandon abandon", "abandon bitcoin", 1);
        let err = decode(&phrase, list(Language::English)).unwrap_err();
        assert_eq!(
            err,
            MnemonicError::UnknownWord {
                word: "Abandonn".to_string(),
                position: Some(0)
            }
        );

        let mut words: Vec<&str> = ZERO_PHRASE.split(' ').collect();
        words[7] = "satoshi";
        let err = decode(&words.join(" "), list(Language::English)).unwrap_err();
        assert_eq!(
            err,
            MnemonicError::UnknownWord {
                word: "satoshi".to_string(),
                position: Some(7)
            }
        );
    }

    #[test]
    fn test_whitespace_and_case_tolerated() {
        let messy = format!("  {}  \n", ZERO_PHRASE.to_uppercase().replace(' ', "\t "));
        let decoded = decode(&messy, list(Language::English)).unwrap();
        assert!(decoded.checksum_valid);
    }

    #[test]
    fn test_japanese_either_separator() {
        let japanese = list(Language::Japanese);
        let phrase = encode(&[0u8; 16], japanese).unwrap();
        assert!(decode_verified(&phrase, japanese).is_ok());

        let ascii_spaced = phrase.replace('\u{3000}', " ");
        assert!(decode_verified(&ascii_spaced, japanese).is_ok());
    }

    #[test]
    fn test_wrong_language() {
        let err = decode(ZERO_PHRASE, list(Language::Korean)).unwrap_err();
        assert!(matches!(
            err,
            MnemonicError::UnknownWord {
                position: Some(0),
                ..
            }
        ));
    }
}
