//! Entropy → mnemonic encoding

use zeroize::Zeroizing;

use super::bits::{checksum, read_index};
use crate::error::{MnemonicError, MnemonicResult};
use crate::strength::{Strength, BITS_PER_WORD};
use crate::wordlist::Wordlist;

/// Split entropy plus checksum into 11-bit word indices.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidEntropySize` if `entropy` is not 16, 20,
/// 24, 28 or 32 bytes.
pub fn entropy_to_indices(entropy: &[u8]) -> MnemonicResult<Vec<u16>> {
    let strength = Strength::from_entropy_len(entropy.len())?;

    // entropy bytes followed by one byte holding the checksum in its top bits
    let mut stream = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    stream.extend_from_slice(entropy);
    stream.push(checksum(entropy, strength) << (8 - strength.checksum_bits()));

    Ok((0..strength.word_count())
        .map(|i| read_index(&stream, i * BITS_PER_WORD))
        .collect())
}

/// Encode entropy as a mnemonic phrase in `wordlist`'s language.
///
/// Words are joined with the list's separator.
///
/// # Example
///
/// ```rust
/// use moke_crypto::mnemonic::encode;
/// use moke_crypto::wordlist::{Language, WordlistRegistry};
///
/// let registry = WordlistRegistry::builtin();
/// let english = registry.wordlist(Language::English).unwrap();
/// let phrase = encode(&[0u8; 16], english).unwrap();
/// assert!(phrase.ends_with("abandon about"));
/// ```
pub fn encode(entropy: &[u8], wordlist: &Wordlist) -> MnemonicResult<String> {
    let indices = entropy_to_indices(entropy)?;

    let words = indices
        .iter()
        .map(|&index| {
            wordlist.word_at(index).ok_or_else(|| {
                MnemonicError::InvalidWordlist(format!(
                    "{}: no word at index {}",
                    wordlist.language(),
                    index
                ))
            })
        })
        .collect::<MnemonicResult<Vec<&str>>>()?;

    Ok(words.join(wordlist.separator()))
}
