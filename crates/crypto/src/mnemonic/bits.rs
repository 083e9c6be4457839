//! Bit packing of 11-bit word indices and the SHA-256 checksum

use sha2::{Digest, Sha256};

use crate::strength::{Strength, BITS_PER_WORD};

/// Leading `checksum_bits` of SHA-256(entropy), right-aligned in a byte.
pub(crate) fn checksum(entropy: &[u8], strength: Strength) -> u8 {
    let digest = Sha256::digest(entropy);
    digest[0] >> (8 - strength.checksum_bits())
}

/// Read the 11-bit index starting at bit `offset`, most significant bit first.
///
/// `bytes` must hold at least `offset + 11` bits.
pub(crate) fn read_index(bytes: &[u8], offset: usize) -> u16 {
    (offset..offset + BITS_PER_WORD).fold(0u16, |acc, bit| {
        let set = (bytes[bit / 8] >> (7 - bit % 8)) & 1;
        (acc << 1) | u16::from(set)
    })
}

/// Write the low 11 bits of `index` starting at bit `offset`, most
/// significant bit first. Target bits must be zero beforehand.
pub(crate) fn write_index(bytes: &mut [u8], offset: usize, index: u16) {
    for i in 0..BITS_PER_WORD {
        if (index >> (BITS_PER_WORD - 1 - i)) & 1 == 1 {
            let bit = offset + i;
            bytes[bit / 8] |= 0x80 >> (bit % 8);
        }
    }
}
