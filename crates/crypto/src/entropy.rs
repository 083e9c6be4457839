//! Entropy values and secure random sources
//!
//! [`RandomSource`] is the only way the crate obtains randomness. Production
//! code uses [`OsRandom`]; tests plug in deterministic sources through the same
//! trait.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::ExposeSecret;
use zeroize::Zeroize;

use crate::error::{MnemonicError, MnemonicResult};
use crate::secure::{IntoSecret, SecretBytes};
use crate::strength::Strength;

/// Source of cryptographically secure random bytes
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::RandomSourceFailure` if the source cannot
    /// produce bytes. Implementations must not fall back to a weaker source.
    fn fill(&mut self, dest: &mut [u8]) -> MnemonicResult<()>;
}

/// The operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> MnemonicResult<()> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Adapter exposing any `rand` cryptographic RNG as a [`RandomSource`]
///
/// Handy for reproducible runs with a seeded generator.
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl<R: RngCore + CryptoRng> RandomSource for RngSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> MnemonicResult<()> {
        self.0.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Validated BIP-39 entropy
///
/// Always 16, 20, 24, 28 or 32 bytes. The bytes are zeroized on drop and
/// hidden from `Debug`.
pub struct Entropy {
    bytes: SecretBytes,
    strength: Strength,
}

impl Entropy {
    /// Copy `bytes` into a new entropy value.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidEntropySize` for any length other than
    /// 16, 20, 24, 28 or 32 bytes.
    pub fn new(bytes: &[u8]) -> MnemonicResult<Self> {
        let strength = Strength::from_entropy_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec().into_secret(),
            strength,
        })
    }

    /// Take ownership of `bytes`. On error the vector is zeroized.
    pub fn from_vec(mut bytes: Vec<u8>) -> MnemonicResult<Self> {
        match Strength::from_entropy_len(bytes.len()) {
            Ok(strength) => Ok(Self {
                bytes: bytes.into_secret(),
                strength,
            }),
            Err(err) => {
                bytes.zeroize();
                Err(err)
            }
        }
    }

    /// Parse hex-encoded entropy.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidEncoding` for malformed hex, or
    /// `MnemonicError::InvalidEntropySize` for a wrong length.
    pub fn from_hex(hex_str: &str) -> MnemonicResult<Self> {
        let bytes = hex::decode(hex_str.trim())
            .map_err(|e| MnemonicError::InvalidEncoding(format!("invalid hex: {}", e)))?;
        Self::from_vec(bytes)
    }

    /// Draw fresh entropy of the given strength from `source`.
    pub fn generate_with<S>(source: &mut S, strength: Strength) -> MnemonicResult<Self>
    where
        S: RandomSource + ?Sized,
    {
        let mut bytes = vec![0u8; strength.entropy_bytes()];
        if let Err(err) = source.fill(&mut bytes) {
            bytes.zeroize();
            return Err(err);
        }
        Self::from_vec(bytes)
    }

    /// Raw entropy bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.expose_secret()
    }

    /// Strength of this entropy
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Always false; entropy is never empty
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Lowercase hex encoding of the bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Entropy {}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.strength.entropy_bits())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Generate `bits` of entropy from the operating system CSPRNG.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidEntropySize` if `bits` is not one of
/// 128, 160, 192, 224 or 256, or `MnemonicError::RandomSourceFailure` if the
/// OS source is unavailable.
pub fn generate_entropy(bits: usize) -> MnemonicResult<Entropy> {
    generate_entropy_with(&mut OsRandom, bits)
}

/// Generate `bits` of entropy from `source`.
pub fn generate_entropy_with<S>(source: &mut S, bits: usize) -> MnemonicResult<Entropy>
where
    S: RandomSource + ?Sized,
{
    let strength = Strength::from_bits(bits)?;
    Entropy::generate_with(source, strength)
}
