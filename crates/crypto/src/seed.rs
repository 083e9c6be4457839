//! Seed derivation (PBKDF2-HMAC-SHA512)
//!
//! The seed is derived from the mnemonic *text*; it does not require the
//! mnemonic to pass validation. Both inputs are NFKD-normalized first.

use pbkdf2::pbkdf2_hmac;
use rayon::prelude::*;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, Zeroizing};

use crate::error::MnemonicResult;
use crate::secure::SecretArray;

/// Length of a derived seed in bytes
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Prefix prepended to the passphrase to form the salt
pub const SALT_PREFIX: &str = "mnemonic";

/// 64-byte binary seed
///
/// Zeroized on drop and hidden from `Debug`.
pub struct Seed(SecretArray<SEED_LEN>);

impl Seed {
    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        self.0.expose_secret()
    }

    /// Lowercase hex encoding of the seed
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Seed {}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Seed").field(&"[REDACTED]").finish()
    }
}

/// Derive the seed for `mnemonic` protected by `passphrase`.
///
/// Pass `""` for no passphrase.
///
/// # Example
///
/// ```rust
/// use moke_crypto::seed::derive_seed;
///
/// let seed = derive_seed("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about", "");
/// assert!(seed.to_hex().starts_with("5eb00bbd"));
/// ```
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let password = Zeroizing::new(mnemonic.nfkd().collect::<String>());
    let mut salt = Zeroizing::new(String::from(SALT_PREFIX));
    salt.extend(passphrase.nfkd());

    let mut out = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut out);

    let seed = Seed(SecretArray::new(out));
    out.zeroize();
    seed
}

/// Derive a seed from raw bytes that must be UTF-8.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidEncoding` if either input is not UTF-8.
pub fn derive_seed_from_bytes(mnemonic: &[u8], passphrase: &[u8]) -> MnemonicResult<Seed> {
    let mnemonic = std::str::from_utf8(mnemonic)?;
    let passphrase = std::str::from_utf8(passphrase)?;
    Ok(derive_seed(mnemonic, passphrase))
}

/// Derive many seeds in parallel.
///
/// Results come back in the order of `jobs`, each identical to what
/// [`derive_seed`] returns for the same pair.
pub fn derive_seeds<M, P>(jobs: &[(M, P)]) -> Vec<Seed>
where
    M: AsRef<str> + Sync,
    P: AsRef<str> + Sync,
{
    jobs.par_iter()
        .map(|(mnemonic, passphrase)| derive_seed(mnemonic.as_ref(), passphrase.as_ref()))
        .collect()
}
