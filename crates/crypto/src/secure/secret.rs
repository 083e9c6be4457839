//! Secret wrapper utilities
//!
//! Type aliases and small helpers around the `secrecy` crate.

use secrecy::{SecretBox, SecretString as SecrecySecretString};
use zeroize::Zeroize;

/// A secret byte vector that is zeroized on drop.
///
/// Used for variable-length material such as decoded entropy.
///
/// # Example
///
/// ```rust
/// use moke_crypto::secure::SecretBytes;
/// use secrecy::ExposeSecret;
///
/// let secret = SecretBytes::new(Box::new(vec![1, 2, 3, 4]));
/// assert_eq!(secret.expose_secret(), &vec![1, 2, 3, 4]);
/// ```
pub type SecretBytes = SecretBox<Vec<u8>>;

/// A secret string that is zeroized on drop.
///
/// Used for mnemonic phrases and passphrases.
pub type SecretString = SecrecySecretString;

/// A fixed-size secret byte array, zeroized on drop.
///
/// Seeds have a fixed 64-byte length and are stored in one of these.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecretArray<const N: usize> {
    inner: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    /// Create a new secret array from bytes.
    pub fn new(bytes: [u8; N]) -> Self {
        Self { inner: bytes }
    }

    /// Expose the secret bytes.
    ///
    /// The returned reference should not be stored.
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.inner
    }
}

impl<const N: usize> std::fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArray")
            .field("length", &N)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

// Clone is deliberately not implemented; copies must go through expose_secret().

/// Extension trait for creating secret values.
pub trait IntoSecret {
    /// The secret type this converts into.
    type Secret;

    /// Convert into a secret value.
    fn into_secret(self) -> Self::Secret;
}

impl IntoSecret for String {
    type Secret = SecretString;

    fn into_secret(self) -> Self::Secret {
        self.into()
    }
}

impl IntoSecret for Vec<u8> {
    type Secret = SecretBytes;

    fn into_secret(self) -> Self::Secret {
        SecretBox::new(Box::new(self))
    }
}
