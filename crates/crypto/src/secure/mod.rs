//! Secure memory handling for mnemonic material
//!
//! Entropy, phrases and seeds are all enough to rebuild a wallet, so they
//! live in containers that:
//! - zero their memory on drop via `zeroize`
//! - print `[REDACTED]` from `Debug`
//! - only hand out the secret through an explicit `expose_secret()` call

mod secret;

pub use secret::{IntoSecret, SecretArray, SecretBytes, SecretString};
