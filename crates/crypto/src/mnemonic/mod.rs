//! BIP-39 mnemonic encoding, decoding and validation
//!
//! ```text
//! entropy ‖ SHA-256(entropy)[..ENT/32 bits]  →  11-bit groups  →  words
//! ```
//!
//! [`encode`] and [`decode`] work against an explicit [`Wordlist`](crate::wordlist::Wordlist);
//! [`Mnemonic`] wraps a verified phrase for callers that want a typed value.
//!
//! # Example
//!
//! ```rust
//! use moke_crypto::mnemonic::{decode, encode, validate};
//! use moke_crypto::wordlist::{Language, WordlistRegistry};
//!
//! let registry = WordlistRegistry::builtin();
//! let english = registry.wordlist(Language::English).unwrap();
//!
//! let phrase = encode(&[0x80; 16], english).unwrap();
//! assert!(validate(&phrase, english).valid);
//!
//! let decoded = decode(&phrase, english).unwrap();
//! assert_eq!(decoded.entropy.as_bytes(), &[0x80; 16]);
//! ```

mod bits;
mod decode;
mod encode;
mod phrase;
mod validate;

pub use decode::{decode, decode_verified, Decoded};
pub use encode::{encode, entropy_to_indices};
pub use phrase::Mnemonic;
pub use validate::{validate, Validation};
