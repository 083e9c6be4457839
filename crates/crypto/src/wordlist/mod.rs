//! BIP-39 wordlists
//!
//! Ten standard lists are bundled with the crate as plain UTF-8 text, one
//! word per line. They are parsed into a [`WordlistRegistry`] the first time
//! [`WordlistRegistry::builtin`] is called and never mutated afterwards.
//!
//! Per-language differences (currently only the word separator; Japanese
//! joins words with an ideographic space) are carried by [`LanguageConfig`].

mod language;
mod list;
mod registry;

pub use language::{Language, LanguageConfig};
pub use list::{Wordlist, WORDLIST_SIZE};
pub use registry::{RegistryBuilder, WordlistRegistry};
