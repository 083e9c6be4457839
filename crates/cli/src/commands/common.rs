//! Common utilities for CLI commands

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use zeroize::{Zeroize, Zeroizing};

/// Join phrase arguments into one phrase, wiping the originals.
///
/// Accepts the whole phrase as one quoted argument or one word per argument.
pub fn join_phrase(mut parts: Vec<String>) -> Zeroizing<String> {
    let phrase = Zeroizing::new(parts.join(" "));
    for part in parts.iter_mut() {
        part.zeroize();
    }
    phrase
}

/// Read a passphrase from the first line of a file
///
/// Only the line terminator is stripped; other whitespace is part of the
/// passphrase.
pub fn read_passphrase_from_file(path: &Path) -> Result<Zeroizing<String>> {
    let content = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read passphrase file: {}", path.display()))?,
    );

    let line = content.lines().next().unwrap_or("");
    if line.is_empty() {
        return Err(anyhow!("Passphrase file is empty"));
    }

    Ok(Zeroizing::new(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_join_phrase() {
        let phrase = join_phrase(vec!["abandon".into(), "ability".into()]);
        assert_eq!(phrase.as_str(), "abandon ability");

        let phrase = join_phrase(vec!["abandon ability".into()]);
        assert_eq!(phrase.as_str(), "abandon ability");
    }

    #[test]
    fn test_read_passphrase_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, " spaced secret ").unwrap();
        writeln!(file, "ignored").unwrap();

        let passphrase = read_passphrase_from_file(file.path()).unwrap();
        assert_eq!(passphrase.as_str(), " spaced secret ");
    }

    #[test]
    fn test_read_passphrase_crlf() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "TREZOR\r\n").unwrap();

        let passphrase = read_passphrase_from_file(file.path()).unwrap();
        assert_eq!(passphrase.as_str(), "TREZOR");
    }

    #[test]
    fn test_empty_passphrase_file() {
        let file = NamedTempFile::new().unwrap();
        let err = read_passphrase_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_missing_passphrase_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_passphrase_from_file(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Failed to read passphrase file"));
    }
}
