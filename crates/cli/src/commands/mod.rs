//! Subcommands of the `moke` binary
//!
//! - `generate`: Create a fresh mnemonic from OS randomness
//! - `from-entropy` / `to-entropy`: Convert between hex entropy and phrases
//! - `validate`: Check word count, words and checksum of a phrase
//! - `seed`: Derive the 64-byte BIP-39 seed
//! - `languages`, `words`, `detect`: Explore the bundled wordlists
//! - `config`: Manage the config file
//!
//! Phrases are passed as trailing arguments, quoted or not. They are never
//! logged.

pub mod common;
pub mod config;
pub mod convert;
pub mod generate;
pub mod seed;
pub mod validate;
pub mod version;
pub mod wordlist;

use anyhow::Result;
use clap::Subcommand;
use moke_crypto::Language;
use std::path::PathBuf;

use crate::config::MokeConfig;

/// Resolved context shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    /// Home directory
    pub home: PathBuf,
    /// Config file location, whether or not it exists
    pub config_path: PathBuf,
    /// Effective configuration
    pub config: MokeConfig,
}

impl Settings {
    /// `--language` if given, else the configured language
    pub fn language(&self, flag: Option<Language>) -> Language {
        flag.unwrap_or(self.config.language)
    }
}

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new random mnemonic phrase
    Generate {
        /// Entropy size in bits (128|160|192|224|256)
        #[arg(short, long)]
        bits: Option<usize>,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,

        /// Also print the entropy as hex
        #[arg(long, default_value = "false")]
        show_entropy: bool,
    },

    /// Encode hex entropy as a mnemonic phrase
    #[command(name = "from-entropy")]
    FromEntropy {
        /// Entropy as hex (16, 20, 24, 28 or 32 bytes)
        hex: String,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Decode a mnemonic phrase to hex entropy
    #[command(name = "to-entropy")]
    ToEntropy {
        /// Mnemonic words
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Check whether a mnemonic phrase is valid
    Validate {
        /// Mnemonic words
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Derive the 64-byte seed of a mnemonic phrase
    Seed {
        /// Mnemonic words
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Optional BIP-39 passphrase
        #[arg(long, conflicts_with = "passphrase_file")]
        passphrase: Option<String>,

        /// Read the passphrase from a file (first line)
        #[arg(long)]
        passphrase_file: Option<PathBuf>,

        /// Refuse phrases that do not validate
        #[arg(long, default_value = "false")]
        strict: bool,

        /// Wordlist language checked by --strict
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// List the bundled wordlist languages
    Languages,

    /// List words of a wordlist starting with a prefix
    Words {
        /// Prefix to complete
        prefix: String,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Report which wordlists contain every word of a phrase
    Detect {
        /// Mnemonic words
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },

    /// Utilities for managing the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print the application binary version information
    Version {
        /// Output format (text|json)
        #[arg(long, default_value = "text")]
        output: String,
    },
}

/// `moke config` subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, default_value = "false")]
        overwrite: bool,
    },

    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,
}

/// Run `command`
pub fn execute(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Generate {
            bits,
            language,
            show_entropy,
        } => generate::execute(settings, bits, language, show_entropy),

        Commands::FromEntropy { hex, language } => {
            convert::from_entropy(&hex, settings.language(language))
        }

        Commands::ToEntropy { phrase, language } => {
            convert::to_entropy(phrase, settings.language(language))
        }

        Commands::Validate { phrase, language } => {
            validate::execute(phrase, settings.language(language))
        }

        Commands::Seed {
            phrase,
            passphrase,
            passphrase_file,
            strict,
            language,
        } => {
            let strict = strict.then(|| settings.language(language));
            seed::execute(phrase, passphrase, passphrase_file.as_deref(), strict)
        }

        Commands::Languages => wordlist::languages(),

        Commands::Words { prefix, language } => {
            wordlist::words(&prefix, settings.language(language))
        }

        Commands::Detect { phrase } => wordlist::detect(phrase),

        Commands::Config { command } => config::execute(settings, command),

        Commands::Version { output } => version::execute(&output),
    }
}
