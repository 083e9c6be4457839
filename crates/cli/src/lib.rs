//! moke - a mnemonic playground for BIP-39
//!
//! Library half of the `moke` binary: configuration and the command
//! implementations. All BIP-39 logic lives in `moke-crypto`.

pub mod commands;
pub mod config;

pub use commands::{execute, Commands, ConfigCommands, Settings};
pub use commands::version::VERSION;
pub use config::{
    default_home_dir, resolve_config_path, MokeConfig, CONFIG_FILENAME, DEFAULT_HOME_DIR,
    EXIT_CONFIG_ERROR, MOKE_ENTROPY_BITS_ENV, MOKE_HOME_ENV, MOKE_LANGUAGE_ENV,
};
