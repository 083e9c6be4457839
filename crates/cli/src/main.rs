//! moke CLI
//!
//! A mnemonic playground for BIP-39.

use anyhow::Result;
use clap::Parser;
use moke::{
    default_home_dir, execute, resolve_config_path, Commands, ConfigCommands, MokeConfig,
    Settings, EXIT_CONFIG_ERROR, VERSION,
};
use moke_crypto::MnemonicError;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Moke is a mnemonic joke - a mnemonic playground for BIP-39
#[derive(Parser)]
#[command(name = "moke")]
#[command(author = "Moke Contributors")]
#[command(version = VERSION.as_str())]
#[command(about = "Moke is a mnemonic joke - a mnemonic playground for BIP-39", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Directory holding the config file
    #[arg(long, global = true, default_value_os_t = default_home_dir())]
    home: PathBuf,

    /// Path to configuration file (overrides --home)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// The logging level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// The logging format (json|plain)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Disable colored logs
    #[arg(long, global = true, default_value = "false")]
    log_no_color: bool,

    /// Print out full error chain on errors
    #[arg(long, global = true, default_value = "false")]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    if wants_short_version(std::env::args_os().skip(1)) {
        println!("moke {}", VERSION.as_str());
        return Ok(());
    }

    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    // Initialize tracing; flags win over the config file
    init_tracing(
        cli.log_level.as_deref().unwrap_or(&settings.config.log_level),
        cli.log_format.as_deref().unwrap_or(&settings.config.log_format),
        cli.log_no_color,
    );
    debug!(config = %settings.config_path.display(), "Loaded configuration");

    if let Err(e) = execute(cli.command, &settings) {
        if cli.trace {
            eprintln!("Error: {:?}", e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

/// Whether `-v` appears among `args` before a `--` terminator
///
/// `-v` prints the version like clap's `-V`/`--version`, which are accepted
/// in any position.
fn wants_short_version<I>(args: I) -> bool
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .take_while(|arg| arg != "--")
        .any(|arg| arg == "-v")
}

/// Resolve home, config file and environment overrides
fn load_settings(cli: &Cli) -> Result<Settings> {
    let config_path = resolve_config_path(&cli.home, cli.config.as_deref());

    // `config init` must be able to create or replace a missing or broken file
    let config = if !reads_config(&cli.command) {
        MokeConfig::default()
    } else {
        let mut config = if cli.config.is_some() {
            // An explicit --config must exist
            MokeConfig::load(&config_path)?
        } else {
            MokeConfig::load_or_default(&config_path)?
        };
        config.apply_env_overrides()?;
        config
    };

    Ok(Settings {
        home: cli.home.clone(),
        config_path,
        config,
    })
}

/// Whether `command` depends on the contents of the config file
fn reads_config(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Config {
            command: ConfigCommands::Init { .. } | ConfigCommands::Path,
        }
    )
}

/// Exit code for a failed command
///
/// Mnemonic errors anywhere in the chain map through
/// [`MnemonicError::exit_code`]; anything else exits with 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MnemonicError>())
        .map_or(1, MnemonicError::exit_code)
}

fn init_tracing(log_level: &str, log_format: &str, no_color: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // stdout carries command output, so logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(!no_color);

    match log_format {
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_short_version_in_any_position() {
        assert!(wants_short_version(args(&["-v"])));
        assert!(wants_short_version(args(&["--home", "/tmp/x", "-v"])));
        assert!(wants_short_version(args(&["generate", "-v"])));
    }

    #[test]
    fn test_short_version_not_after_terminator() {
        assert!(!wants_short_version(args(&[])));
        assert!(!wants_short_version(args(&["generate", "--bits", "256"])));
        assert!(!wants_short_version(args(&["seed", "--", "-v"])));
    }

    #[test]
    fn test_config_init_and_path_skip_loading() {
        let init = Commands::Config {
            command: ConfigCommands::Init { overwrite: true },
        };
        let path = Commands::Config {
            command: ConfigCommands::Path,
        };
        let show = Commands::Config {
            command: ConfigCommands::Show,
        };

        assert!(!reads_config(&init));
        assert!(!reads_config(&path));
        assert!(reads_config(&show));
        assert!(reads_config(&Commands::Languages));
    }
}
