//! Version reporting
//!
//! The version string is `<semver>-<date>-<hash>`. Date and hash are baked in
//! at build time through `MOKE_BUILD_DATE` and `MOKE_GIT_HASH`.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Build date used when `MOKE_BUILD_DATE` is not set at build time
pub const DEFAULT_BUILD_DATE: &str = "2020-01-01";

/// Commit hash used when `MOKE_GIT_HASH` is not set at build time
pub const DEFAULT_GIT_HASH: &str = "0000000";

/// Full version string, e.g. `0.1.0-2020-01-01-0000000`
pub static VERSION: Lazy<String> = Lazy::new(|| {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("MOKE_BUILD_DATE").unwrap_or(DEFAULT_BUILD_DATE),
        option_env!("MOKE_GIT_HASH").unwrap_or(DEFAULT_GIT_HASH),
    )
});

/// Join version components as `<semver>-<date>-<hash>`
pub fn format_version(semver: &str, date: &str, hash: &str) -> String {
    format!("{}-{}-{}", semver, date, hash)
}

#[derive(Serialize)]
struct VersionInfo {
    name: String,
    version: String,
    semver: String,
    build_date: String,
    git_commit: String,
    rust_version: String,
}

impl VersionInfo {
    fn new() -> Self {
        Self {
            name: "moke".to_string(),
            version: VERSION.clone(),
            semver: env!("CARGO_PKG_VERSION").to_string(),
            build_date: option_env!("MOKE_BUILD_DATE")
                .unwrap_or(DEFAULT_BUILD_DATE)
                .to_string(),
            git_commit: option_env!("MOKE_GIT_HASH")
                .unwrap_or(DEFAULT_GIT_HASH)
                .to_string(),
            rust_version: option_env!("CARGO_PKG_RUST_VERSION")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

/// Execute the version command
pub fn execute(output: &str) -> Result<()> {
    let version_info = VersionInfo::new();

    match output {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&version_info)?);
        }
        _ => {
            println!("{} {}", version_info.name, version_info.version);
            println!("git commit: {}", version_info.git_commit);
            println!("build date: {}", version_info.build_date);
            println!("rust version: {}", version_info.rust_version);
        }
    }

    Ok(())
}
