// crates/verdict-cli/src/config.rs
//
// Runtime configuration for the Verdict CLI.
// Loaded from a TOML file or populated with sensible defaults.

use std::fs;

use serde::Deserialize;

use verdict_slashing::Params;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Directory holding the RocksDB state.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Log level used when `RUST_LOG` is unset: "trace", "debug", "info",
    /// "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Gas limit applied to each command's state transition. 0 disables
    /// the limit.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,

    /// Genesis params written by `verdict init`.
    #[serde(default)]
    pub params: Params,
}

fn default_data_dir() -> String {
    "~/.verdict/data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_gas_limit() -> u64 {
    10_000_000
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            gas_limit: default_gas_limit(),
            params: Params::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: CliConfig = toml::from_str(contents)?;
        Ok(config)
    }
}

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::{Coin, Ratio};

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config.data_dir, "~/.verdict/data");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.gas_limit, 10_000_000);
        assert_eq!(config.params, Params::default());
    }

    #[test]
    fn test_partial_params_table() {
        let config = CliConfig::parse(
            r#"
            data_dir = "/var/lib/verdict"
            gas_limit = 0

            [params]
            min_slash_count = 3
            slash_min_stake = 10
            curator_share = "0.1"
            slash_admins = ["0x0101010101010101010101010101010101010101010101010101010101010101"]
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, "/var/lib/verdict");
        assert_eq!(config.gas_limit, 0);
        assert_eq!(config.params.min_slash_count, 3);
        assert_eq!(config.params.slash_min_stake, Coin::new(10));
        assert_eq!(config.params.curator_share, Ratio::from_percent(10));
        assert_eq!(config.params.slash_admins.len(), 1);
        assert_eq!(config.params.slash_magnitude, 3);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(CliConfig::parse("gas_limit = \"lots\"").is_err());
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/tmp/verdict"), "/tmp/verdict");
    }
}
