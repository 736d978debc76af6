//! Runtime configuration.
//!
//! [`Config`] is the canonical representation of all runtime options,
//! resolved from the CLI and environment. Tests construct it directly
//! without CLI parsing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};

use crate::cli::Cli;
use crate::theme::ThemePreset;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the employee service.
    pub api_url: String,
    /// Bearer token for the service.
    pub token: String,
    /// Theme preset to use.
    pub theme_preset: ThemePreset,
    /// Whether to use the alternate screen buffer.
    pub alt_screen: bool,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Config {
    /// Resolve the configuration from parsed CLI arguments.
    ///
    /// The token comes from `--token`, `--token-file`, or the environment
    /// (via clap's env fallbacks); a missing token is an error because
    /// every service call requires one.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let token = match (cli.token, cli.token_file) {
            (Some(token), _) => token,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("reading token file {}", path.display()))?
                .trim()
                .to_string(),
            (None, None) => bail!(
                "no API token provided; pass --token, --token-file, or set STAFFDECK_TOKEN"
            ),
        };
        if token.is_empty() {
            bail!("the API token is empty");
        }

        let theme_preset = match cli.theme.to_lowercase().as_str() {
            "dark" => ThemePreset::Dark,
            "light" => ThemePreset::Light,
            other => bail!("unknown theme {other:?} (expected dark or light)"),
        };

        Ok(Self {
            api_url: cli.api_url,
            token,
            theme_preset,
            alt_screen: !cli.no_alt_screen,
            log_file: cli.log_file,
            verbosity: cli.verbose,
        })
    }

    /// A configuration for tests: localhost service, dark theme, no logs.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            api_url: "http://localhost:8080/api".to_string(),
            token: "test-token".to_string(),
            theme_preset: ThemePreset::Dark,
            alt_screen: false,
            log_file: None,
            verbosity: 0,
        }
    }
}
