//! Command-line interface for staffdeck.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Run against a local service
//! staffdeck --api-url http://localhost:8080/api --token-file ~/.staffdeck-token
//!
//! # Token from the environment, light theme, verbose logs to a file
//! STAFFDECK_TOKEN=... staffdeck --theme light -vv --log-file /tmp/staffdeck.log
//! ```

use std::path::PathBuf;

use clap::Parser;

/// staffdeck - terminal client for the employee-management service.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "staffdeck",
    author,
    version,
    about = "Keyboard-driven employee roster for your terminal"
)]
pub struct Cli {
    /// Base URL of the employee service API
    #[arg(long, env = "STAFFDECK_API_URL", default_value = "http://localhost:8080/api")]
    pub api_url: String,

    /// Bearer token for the employee service
    ///
    /// Prefer `--token-file` or the environment variable so the token does
    /// not end up in shell history.
    #[arg(long, env = "STAFFDECK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Read the bearer token from a file
    #[arg(long, env = "STAFFDECK_TOKEN_FILE", conflicts_with = "token")]
    pub token_file: Option<PathBuf>,

    /// Theme to use for styling (dark, light)
    #[arg(long, short = 't', default_value = "dark", env = "STAFFDECK_THEME")]
    pub theme: String,

    /// Run in the main terminal buffer instead of the alternate screen
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Write logs to this file
    ///
    /// Without it, logs are discarded: the TUI owns the terminal.
    #[arg(long, env = "STAFFDECK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["staffdeck"]);
        assert_eq!(cli.api_url, "http://localhost:8080/api");
        assert_eq!(cli.theme, "dark");
        assert!(!cli.no_alt_screen);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "staffdeck",
            "--api-url",
            "https://hr.example.com/api",
            "--token",
            "sekrit",
            "--theme",
            "light",
            "--no-alt-screen",
            "-vv",
        ]);
        assert_eq!(cli.api_url, "https://hr.example.com/api");
        assert_eq!(cli.token.as_deref(), Some("sekrit"));
        assert_eq!(cli.theme, "light");
        assert!(cli.no_alt_screen);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn token_and_token_file_conflict() {
        let result = Cli::try_parse_from([
            "staffdeck",
            "--token",
            "a",
            "--token-file",
            "/tmp/token",
        ]);
        assert!(result.is_err());
    }
}
