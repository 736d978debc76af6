//! Log initialization.
//!
//! The TUI owns the terminal, so logs never go to stdout/stderr: they are
//! written to the configured file, or discarded. `RUST_LOG` overrides the
//! verbosity-derived filter.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Default filter directive for a verbosity level.
#[must_use]
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber according to the configuration.
///
/// Call once, before the program loop starts.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(config.verbosity)));

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_scales_with_verbosity() {
        assert_eq!(filter_for(0), "warn");
        assert_eq!(filter_for(1), "info");
        assert_eq!(filter_for(2), "debug");
        assert_eq!(filter_for(3), "trace");
        assert_eq!(filter_for(200), "trace");
    }

    #[test]
    fn filters_parse_as_env_directives() {
        for level in 0..4 {
            assert!(EnvFilter::try_new(filter_for(level)).is_ok());
        }
    }
}
