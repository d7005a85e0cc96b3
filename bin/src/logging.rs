//! Tracing subscriber setup.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub(crate) fn init(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level(verbose, quiet)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")
}

const fn level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level(0, false), "warn");
        assert_eq!(level(2, false), "debug");
        assert_eq!(level(7, false), "trace");
        assert_eq!(level(3, true), "error");
    }

    #[test]
    fn test_second_init_reports_error() {
        init(0, true).ok();
        assert!(init(0, true).is_err());
    }
}
