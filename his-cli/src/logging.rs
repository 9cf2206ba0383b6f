use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never mix with the summary on stdout.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level for this crate and
/// `his_core`, starting at `warn`. Level and span colors are only written when `ansi` is set.
pub fn enable_logging(verbosity: u8, ansi: bool) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::new(default_directives(verbosity)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("unable to set up logging: {e}"))
}

fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("{}={level},his_core={level}", env!("CARGO_CRATE_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directives(0), "his=warn,his_core=warn");
        assert_eq!(default_directives(2), "his=debug,his_core=debug");
        assert_eq!(default_directives(9), "his=trace,his_core=trace");
    }
}
