//! Diagnostic logging
//!
//! `JSM_LOG` takes an `EnvFilter` directive (`debug`, `jsm=trace`, ...). Without it,
//! `--verbose` shows debug events and otherwise only warnings are printed. Logs go to
//! stderr so they never mix with a child's stdout or `--dry-run` output.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "JSM_LOG";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    })
}

pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
