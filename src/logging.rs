//! Tracing setup for host applications.
//!
//! Library code only emits through the `tracing` macros; an embedding
//! application (or a test) calls `init` once to get formatted output
//! filtered by `MOCKJ_LOG`.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub fn init() {
    let filter = EnvFilter::try_from_env("MOCKJ_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&Config::global().log_level));

    // try_init: a second call (e.g. from parallel test binaries) is a no-op
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
