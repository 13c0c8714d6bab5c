use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing subscriber once per process.
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used as the filter
/// directive, and `lapwatch=info` if that does not parse.
pub fn init_logging(fallback: &str) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new("lapwatch=info"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    });
}
