use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hf_fetch=info";

/// Log to stderr so stdout only carries the usage and result lines.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init: a second call (tests) must not panic.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
