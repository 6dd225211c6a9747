use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_ENV: &str = "DJANGO_SETUP_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr diagnostics subscriber.
///
/// Progress and results go to stdout through the reporter; this only carries
/// `tracing` events. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
