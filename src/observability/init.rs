//! Tracing subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level` (default `"info"`). Log lines go to stderr so they
/// never interleave with the rendered roster on stdout.
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use company_roster::observability::init_tracing;
/// use company_roster::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    if subscriber.try_init().is_ok() {
        tracing::debug!(level, "tracing initialized");
    }
}
