//! Structured logging via the `tracing` ecosystem.
//!
//! Console output with uptime timestamps and module paths, filterable
//! through `RUST_LOG` or the config's `debug.log_level` setting.

use helios_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Initialize the tracing subscriber.
///
/// Filter precedence: `RUST_LOG` environment variable, then the config's
/// `debug.log_level` if non-empty, then `info` with wgpu/naga noise reduced
/// to `warn`.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = config
        .map(|config| config.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// An `EnvFilter` with the default filter string: `info` everywhere, wgpu
/// and naga reduced to `warn`.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
