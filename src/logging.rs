use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub json_format: bool,
    pub default_filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: "info,social_analyze=debug".to_string(),
        }
    }
}

/// Installs the global subscriber. Log lines go to stderr so the console
/// summary on stdout stays readable. `RUST_LOG` overrides the default filter.
pub fn init_tracing(config: TracingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init();
    }

    tracing::debug!(json_format = config.json_format, "Tracing initialized");
}
