use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default level for the interactive shell. Anything chattier would
/// interleave with the prompts.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(log_level: &str) -> String {
    format!("{},reqwest=warn,hyper=warn,hyper_util=warn", log_level)
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Log Level**: `RUST_LOG` if set, else `LOG_LEVEL` (default: "warn")
/// - **Filtering**: HTTP client internals are held at warn
/// - **Format**: Compact, with module targets
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .try_init();
}
