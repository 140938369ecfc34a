use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initialize tracing-subscriber with a stderr console layer
///
/// Filter level comes from `RUST_LOG`, defaulting to info so skip notices
/// and record counts show up without configuration.
pub fn init_tracing_subscriber() {
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
