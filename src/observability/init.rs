//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Spans pass through an [`EnvFilter`] built from `config.trace_level`
/// (default `"info"`), are converted by `tracing-opentelemetry`, and end up
/// in `~/.local/share/zellij/zienda/zienda-otlp.json` via the custom file
/// exporter.
///
/// The data directory is created on the spot. If that fails, or a global
/// subscriber is already installed, the function returns without
/// installing anything: tracing is optional and must never take the plugin
/// down with it.
///
/// # Example
///
/// ```rust
/// use zienda::observability::init_tracing;
/// use zienda::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "zienda",
    )]);

    let trace_file = data_dir.join("zienda-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("zienda");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
