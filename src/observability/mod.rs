//! File-based OpenTelemetry tracing.
//!
//! Spans emitted through the `tracing` macros are exported as OTLP JSON
//! lines to a file, since a sandboxed Zellij plugin has no network
//! collector to talk to. The file can be inspected offline or fed to any
//! OTLP-aware analysis tool.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Traces land in `~/.local/share/zellij/zienda/zienda-otlp.json`, rotating
//! at 10MB with three backups kept. The trace level comes from the
//! `trace_level` plugin configuration option and defaults to `"info"`.
//!
//! Initialize early in the plugin lifecycle:
//!
//! ```rust
//! use zienda::observability::init_tracing;
//! use zienda::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: tracing initialization and subscriber setup
//! - [`tracer`]: tracer provider wired to the file exporter
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: rotating file writer with size-based rotation

mod file_writer;
mod span_formatter;
mod tracer;
mod init;

pub use init::init_tracing;
