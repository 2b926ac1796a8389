//! Error types for the Zienda plugin.
//!
//! This module defines the centralized error type [`ZiendaError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Zienda plugin operations.
///
/// This enum consolidates the error conditions that can occur while talking to the
/// company-search backend, from transport-level failures to malformed response
/// bodies and configuration issues. None of these reach the user directly: the
/// coordinator converts them into canned per-mode failure messages and the raw
/// cause is only written to the trace log.
///
/// # Examples
///
/// ```
/// use zienda::domain::ZiendaError;
///
/// fn reject_base_url() -> Result<(), ZiendaError> {
///     Err(ZiendaError::Config("backend url is not absolute".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZiendaError {
    /// The backend answered outside the 2xx range, or not at all.
    ///
    /// The string carries the status line or transport detail for the trace
    /// log. Status 0 is the host's report of a network-level failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// A response body did not match the expected wire shape.
    ///
    /// Wraps the underlying `serde_json` error using `#[from]`. Treated the
    /// same as a transport failure at the coordinator boundary.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configured value (most importantly the backend base URL)
    /// is malformed. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zienda operations.
///
/// This is a type alias for `std::result::Result<T, ZiendaError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use zienda::domain::Result;
///
/// fn decode_payload() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZiendaError>;
