//! Wire protocol for the two backend endpoints.
//!
//! Response shapes:
//!
//! - `GET /api/search?query=<q>&max_results=<n>` returns a JSON object with
//!   a `results` map of category keys to URL lists and a `total` count
//! - `GET /api/vat/<number>` returns a single JSON validation record
//!
//! Decoding is strict about the documented shape and tolerant of extras:
//! unknown fields are ignored, optional fields default to absent.

use crate::domain::{NameSearchResult, Result, VatRecord, ZiendaError};

/// Request-context key carrying the dispatch sequence number.
pub const CONTEXT_SEQ: &str = "request_seq";

/// Request-context key carrying the mode tag.
pub const CONTEXT_MODE: &str = "mode";

/// Rejects non-2xx statuses before any decoding happens.
///
/// Status 0 means the request never produced an HTTP response at all
/// (connection refused, DNS failure, TLS error) and fails the same way.
///
/// # Errors
///
/// Returns [`ZiendaError::Backend`] for any status outside 200..=299.
pub fn ensure_success_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ZiendaError::Backend(format!("HTTP status {status}")))
}

/// Decodes a name-search response body.
///
/// # Errors
///
/// Returns [`ZiendaError::Decode`] when the body is not the documented
/// JSON shape.
pub fn decode_search_response(body: &[u8]) -> Result<NameSearchResult> {
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a VAT validation response body.
///
/// # Errors
///
/// Returns [`ZiendaError::Decode`] when the body is not the documented
/// JSON shape.
pub fn decode_vat_record(body: &[u8]) -> Result<VatRecord> {
    Ok(serde_json::from_slice(body)?)
}
