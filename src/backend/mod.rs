//! Backend access layer: endpoint construction and wire decoding.
//!
//! This module owns everything that touches the company-lookup backend's
//! HTTP surface. [`endpoints`] builds request URLs with all user input
//! encoded into safe components; [`protocol`] turns raw response bytes back
//! into domain values.
//!
//! The actual HTTP dispatch lives in the plugin runtime (main.rs), which is
//! the only place allowed to call host functions. Everything here is plain
//! data in, plain data out, and runs identically under native tests.

pub mod endpoints;
pub mod protocol;

pub use endpoints::BackendEndpoints;
pub use protocol::{
    decode_search_response, decode_vat_record, ensure_success_status, CONTEXT_MODE, CONTEXT_SEQ,
};
