//! Domain layer for the Zienda plugin.
//!
//! This module contains the core domain types for company lookup, independent
//! of Zellij-specific APIs or infrastructure concerns: the result shapes both
//! search modes produce and the display-oriented URL split applied to name
//! results.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`display_url`]: Total URL-to-`{domain, path}` splitting
//! - [`search`]: Name-search result model and category grouping
//! - [`vat`]: VAT validation record and query normalization
//!
//! # Examples
//!
//! ```
//! use zienda::domain::DisplayUrl;
//!
//! let display = DisplayUrl::from_raw("https://www.example.com/team");
//! assert_eq!(display.domain, "example.com");
//! assert_eq!(display.path, "/team");
//! ```

pub mod display_url;
pub mod error;
pub mod search;
pub mod vat;

pub use display_url::DisplayUrl;
pub use error::{Result, ZiendaError};
pub use search::{CategoryGroup, NameSearchResult};
pub use vat::{normalize_vat_query, VatRecord};
