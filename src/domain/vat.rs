//! VAT validation record and query normalization.
//!
//! VAT lookups answer with a flat validation record. The registry behind the
//! backend does not disclose company data for every member state; undisclosed
//! fields arrive empty or as the `---` placeholder, and the display accessors
//! below filter those out.

use serde::Deserialize;

/// Placeholder the VAT registry emits for fields it will not disclose.
const UNDISCLOSED: &str = "---";

/// Validation record for one VAT identifier.
///
/// # Fields
///
/// - `country_code`: two-letter member-state code, e.g. `IT`
/// - `vat_number`: the numeric part of the identifier
/// - `is_valid`: whether the registry recognizes the identifier
/// - `company_name` / `company_address`: optional registry data; meaningless
///   when `is_valid` is false
/// - `request_date`: optional date string, shown as provided
/// - `error_message`: optional lookup detail; only meaningful when
///   `is_valid` is false
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VatRecord {
    pub country_code: String,
    pub vat_number: String,
    pub is_valid: bool,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub request_date: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl VatRecord {
    /// Company name worth rendering, with empty and placeholder values
    /// filtered out.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.company_name.as_deref().filter(|name| is_disclosed(name))
    }

    /// Company address worth rendering, with empty and placeholder values
    /// filtered out.
    #[must_use]
    pub fn display_address(&self) -> Option<&str> {
        self.company_address.as_deref().filter(|address| is_disclosed(address))
    }
}

fn is_disclosed(field: &str) -> bool {
    !field.trim().is_empty() && field != UNDISCLOSED
}

/// Normalizes user VAT input before dispatch: trims the ends, uppercases,
/// and drops internal spaces. Country-code handling stays backend-side.
///
/// # Examples
///
/// ```
/// use zienda::domain::normalize_vat_query;
///
/// assert_eq!(normalize_vat_query("  it 12345 678901 "), "IT12345678901");
/// ```
#[must_use]
pub fn normalize_vat_query(raw: &str) -> String {
    raw.trim().to_uppercase().replace(' ', "")
}
