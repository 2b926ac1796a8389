//! Search mode and request lifecycle state types.
//!
//! This module defines the two state machines at the heart of the plugin:
//! which kind of lookup is active ([`SearchMode`]) and where the current
//! request stands in its lifecycle ([`RequestPhase`]). Keeping the lifecycle
//! a single tagged union is what guarantees that results and error text are
//! never simultaneously live.
//!
//! # State Machine
//!
//! ```text
//! Idle ──submit──▶ Loading { seq } ──response──▶ Success | Failure
//!   ▲                   │ resubmit: new seq, old response discarded
//!   └── mode switch / escape (clears query and payloads)
//! ```

use crate::domain::{NameSearchResult, VatRecord};

/// The kind of lookup the user is performing.
///
/// Determines which backend endpoint is called, which result shape is
/// expected, and which canned messages are shown. Switching modes resets the
/// query and clears prior results and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Company-name search returning categorized URL lists.
    Name,

    /// VAT-identifier lookup returning a validation record.
    Vat,
}

impl SearchMode {
    /// The other mode, used by the Tab toggle.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Name => Self::Vat,
            Self::Vat => Self::Name,
        }
    }

    /// Short tab label shown above the input box. Doubles as the mode tag
    /// attached to outgoing request contexts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Vat => "vat",
        }
    }

    /// Parses a request-context tag back into a mode. Inverse of [`label`].
    ///
    /// [`label`]: Self::label
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "name" => Some(Self::Name),
            "vat" => Some(Self::Vat),
            _ => None,
        }
    }

    /// Dim placeholder shown inside the empty input box.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "type a company name",
            Self::Vat => "type a VAT number, e.g. IT12345678901",
        }
    }

    /// Message for a submit with an empty query. No request is dispatched.
    #[must_use]
    pub const fn empty_query_message(self) -> &'static str {
        match self {
            Self::Name => "insert enterprise name or VAT",
            Self::Vat => "insert VAT number",
        }
    }

    /// Generic message for any transport, timeout, or decode failure. The
    /// underlying cause goes to the trace log, never to the user.
    #[must_use]
    pub const fn request_failed_message(self) -> &'static str {
        match self {
            Self::Name => "error during research",
            Self::Vat => "error during validation",
        }
    }

    /// Progress text while a request is in flight.
    #[must_use]
    pub const fn loading_message(self) -> &'static str {
        match self {
            Self::Name => "searching...",
            Self::Vat => "validating...",
        }
    }
}

/// Payload of a completed request, one variant per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Categorized URL results from a name search.
    Name(NameSearchResult),

    /// Validation record from a VAT lookup.
    Vat(VatRecord),
}

/// Lifecycle of the current request. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request yet, or everything was cleared.
    Idle,

    /// A request is in flight. `seq` identifies the one dispatch whose
    /// resolution is still allowed to update state; responses and timeouts
    /// carrying any other seq are stale and get discarded.
    Loading {
        /// Sequence number allocated at dispatch.
        seq: u64,
    },

    /// The most recent request resolved with a payload.
    Success(SearchOutcome),

    /// The most recent submit or request failed.
    Failure {
        /// Human-readable canned message for the input area.
        message: String,
    },
}

impl RequestPhase {
    /// Sequence number of the in-flight request, if any.
    #[must_use]
    pub const fn loading_seq(&self) -> Option<u64> {
        match self {
            Self::Loading { seq } => Some(*seq),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tags_round_trip() {
        for mode in [SearchMode::Name, SearchMode::Vat] {
            assert_eq!(SearchMode::from_tag(mode.label()), Some(mode));
        }
        assert_eq!(SearchMode::from_tag("email"), None);
    }

    #[test]
    fn only_loading_carries_a_seq() {
        assert_eq!(RequestPhase::Loading { seq: 7 }.loading_seq(), Some(7));
        assert_eq!(RequestPhase::Idle.loading_seq(), None);
        let failed = RequestPhase::Failure {
            message: "error during research".to_string(),
        };
        assert_eq!(failed.loading_seq(), None);
    }
}
