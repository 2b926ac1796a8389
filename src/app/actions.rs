//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or backend events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing HTTP requests through the Zellij host or hiding the pane.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence via the action processor in `main.rs`.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful operations like network dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user presses Esc on an already-cleared input.
    CloseFocus,

    /// Fetches categorized name-search results from the backend.
    ///
    /// The query is the trimmed text captured at dispatch time; later edits
    /// to the input must not change what this request asks for. `seq` tags
    /// the dispatch for the stale-response guard.
    FetchNameResults {
        /// Trimmed query captured at dispatch.
        query: String,
        /// Stale-guard sequence number for this dispatch.
        seq: u64,
    },

    /// Fetches a VAT validation record from the backend.
    ///
    /// The identifier is already normalized (trimmed, uppercased, spaces
    /// removed) at dispatch time.
    FetchVatRecord {
        /// Normalized VAT identifier captured at dispatch.
        vat: String,
        /// Stale-guard sequence number for this dispatch.
        seq: u64,
    },
}
