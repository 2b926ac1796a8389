//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and backend events, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Input**: `Char`, `Backspace`, `ClearQuery`, `Escape`
//! - **Mode Switching**: `ToggleMode`, `SelectMode`
//! - **Submission**: `Submit`
//! - **Result Navigation**: `ScrollUp`, `ScrollDown`
//! - **Backend**: `BackendResponse`, `RequestTimedOut`
//! - **System**: `CloseFocus`, `PermissionsResult`
//!
//! # Stale Responses
//!
//! Every dispatch allocates a fresh sequence number and records it in the
//! loading phase. A backend resolution is applied only while its seq is the
//! one the phase still carries; anything else is logged and dropped. Mode
//! changes clear the phase, so a matching seq also proves the mode has not
//! changed since dispatch.
//!
//! # Example
//!
//! ```rust
//! use zienda::app::{handle_event, AppState, Event};
//! use zienda::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zienda::domain::ZiendaError>(())
//! ```

use crate::app::{Action, AppState};
use crate::backend::{decode_search_response, decode_vat_record, ensure_success_status};
use crate::domain::error::Result;
use crate::domain::normalize_vat_query;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input, the plugin runtime, or backend replies.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Clears the whole query, leaving results in place.
    ClearQuery,
    /// Clears the lookup, or requests pane close when there is nothing
    /// left to clear.
    Escape,
    /// Closes the floating pane unconditionally.
    CloseFocus,

    /// Submits the current query in the current mode.
    Submit,
    /// Switches to the other search mode.
    ToggleMode,
    /// Switches to a specific search mode.
    SelectMode(super::modes::SearchMode),

    /// Moves the result window up one line.
    ScrollUp,
    /// Moves the result window down one line.
    ScrollDown,

    /// Reports a resolved backend request.
    ///
    /// Carries the sequence number and mode that were attached to the
    /// request when it was dispatched, so the handler can decide whether
    /// the resolution still belongs to the current lookup.
    BackendResponse {
        /// Sequence number allocated at dispatch.
        seq: u64,
        /// Mode the request was dispatched in.
        mode: super::modes::SearchMode,
        /// HTTP status code; 0 when the request never reached the backend.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Reports that a dispatched request exceeded the configured deadline.
    ///
    /// Emitted by the timer the runtime arms alongside each dispatch. Only
    /// the seq of the still-pending request may fail the lookup.
    RequestTimedOut {
        /// Sequence number of the request the timer was armed for.
        seq: u64,
    },

    /// Reports granted Zellij permissions after permission request.
    ///
    /// Logged for diagnostics; web access failures surface through the
    /// request path itself.
    PermissionsResult {
        /// Permissions granted by the user.
        granted: Vec<PermissionType>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation methods,
/// and collects actions to be executed by the plugin runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of a render flag and the actions to execute in sequence. The
/// action list is empty for events with no side effects (stale responses,
/// no-op mode selections, scrolling past the edge).
///
/// # Errors
///
/// Currently infallible; the `Result` return keeps the signature stable for
/// state mutations that can fail.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type for debugging.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::ClearQuery => {
            if state.query.is_empty() {
                return Ok((false, vec![]));
            }
            state.query.clear();
            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::RequestPhase;

            if state.query.is_empty() && matches!(state.phase, RequestPhase::Idle) {
                tracing::debug!("nothing to clear, closing pane");
                return Ok((false, vec![Action::CloseFocus]));
            }

            tracing::debug!(query = %state.query, "clearing lookup");
            state.reset_lookup();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Submit => {
            use super::modes::{RequestPhase, SearchMode};

            let trimmed = state.query.trim().to_string();
            if trimmed.is_empty() {
                tracing::debug!(mode = ?state.mode, "rejecting empty query");
                state.phase = RequestPhase::Failure {
                    message: state.mode.empty_query_message().to_string(),
                };
                state.scroll_offset = 0;
                return Ok((true, vec![]));
            }

            let seq = state.next_request_seq();
            state.phase = RequestPhase::Loading { seq };
            state.scroll_offset = 0;

            let action = match state.mode {
                SearchMode::Name => {
                    tracing::debug!(query = %trimmed, seq = seq, "dispatching name search");
                    state.dispatched_query.clone_from(&trimmed);
                    Action::FetchNameResults {
                        query: trimmed,
                        seq,
                    }
                }
                SearchMode::Vat => {
                    let vat = normalize_vat_query(&trimmed);
                    tracing::debug!(vat = %vat, seq = seq, "dispatching vat validation");
                    state.dispatched_query.clone_from(&vat);
                    Action::FetchVatRecord { vat, seq }
                }
            };

            Ok((true, vec![action]))
        }
        Event::ToggleMode => {
            let target = state.mode.other();
            state.set_mode(target);
            tracing::debug!(mode = ?state.mode, "mode toggled");
            Ok((true, vec![]))
        }
        Event::SelectMode(mode) => {
            if !state.set_mode(*mode) {
                tracing::debug!(mode = ?mode, "mode already active, nothing to do");
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),
        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::BackendResponse {
            seq,
            mode,
            status,
            body,
        } => {
            use super::modes::{RequestPhase, SearchMode, SearchOutcome};

            let Some(live_seq) = state.phase.loading_seq() else {
                tracing::debug!(seq = seq, "response arrived outside a pending lookup, ignoring");
                return Ok((false, vec![]));
            };
            if *seq != live_seq {
                tracing::debug!(
                    seq = seq,
                    live_seq = live_seq,
                    "stale response, ignoring"
                );
                return Ok((false, vec![]));
            }
            if *mode != state.mode {
                // A live seq guarantees the mode is unchanged since dispatch;
                // disagreement means the request context was corrupted.
                tracing::warn!(
                    request_mode = ?mode,
                    current_mode = ?state.mode,
                    "response mode does not match current mode, ignoring"
                );
                return Ok((false, vec![]));
            }

            let outcome = ensure_success_status(*status).and_then(|()| match state.mode {
                SearchMode::Name => decode_search_response(body).map(SearchOutcome::Name),
                SearchMode::Vat => decode_vat_record(body).map(SearchOutcome::Vat),
            });

            match outcome {
                Ok(outcome) => {
                    tracing::debug!(seq = seq, status = status, "lookup resolved");
                    state.phase = RequestPhase::Success(outcome);
                }
                Err(error) => {
                    tracing::warn!(seq = seq, status = status, error = %error, "lookup failed");
                    state.phase = RequestPhase::Failure {
                        message: state.mode.request_failed_message().to_string(),
                    };
                }
            }
            state.scroll_offset = 0;
            Ok((true, vec![]))
        }
        Event::RequestTimedOut { seq } => {
            use super::modes::RequestPhase;

            if state.phase.loading_seq() != Some(*seq) {
                tracing::debug!(seq = seq, "timer fired for a settled request, ignoring");
                return Ok((false, vec![]));
            }

            tracing::warn!(seq = seq, mode = ?state.mode, "request timed out");
            state.phase = RequestPhase::Failure {
                message: state.mode.request_failed_message().to_string(),
            };
            state.scroll_offset = 0;
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            tracing::debug!(granted_count = granted.len(), "permissions updated");
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{RequestPhase, SearchMode, SearchOutcome};
    use crate::ui::theme::Theme;

    const SEARCH_BODY: &[u8] =
        br#"{"results": {"social_media": ["https://www.twitter.com/acme"]}, "total": 1}"#;
    const EMPTY_SEARCH_BODY: &[u8] = br#"{"results": {}, "total": 0}"#;
    const VALID_VAT_BODY: &[u8] = br#"{
        "country_code": "IT",
        "vat_number": "12345678901",
        "is_valid": true,
        "company_name": "ACME SRL",
        "company_address": "VIA ROMA 1 00100 ROMA RM",
        "request_date": "2025-03-14"
    }"#;
    const INVALID_VAT_BODY: &[u8] = br#"{
        "country_code": "IT",
        "vat_number": "00000000000",
        "is_valid": false,
        "error_message": "not found"
    }"#;

    fn new_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn submit(state: &mut AppState) -> Vec<Action> {
        let (_, actions) = handle_event(state, &Event::Submit).unwrap();
        actions
    }

    fn respond(state: &mut AppState, seq: u64, status: u16, body: &[u8]) -> bool {
        let (rendered, actions) = handle_event(
            state,
            &Event::BackendResponse {
                seq,
                mode: state.mode,
                status,
                body: body.to_vec(),
            },
        )
        .unwrap();
        assert!(actions.is_empty());
        rendered
    }

    #[test]
    fn empty_name_submit_fails_without_dispatch() {
        let mut state = new_state();
        type_query(&mut state, "   ");

        let actions = submit(&mut state);

        assert!(actions.is_empty());
        assert_eq!(state.request_seq, 0);
        match &state.phase {
            RequestPhase::Failure { message } => {
                assert_eq!(message, "insert enterprise name or VAT");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_vat_submit_uses_the_vat_message() {
        let mut state = new_state();
        handle_event(&mut state, &Event::ToggleMode).unwrap();

        let actions = submit(&mut state);

        assert!(actions.is_empty());
        match &state.phase {
            RequestPhase::Failure { message } => assert_eq!(message, "insert VAT number"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn submit_trims_and_captures_the_query_at_dispatch() {
        let mut state = new_state();
        type_query(&mut state, "  acme corp  ");

        let actions = submit(&mut state);

        assert_eq!(
            actions,
            vec![Action::FetchNameResults {
                query: "acme corp".to_string(),
                seq: 1,
            }]
        );
        assert_eq!(state.phase, RequestPhase::Loading { seq: 1 });
        assert_eq!(state.dispatched_query, "acme corp");
    }

    #[test]
    fn vat_submit_normalizes_the_number() {
        let mut state = new_state();
        handle_event(&mut state, &Event::ToggleMode).unwrap();
        type_query(&mut state, " it 12345678901 ");

        let actions = submit(&mut state);

        assert_eq!(
            actions,
            vec![Action::FetchVatRecord {
                vat: "IT12345678901".to_string(),
                seq: 1,
            }]
        );
    }

    #[test]
    fn successful_response_resolves_the_lookup() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        assert!(respond(&mut state, 1, 200, SEARCH_BODY));

        match &state.phase {
            RequestPhase::Success(SearchOutcome::Name(result)) => {
                assert_eq!(result.total, 1);
                assert_eq!(result.categories[0].key, "social_media");
            }
            other => panic!("expected name success, got {other:?}"),
        }
    }

    #[test]
    fn empty_result_set_is_a_success_not_a_failure() {
        let mut state = new_state();
        type_query(&mut state, "nonexistent");
        submit(&mut state);

        respond(&mut state, 1, 200, EMPTY_SEARCH_BODY);

        match &state.phase {
            RequestPhase::Success(SearchOutcome::Name(result)) => assert!(result.is_empty()),
            other => panic!("expected name success, got {other:?}"),
        }
    }

    #[test]
    fn stale_response_is_ignored_in_favor_of_the_replacement() {
        let mut state = new_state();
        type_query(&mut state, "first");
        submit(&mut state);

        handle_event(&mut state, &Event::ClearQuery).unwrap();
        type_query(&mut state, "second");
        submit(&mut state);
        assert_eq!(state.phase, RequestPhase::Loading { seq: 2 });

        // The superseded request resolves late.
        assert!(!respond(&mut state, 1, 200, EMPTY_SEARCH_BODY));
        assert_eq!(state.phase, RequestPhase::Loading { seq: 2 });

        assert!(respond(&mut state, 2, 200, SEARCH_BODY));
        match &state.phase {
            RequestPhase::Success(SearchOutcome::Name(result)) => assert_eq!(result.total, 1),
            other => panic!("expected name success, got {other:?}"),
        }
    }

    #[test]
    fn response_after_mode_switch_is_ignored() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        handle_event(&mut state, &Event::ToggleMode).unwrap();
        assert_eq!(state.phase, RequestPhase::Idle);

        let (rendered, _) = handle_event(
            &mut state,
            &Event::BackendResponse {
                seq: 1,
                mode: SearchMode::Name,
                status: 200,
                body: SEARCH_BODY.to_vec(),
            },
        )
        .unwrap();

        assert!(!rendered);
        assert_eq!(state.phase, RequestPhase::Idle);
    }

    #[test]
    fn http_error_shows_the_mode_failure_message() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        respond(&mut state, 1, 500, b"Internal Server Error");

        match &state.phase {
            RequestPhase::Failure { message } => assert_eq!(message, "error during research"),
            other => panic!("expected failure, got {other:?}"),
        }
        // The typed query survives the failure.
        assert_eq!(state.query, "acme");
    }

    #[test]
    fn vat_http_error_shows_the_validation_message() {
        let mut state = new_state();
        handle_event(&mut state, &Event::ToggleMode).unwrap();
        type_query(&mut state, "IT12345678901");
        submit(&mut state);

        respond(&mut state, 1, 503, b"");

        match &state.phase {
            RequestPhase::Failure { message } => assert_eq!(message, "error during validation"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_shows_the_failure_message() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        respond(&mut state, 1, 200, b"<html>not json</html>");

        match &state.phase {
            RequestPhase::Failure { message } => assert_eq!(message, "error during research"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn transport_failure_status_zero_fails_the_lookup() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        respond(&mut state, 1, 0, b"");

        assert!(matches!(state.phase, RequestPhase::Failure { .. }));
    }

    #[test]
    fn timeout_fails_only_the_live_request() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        let (rendered, _) = handle_event(&mut state, &Event::RequestTimedOut { seq: 1 }).unwrap();
        assert!(rendered);
        match &state.phase {
            RequestPhase::Failure { message } => assert_eq!(message, "error during research"),
            other => panic!("expected failure, got {other:?}"),
        }

        // A new dispatch supersedes the failed one; its stale timer is inert.
        type_query(&mut state, "x");
        submit(&mut state);
        let (rendered, _) = handle_event(&mut state, &Event::RequestTimedOut { seq: 1 }).unwrap();
        assert!(!rendered);
        assert_eq!(state.phase, RequestPhase::Loading { seq: 2 });
    }

    #[test]
    fn valid_vat_record_resolves_with_company_details() {
        let mut state = new_state();
        handle_event(&mut state, &Event::ToggleMode).unwrap();
        type_query(&mut state, "IT12345678901");
        submit(&mut state);

        respond(&mut state, 1, 200, VALID_VAT_BODY);

        match &state.phase {
            RequestPhase::Success(SearchOutcome::Vat(record)) => {
                assert!(record.is_valid);
                assert_eq!(record.display_name(), Some("ACME SRL"));
            }
            other => panic!("expected vat success, got {other:?}"),
        }
    }

    #[test]
    fn invalid_vat_record_is_still_a_success() {
        let mut state = new_state();
        handle_event(&mut state, &Event::ToggleMode).unwrap();
        type_query(&mut state, "IT00000000000");
        submit(&mut state);

        respond(&mut state, 1, 200, INVALID_VAT_BODY);

        match &state.phase {
            RequestPhase::Success(SearchOutcome::Vat(record)) => {
                assert!(!record.is_valid);
                assert_eq!(record.error_message.as_deref(), Some("not found"));
            }
            other => panic!("expected vat success, got {other:?}"),
        }
    }

    #[test]
    fn typing_during_a_pending_lookup_leaves_the_phase_alone() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);

        type_query(&mut state, " inc");

        assert_eq!(state.query, "acme inc");
        assert_eq!(state.phase, RequestPhase::Loading { seq: 1 });
        // The dispatched query is unaffected by later edits.
        assert_eq!(state.dispatched_query, "acme");
    }

    #[test]
    fn selecting_the_active_mode_changes_nothing() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);
        respond(&mut state, 1, 200, SEARCH_BODY);

        let (rendered, actions) =
            handle_event(&mut state, &Event::SelectMode(SearchMode::Name)).unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.query, "acme");
        assert!(matches!(state.phase, RequestPhase::Success(_)));
    }

    #[test]
    fn toggling_modes_clears_query_and_results() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);
        respond(&mut state, 1, 200, SEARCH_BODY);

        handle_event(&mut state, &Event::ToggleMode).unwrap();

        assert_eq!(state.mode, SearchMode::Vat);
        assert!(state.query.is_empty());
        assert_eq!(state.phase, RequestPhase::Idle);
    }

    #[test]
    fn escape_clears_first_and_closes_second() {
        let mut state = new_state();
        type_query(&mut state, "acme");

        let (rendered, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(rendered);
        assert!(actions.is_empty());
        assert!(state.query.is_empty());

        let (rendered, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn backspace_on_an_empty_query_skips_the_render() {
        let mut state = new_state();

        let (rendered, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!rendered);

        type_query(&mut state, "ab");
        let (rendered, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(rendered);
        assert_eq!(state.query, "a");
    }

    #[test]
    fn scroll_events_render_only_when_the_offset_moves() {
        let mut state = new_state();
        let (rendered, _) = handle_event(&mut state, &Event::ScrollDown).unwrap();
        assert!(!rendered);

        type_query(&mut state, "acme");
        submit(&mut state);
        respond(&mut state, 1, 200, SEARCH_BODY);

        // Two flattened lines: heading plus one URL.
        let (rendered, _) = handle_event(&mut state, &Event::ScrollDown).unwrap();
        assert!(rendered);
        let (rendered, _) = handle_event(&mut state, &Event::ScrollDown).unwrap();
        assert!(!rendered);
        let (rendered, _) = handle_event(&mut state, &Event::ScrollUp).unwrap();
        assert!(rendered);
    }

    #[test]
    fn resubmit_resets_the_scroll_offset() {
        let mut state = new_state();
        type_query(&mut state, "acme");
        submit(&mut state);
        respond(&mut state, 1, 200, SEARCH_BODY);
        handle_event(&mut state, &Event::ScrollDown).unwrap();
        assert_eq!(state.scroll_offset, 1);

        submit(&mut state);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.phase, RequestPhase::Loading { seq: 2 });
    }
}
