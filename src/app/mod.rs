//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/backend layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → HTTP Requests
//!                           ↑                                  ↓
//!                           └─────── Backend Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Search mode and request phase state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zienda::app::{handle_event, AppState, Event};
//! use zienda::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::Char('a'))?;
//! # Ok::<(), zienda::domain::ZiendaError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{RequestPhase, SearchMode, SearchOutcome};
pub use state::AppState;
