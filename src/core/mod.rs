//! # Core Game Logic
//!
//! This module contains the tic-tac-toe rules and session state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Game (session state) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • View (projection)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    Web     │
//!           │  Adapter   │              │  Adapter   │
//!           │ (ratatui)  │              │  (future)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: `Mark`, `Board`, and the winner check
//! - [`state`]: The `Game` struct, history and step pointer
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: Status text and move list handed to adapters
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod state;
pub mod view;
