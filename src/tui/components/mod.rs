//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Cell`: one square; shows a mark and reports clicks inside itself
//! - `StatusBar`: top line with the game status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! each frame together with its props:
//! - `Grid` / `GridState`: nine cells, keyboard cursor, index attachment
//! - `MoveList` / `MoveListState`: history rows, selection, hit testing
//!
//! Components receive game data as props, never by reaching into `Game`:
//!
//! ```rust,ignore
//! Grid::new(&mut tui.grid, &view.board, focused).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── cell.rs         (single square)
//! ├── grid.rs         (3×3 layout of cells)
//! ├── move_list.rs    (history navigation)
//! └── status_bar.rs   (top status line)
//! ```

pub mod cell;
pub mod grid;
pub mod move_list;
mod status_bar;

pub use grid::{Grid, GridEvent, GridState};
pub use move_list::{MoveList, MoveListEvent, MoveListState};
pub use status_bar::StatusBar;
