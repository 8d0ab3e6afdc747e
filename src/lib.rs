//! # tictactoe-minimax
//!
//! Optimal decision-making for Tic-Tac-Toe.
//!
//! Given a board, this crate determines whose turn it is, enumerates legal
//! moves, applies moves without mutating the input, detects finished games
//! and computes the game-theoretically optimal move with a minimax search
//! that prunes on a one-sided bound.
//!
//! ## Basic Usage
//!
//! ```
//! use tictactoe_minimax::{apply_move, initial_board, is_terminal, optimal_move, winner};
//!
//! fn main() -> Result<(), tictactoe_minimax::GameError> {
//!     // Let both sides play perfectly from the empty board
//!     let mut board = initial_board();
//!     while let Some(mv) = optimal_move(&board) {
//!         board = apply_move(&board, mv)?;
//!     }
//!
//!     // Tic-Tac-Toe is a draw under perfect play
//!     assert!(is_terminal(&board));
//!     assert_eq!(winner(&board), None);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuring the Search
//!
//! When several moves are equally good, the one returned depends on the
//! order moves are tried in. [`SearchConfig`] controls that order; the value
//! achieved is optimal regardless.
//!
//! ```
//! use tictactoe_minimax::{Board, Minimax, MoveOrder, SearchConfig};
//!
//! // X threatens the top row, O has to block at (0, 2)
//! let board: Board = "XX. / .O. / ...".parse().unwrap();
//!
//! let config = SearchConfig::default()
//!     .with_move_order(MoveOrder::Shuffled)
//!     .with_seed(7);
//!
//! let mut minimax = Minimax::new(config);
//! let best = minimax.search(&board).unwrap();
//! assert_eq!((best.row(), best.col()), (0, 2));
//!
//! println!("{}", minimax.get_statistics().summary());
//! ```

pub mod apply;
pub mod board;
pub mod config;
pub mod game_state;
pub mod inspect;
pub mod search;
pub mod stats;

pub use apply::apply_move;
pub use board::{deep_copy, initial_board, Board, Mark, Move};
pub use config::{MoveOrder, SearchConfig};
pub use game_state::{Action, GameState};
pub use inspect::{current_player, is_terminal, legal_moves, outcome, utility, winner, Outcome};
pub use search::{max_value, min_value, optimal_move, Minimax, MAX_UTILITY, MIN_UTILITY};
pub use stats::SearchStatistics;

/// Error types for board construction and move application
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The target cell of a move is already occupied
    #[error("Illegal move: cell ({row}, {col}) is already occupied")]
    IllegalMove {
        /// Row of the rejected move
        row: usize,
        /// Column of the rejected move
        col: usize,
    },

    /// A coordinate lies outside the 3x3 grid
    #[error("Coordinate ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
    },

    /// Text could not be read as a board
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}

/// Result type for fallible game operations
pub type Result<T> = std::result::Result<T, GameError>;
