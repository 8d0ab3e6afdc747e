//! Move application
//!
//! The only place a mark is ever written to a board. The input is never
//! touched; the result is a fresh copy.

use crate::board::{Board, Move};
use crate::inspect::current_player;
use crate::{GameError, Result};

/// Returns the board that results from the player to move marking `mv`
///
/// The acting player is derived from the input board. Fails with
/// [`GameError::IllegalMove`] if the target cell is occupied.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    if board.get(mv).is_some() {
        return Err(GameError::IllegalMove {
            row: mv.row(),
            col: mv.col(),
        });
    }

    Ok(board.with_mark(mv, current_player(board)))
}
