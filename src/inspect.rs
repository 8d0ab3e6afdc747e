//! State inspection: facts derived from a board
//!
//! None of these functions fail. They are total over every board, including
//! boards no legal game could reach.

use std::collections::HashSet;

use crate::board::{Board, Mark, Move};

/// The eight lines, in the order they are checked: rows, columns, then the
/// main diagonal and the anti-diagonal
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// State of the game on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// X completed a line
    XWins,
    /// O completed a line
    OWins,
    /// The board is full and nobody completed a line
    Draw,
    /// The game is still in progress
    Undecided,
}

impl Outcome {
    /// Numeric value of the outcome: +1 for X, -1 for O, 0 otherwise
    pub fn utility(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw | Outcome::Undecided => 0,
        }
    }

    /// Returns true for every outcome except `Undecided`
    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }
}

/// Returns the player whose turn it is
///
/// X moves whenever both players have placed the same number of marks,
/// including on the empty board. Otherwise O moves.
pub fn current_player(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty cell as a move
///
/// The set is empty once the board is full.
pub fn legal_moves(board: &Board) -> HashSet<Move> {
    Move::all().filter(|mv| board.get(*mv).is_none()).collect()
}

/// Returns the mark filling the first complete line, if any
pub fn winner(board: &Board) -> Option<Mark> {
    let rows = board.rows();
    LINES.iter().find_map(|&[a, b, c]| {
        let first = rows[a.0][a.1]?;
        (rows[b.0][b.1] == Some(first) && rows[c.0][c.1] == Some(first)).then_some(first)
    })
}

/// Returns true if someone has won or no empty cell remains
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Returns +1 if X has won, -1 if O has won and 0 otherwise
///
/// Non-terminal boards score 0 as well; the value only means something once
/// [`is_terminal`] holds.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Classifies the board as won, drawn or still in progress
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Mark::X) => Outcome::XWins,
        Some(Mark::O) => Outcome::OWins,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Undecided,
    }
}
