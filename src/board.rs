//! Board model for Tic-Tac-Toe
//!
//! A [`Board`] is a plain 3x3 value. Operations that produce a new position
//! copy the board and return the copy; nothing in the crate mutates a board
//! after it has been handed out.

use std::fmt;
use std::str::FromStr;

use crate::{GameError, Result};

/// Number of rows and columns on the board
pub const SIZE: usize = 3;

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First player, the maximizer
    X,
    /// Second player, the minimizer
    O,
}

impl Mark {
    /// Returns the other player's mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the character used to render this mark
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A move: the (row, column) of the cell to mark
///
/// Coordinates are checked on construction, so every `Move` addresses a
/// cell that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move, failing if either coordinate is outside `0..3`
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Move { row, col })
    }

    /// Row of the target cell
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the target cell
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index of the target cell (0-8)
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    /// Iterates over all nine cells in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE * SIZE).map(|i| Move {
            row: i / SIZE,
            col: i % SIZE,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid
///
/// `None` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows
    pub fn from_rows(cells: [[Option<Mark>; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Returns the contents of the cell a move targets
    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells[mv.row][mv.col]
    }

    /// Returns the rows of the grid
    pub fn rows(&self) -> &[[Option<Mark>; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts the cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    /// Returns true if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns a copy of this board with `mark` written into the target cell
    ///
    /// Callers are responsible for checking the cell is empty.
    pub(crate) fn with_mark(&self, mv: Move, mark: Mark) -> Self {
        let mut next = deep_copy(self);
        next.cells[mv.row][mv.col] = Some(mark);
        next
    }
}

/// Returns the starting position: every cell empty
pub fn initial_board() -> Board {
    Board::new()
}

/// Returns an independent board with identical contents
pub fn deep_copy(board: &Board) -> Board {
    *board
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row)?;
            for cell in cells {
                let symbol = cell.map_or('.', Mark::symbol);
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Reads nine cells in row-major order
    ///
    /// `X`/`x` and `O`/`o` are marks, `.`, `-` and `_` are empty cells.
    /// Whitespace, `/` and `|` are separators and are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        other
                    )))
                }
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(GameError::InvalidBoard(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut board = Board::new();
        for (mv, cell) in Move::all().zip(cells) {
            board.cells[mv.row][mv.col] = cell;
        }
        Ok(board)
    }
}
