//! Configuration options for the minimax search
//!
//! Configuration never changes the value a search achieves. It decides the
//! order moves are tried in, and therefore which of several equally good
//! moves is returned.

/// Order in which legal moves are explored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    /// Ascending action id (row-major for Tic-Tac-Toe)
    ///
    /// Fully deterministic: the same board always yields the same move.
    RowMajor,

    /// Whatever order the game's legal-move collection yields
    ///
    /// For [`Board`](crate::Board) this is the iteration order of a hash
    /// set, which varies between runs.
    Unordered,

    /// A random permutation drawn from the searcher's RNG
    ///
    /// Varies the choice among equally good moves. Combine with
    /// [`SearchConfig::with_seed`] for reproducible runs.
    Shuffled,
}

/// Configuration for the minimax search
///
/// # Example
///
/// ```
/// use tictactoe_minimax::{MoveOrder, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_move_order(MoveOrder::Shuffled)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Order in which moves are explored at every node
    pub move_order: MoveOrder,

    /// Seed for the RNG behind [`MoveOrder::Shuffled`]
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            move_order: MoveOrder::RowMajor,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the move order
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }

    /// Sets the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
