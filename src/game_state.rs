//! Traits the search engine works against.
//!
//! [`Minimax`](crate::Minimax) is written against [`GameState`] rather than
//! [`Board`] directly. `Board` is the implementation this crate ships.

use std::fmt::Debug;

use crate::board::{Board, Mark, Move};
use crate::inspect;

/// Trait for moves that can be made in a game
pub trait Action: Clone + Debug + Send + Sync {
    /// Returns a unique identifier for this action
    ///
    /// Used to put moves into a stable order before they are searched.
    fn id(&self) -> usize;
}

/// Trait defining the game state interface required for minimax search
///
/// Utilities must lie in `MIN_UTILITY..=MAX_UTILITY`. The bound-based
/// pruning in the search relies on nothing being better than a win or worse
/// than a loss.
pub trait GameState: Clone + Send + Sync {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// Returns the list of legal actions from this state
    ///
    /// Terminal states may return an empty list.
    fn get_legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action, returning the new state
    ///
    /// The action must be one of [`get_legal_actions`](Self::get_legal_actions).
    /// The original state is left untouched.
    fn apply_action(&self, action: &Self::Action) -> Self;

    /// Returns true if the game is over
    fn is_terminal(&self) -> bool;

    /// Returns the value of this state for the maximizing player
    ///
    /// +1 is a win for the maximizer, -1 a win for the minimizer and 0 a
    /// draw or an unfinished game.
    fn utility(&self) -> i8;

    /// Returns true if the player to move is the maximizer
    fn is_maximizing(&self) -> bool;
}

impl Action for Move {
    fn id(&self) -> usize {
        self.index()
    }
}

impl GameState for Board {
    type Action = Move;

    fn get_legal_actions(&self) -> Vec<Move> {
        inspect::legal_moves(self).into_iter().collect()
    }

    fn apply_action(&self, action: &Move) -> Self {
        self.with_mark(*action, inspect::current_player(self))
    }

    fn is_terminal(&self) -> bool {
        inspect::is_terminal(self)
    }

    fn utility(&self) -> i8 {
        inspect::utility(self)
    }

    fn is_maximizing(&self) -> bool {
        inspect::current_player(self) == Mark::X
    }
}
