//! Minimax search with one-sided bound pruning
//!
//! Utilities are confined to {-1, 0, +1}, so a full alpha-beta window is
//! unnecessary. Each value function carries a single bound from its caller
//! and stops exploring siblings as soon as its running best meets that
//! bound. At the root, a move that forces a win for the mover ends the
//! search immediately; otherwise every move is compared and the best one is
//! returned.

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{
    board::{Board, Move},
    config::{MoveOrder, SearchConfig},
    game_state::{Action, GameState},
    stats::SearchStatistics,
};

/// Best possible utility for the maximizer, and the default bound of
/// [`max_value`]
pub const MAX_UTILITY: i8 = 1;

/// Best possible utility for the minimizer, and the default bound of
/// [`min_value`]
pub const MIN_UTILITY: i8 = -1;

/// A minimax searcher
///
/// Holds no state between searches apart from its configuration, its RNG
/// and the statistics of the most recent search.
pub struct Minimax<S: GameState> {
    /// Configuration for the search
    config: SearchConfig,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,

    /// Source of randomness, present only for [`MoveOrder::Shuffled`]
    rng: Option<StdRng>,

    _state: std::marker::PhantomData<fn(&S)>,
}

impl<S: GameState> Minimax<S> {
    /// Creates a searcher with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        let rng = match (config.move_order, config.seed) {
            (MoveOrder::Shuffled, Some(seed)) => Some(StdRng::seed_from_u64(seed)),
            (MoveOrder::Shuffled, None) => Some(StdRng::from_entropy()),
            (MoveOrder::RowMajor | MoveOrder::Unordered, _) => None,
        };

        Minimax {
            config,
            statistics: SearchStatistics::new(),
            rng,
            _state: std::marker::PhantomData,
        }
    }

    /// Returns the configuration this searcher was built with
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the statistics of the most recent search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the optimal action for the player to move
    ///
    /// Returns `None` if the state is already terminal. When several actions
    /// are equally good, the configured [`MoveOrder`] decides which one is
    /// returned.
    pub fn search(&mut self, state: &S) -> Option<S::Action> {
        self.statistics = SearchStatistics::new();
        let start_time = Instant::now();

        if state.is_terminal() {
            debug!("Search requested on a terminal state, no move to make");
            return None;
        }

        let maximizing = state.is_maximizing();
        debug!(
            "Starting minimax search for the {}",
            if maximizing { "maximizer" } else { "minimizer" }
        );

        let best = self.search_root(state, maximizing);

        self.statistics.total_time = start_time.elapsed();
        debug!("{}", self.statistics.summary());

        best
    }

    /// Best achievable utility when the maximizer is to move
    ///
    /// Returns early once the running best reaches `bound`.
    pub fn max_value(&mut self, state: &S, bound: i8) -> i8 {
        self.max_node(state, bound, 0)
    }

    /// Best achievable utility when the minimizer is to move
    ///
    /// Returns early once the running best falls to `bound`.
    pub fn min_value(&mut self, state: &S, bound: i8) -> i8 {
        self.min_node(state, bound, 0)
    }

    /// Scans the root's moves, seeding each child search with the running
    /// best as its bound
    fn search_root(&mut self, state: &S, maximizing: bool) -> Option<S::Action> {
        self.visit(0);

        let target = if maximizing { MAX_UTILITY } else { MIN_UTILITY };
        let mut actions = self.ordered_actions(state).into_iter();

        let mut best_action = actions.next()?;
        let child = state.apply_action(&best_action);
        let mut best_value = if maximizing {
            self.min_node(&child, MIN_UTILITY, 1)
        } else {
            self.max_node(&child, MAX_UTILITY, 1)
        };

        if best_value == target {
            trace!("Root: first move {:?} already forces a win", best_action);
            self.statistics.cutoffs += 1;
            return Some(best_action);
        }

        for action in actions {
            let child = state.apply_action(&action);
            let improved = if maximizing {
                let value = self.min_node(&child, best_value, 1);
                (value > best_value).then_some(value)
            } else {
                let value = self.max_node(&child, best_value, 1);
                (value < best_value).then_some(value)
            };

            if let Some(value) = improved {
                best_value = value;
                best_action = action;
                if best_value == target {
                    trace!("Root: move {:?} forces a win", best_action);
                    self.statistics.cutoffs += 1;
                    return Some(best_action);
                }
            }
        }

        Some(best_action)
    }

    fn max_node(&mut self, state: &S, bound: i8, depth: usize) -> i8 {
        self.visit(depth);
        if state.is_terminal() {
            self.statistics.terminal_leaves += 1;
            return state.utility();
        }

        let mut actions = self.ordered_actions(state).into_iter();
        let Some(first) = actions.next() else {
            return state.utility();
        };

        let mut best = self.min_node(&state.apply_action(&first), MIN_UTILITY, depth + 1);
        if best >= bound {
            return self.cutoff(best, depth);
        }

        for action in actions {
            let value = self.min_node(&state.apply_action(&action), MIN_UTILITY, depth + 1);
            if value > best {
                best = value;
                if best >= bound {
                    return self.cutoff(best, depth);
                }
            }
        }

        best
    }

    fn min_node(&mut self, state: &S, bound: i8, depth: usize) -> i8 {
        self.visit(depth);
        if state.is_terminal() {
            self.statistics.terminal_leaves += 1;
            return state.utility();
        }

        let mut actions = self.ordered_actions(state).into_iter();
        let Some(first) = actions.next() else {
            return state.utility();
        };

        let mut best = self.max_node(&state.apply_action(&first), MAX_UTILITY, depth + 1);
        if best <= bound {
            return self.cutoff(best, depth);
        }

        for action in actions {
            let value = self.max_node(&state.apply_action(&action), MAX_UTILITY, depth + 1);
            if value < best {
                best = value;
                if best <= bound {
                    return self.cutoff(best, depth);
                }
            }
        }

        best
    }

    fn visit(&mut self, depth: usize) {
        self.statistics.nodes_visited += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);
    }

    fn cutoff(&mut self, value: i8, depth: usize) -> i8 {
        trace!("Cutoff at depth {} with value {}", depth, value);
        self.statistics.cutoffs += 1;
        value
    }

    /// Legal actions in the configured exploration order
    fn ordered_actions(&mut self, state: &S) -> Vec<S::Action> {
        let mut actions = state.get_legal_actions();
        match self.config.move_order {
            MoveOrder::RowMajor => actions.sort_by_key(Action::id),
            MoveOrder::Unordered => {}
            MoveOrder::Shuffled => {
                // Canonical order first, so a seed always yields the same permutation
                actions.sort_by_key(Action::id);
                if let Some(rng) = self.rng.as_mut() {
                    actions.shuffle(rng);
                }
            }
        }
        actions
    }
}

impl<S: GameState> Default for Minimax<S> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Returns the optimal move for the player to act, or `None` if the game is
/// over
///
/// Uses the default configuration, so ties resolve to the first optimal move
/// in row-major order.
pub fn optimal_move(board: &Board) -> Option<Move> {
    Minimax::<Board>::default().search(board)
}

/// Best utility the maximizer can reach from `board`, pruned against `bound`
///
/// Pass [`MAX_UTILITY`] for an exact value.
pub fn max_value(board: &Board, bound: i8) -> i8 {
    Minimax::<Board>::default().max_value(board, bound)
}

/// Best utility the minimizer can reach from `board`, pruned against `bound`
///
/// Pass [`MIN_UTILITY`] for an exact value.
pub fn min_value(board: &Board, bound: i8) -> i8 {
    Minimax::<Board>::default().min_value(board, bound)
}
