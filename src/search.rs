//! Fixed-depth alpha-beta search for the computer's move

use rayon::prelude::*;

use crate::{score::*, state::*, SEARCH_DEPTH};

/// Lower search bound at the root, below every reachable score
pub const ROOT_ALPHA: f64 = LOSS - 1.0;
/// Upper search bound at the root, above every reachable score
pub const ROOT_BETA: f64 = VICTORY + 1.0;

/// Counters gathered during a search (for diagnostics only)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of positions visited
    pub nodes: usize,
    /// Number of times a branch was pruned
    pub cutoffs: usize,
}

impl SearchStats {
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// The outcome of a root search
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Minimax value of the root, from the computer's point of view
    pub value: f64,
    /// The chosen successor, `None` if the root is terminal
    pub next: Option<GameState>,
    pub stats: SearchStats,
}

/// An alpha-beta searcher with the computer maximizing and the human minimizing
///
/// # Notes
/// Both sides are searched by one negamax routine. `sign` is `1.0` when the
/// computer is to move at a node and `-1.0` when the human is, so the routine
/// always maximizes `sign * value`. A successor replaces the best one so far only
/// when strictly better, so ties go to the earliest successor in move order.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    pub stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximizing search, returns the value of `state` and the successor that achieves it
    pub fn search_max(
        &mut self,
        state: &GameState,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> (f64, Option<GameState>) {
        self.negamax(state, depth, alpha, beta, 1.0)
    }

    /// Minimizing search, returns the value of `state` and the successor that achieves it
    pub fn search_min(
        &mut self,
        state: &GameState,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> (f64, Option<GameState>) {
        // the window is flipped for the minimizing side
        let (value, next) = self.negamax(state, depth, -beta, -alpha, -1.0);
        (-value, next)
    }

    /// Performs the game tree search
    ///
    /// Returns `sign * value` of the position and the chosen successor. On a
    /// cutoff the successor that caused it is returned.
    fn negamax(
        &mut self,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        beta: f64,
        sign: f64,
    ) -> (f64, Option<GameState>) {
        self.stats.nodes += 1;

        if depth == 0 || state.is_terminal() {
            return (sign * state.value(), None);
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best = None;
        for child in state.successors() {
            let (child_value, _) = self.negamax(&child, depth - 1, -beta, -alpha, -sign);
            let child_value = -child_value;

            if child_value > best_value {
                best_value = child_value;
                best = Some(child);
            }
            // the other side will never let the game reach this node
            if best_value >= beta {
                self.stats.cutoffs += 1;
                return (best_value, Some(child));
            }
            if best_value > alpha {
                alpha = best_value;
            }
        }
        (best_value, best)
    }

    /// Searches `SEARCH_DEPTH` plies for the side to move in `state`
    pub fn search(&mut self, state: &GameState) -> SearchResult {
        let (value, next) = if state.is_human_turn() {
            self.search_min(state, SEARCH_DEPTH, ROOT_ALPHA, ROOT_BETA)
        } else {
            self.search_max(state, SEARCH_DEPTH, ROOT_ALPHA, ROOT_BETA)
        };
        SearchResult {
            value,
            next,
            stats: self.stats,
        }
    }

    /// Same result as [`Searcher::search`], with the root successors searched in parallel.
    ///
    /// Each root branch gets its own searcher and the full root window, so no
    /// bounds are shared between threads. The first successor with the best
    /// value is chosen, which is the successor the sequential search returns.
    pub fn search_parallel(&mut self, state: &GameState) -> SearchResult {
        self.stats.nodes += 1;
        if state.is_terminal() {
            return SearchResult {
                value: state.value(),
                next: None,
                stats: self.stats,
            };
        }

        let maximizing = !state.is_human_turn();
        let branches: Vec<(f64, GameState, SearchStats)> = state
            .successors()
            .into_par_iter()
            .map(|child| {
                let mut searcher = Searcher::new();
                let (value, _) = if maximizing {
                    searcher.search_min(&child, SEARCH_DEPTH - 1, ROOT_ALPHA, ROOT_BETA)
                } else {
                    searcher.search_max(&child, SEARCH_DEPTH - 1, ROOT_ALPHA, ROOT_BETA)
                };
                (value, child, searcher.stats)
            })
            .collect();

        let mut best: Option<(f64, GameState)> = None;
        for (value, child, stats) in branches {
            self.stats.merge(&stats);
            let better = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if better {
                best = Some((value, child));
            }
        }

        // successors exist for every non-terminal state
        let (value, next) = match best {
            Some((value, child)) => (value, Some(child)),
            None => (state.value(), None),
        };
        SearchResult {
            value,
            next,
            stats: self.stats,
        }
    }
}

/// The successor chosen by a full-depth search for the side to move, `None` if the game is over
pub fn choose_move(state: &GameState) -> Option<GameState> {
    Searcher::new().search(state).next
}

/// [`choose_move`] with the root moves spread over the rayon thread pool
pub fn choose_move_parallel(state: &GameState) -> Option<GameState> {
    Searcher::new().search_parallel(state).next
}
