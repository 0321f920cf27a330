//! A computer opponent for the board game 'Connect 4'
//!
//! The computer picks its moves with a fixed-depth minimax search using
//! alpha-beta pruning. Every position carries a cached heuristic score,
//! recomputed from the whole board after each move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_alphabeta::{search::choose_move, GameState, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let state = GameState::from_moves(Player::Human, "0")?;
//! let reply = choose_move(&state).expect("the game is not over");
//!
//! assert!(reply.is_human_turn());
//! assert_eq!(reply.empty_cells(), state.empty_cells() - 1);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod score;

pub mod state;

pub mod search;


pub use board::{Board, Mark, Player};
pub use state::{GameState, Outcome};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// The number of plies searched before the heuristic score is used
pub const SEARCH_DEPTH: usize = 5;

// windows are built from fixed-size arrays, the board must fit at least one in each direction
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
// empty cell counts are stored in a u8
const_assert!(WIDTH * HEIGHT <= u8::MAX as usize);
