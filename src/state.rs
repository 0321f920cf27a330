use anyhow::{anyhow, Result};

use crate::{board::*, score::*, HEIGHT, WIDTH};

/// The result of a finished game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    ComputerWin,
    HumanWin,
    Tie,
}

/// A position together with the side to move and its cached score
///
/// States are plain values: applying a move produces a new, independent state
/// and never touches the one it was made from.
#[derive(Copy, Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Option<Player>,
    empty_cells: u8,
    score: f64,
}

impl GameState {
    /// A fresh game whose starting player has not been chosen yet
    pub fn create() -> Self {
        Self {
            board: Board::new(),
            side_to_move: None,
            empty_cells: (WIDTH * HEIGHT) as u8,
            score: BASELINE,
        }
    }

    /// A fresh game started by `first`
    pub fn new(first: Player) -> Self {
        let mut state = Self::create();
        state.set_first_player(first);
        state
    }

    /// Replays a string of 0-indexed column digits from a fresh game started by `first`
    pub fn from_moves<S: AsRef<str>>(first: Player, moves: S) -> Result<Self> {
        let mut state = Self::new(first);

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => state = state.play_column(column as usize)?,
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(state)
    }

    pub fn set_first_player(&mut self, player: Player) {
        self.side_to_move = Some(player);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Option<Player> {
        self.side_to_move
    }

    pub fn is_human_turn(&self) -> bool {
        self.side_to_move == Some(Player::Human)
    }

    pub fn empty_cells(&self) -> usize {
        self.empty_cells as usize
    }

    /// The cached heuristic score of the position.
    ///
    /// `VICTORY`, `LOSS` and `TIE` only carry their meaning on terminal states.
    pub fn value(&self) -> f64 {
        self.score
    }

    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        self.board.is_empty(row, column)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// The row a piece dropped into `column` lands in, `None` if the column is full
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        self.board.lowest_empty_row(column)
    }

    pub fn is_terminal(&self) -> bool {
        self.empty_cells == 0 || self.score == TIE || is_win_sentinel(self.score)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        Some(if self.score == VICTORY {
            Outcome::ComputerWin
        } else if self.score == LOSS {
            Outcome::HumanWin
        } else {
            Outcome::Tie
        })
    }

    /// Places a mark for the side to move at (`row`, `column`) and returns the new state.
    ///
    /// The cell must be the landing cell of a column that is not full; callers
    /// validate this first (see [`GameState::play_column`]). A state with no side
    /// chosen yet plays a computer mark and leaves the computer to move.
    pub fn apply_move(&self, row: usize, column: usize) -> Self {
        debug_assert!(self.board.lowest_empty_row(column) == Some(row));
        let mut next = *self;

        let player = self.side_to_move.unwrap_or(Player::Computer);
        next.board.set(row, column, player.mark());
        next.empty_cells -= 1;
        next.side_to_move = Some(match self.side_to_move {
            Some(player) => player.opponent(),
            None => Player::Computer,
        });
        // scored from scratch every time, the cost is a few dozen windows
        next.score = evaluate(&next.board, next.empty_cells());
        next
    }

    /// Drops a piece into `column` for the side to move, rejecting illegal moves
    pub fn play_column(&self, column: usize) -> Result<Self> {
        if self.is_terminal() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                WIDTH - 1
            ));
        }
        match self.lowest_empty_row(column) {
            Some(row) => Ok(self.apply_move(row, column)),
            None => Err(anyhow!("Invalid move, column {} full", column)),
        }
    }

    /// Every position reachable in one move, best first for the side that moves next.
    ///
    /// Successors are generated by column and then stably sorted on their score:
    /// ascending when the human moves next in them, descending when the computer does.
    pub fn successors(&self) -> Vec<GameState> {
        let mut successors: Vec<GameState> = (0..WIDTH)
            .filter_map(|column| {
                self.lowest_empty_row(column)
                    .map(|row| self.apply_move(row, column))
            })
            .collect();

        successors.sort_by(|a, b| match a.side_to_move {
            Some(Player::Human) => a.score.total_cmp(&b.score),
            _ => b.score.total_cmp(&a.score),
        });
        successors
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::create()
    }
}
