//! Heuristic scoring of a board
//!
//! The board is cut into windows, every straight run of [`WIN_LENGTH`] cells.
//! A window holding marks of only one side scores `2^sum` of the mark weights,
//! positive for the computer and negative for the human. Windows holding both
//! sides are dead and score nothing. A completed window ends the scan with a
//! sentinel value. Only windows whose anchor cell is taken are counted, so a
//! mark adds to the windows it starts and not to those it merely sits in.

use crate::{board::*, HEIGHT, WIDTH, WIN_LENGTH};

/// Score of a position the computer has won
pub const VICTORY: f64 = 1e20;
/// Score of a position the human has won
pub const LOSS: f64 = -VICTORY;
/// Score of a drawn position
pub const TIE: f64 = 0.0;
/// Starting point of every board scan, keeps a live board from ever scoring `TIE`
pub const BASELINE: f64 = 1e-5;

/// The (row, column) coordinates of a window's cells, starting at its anchor
pub type Window = [(usize, usize); WIN_LENGTH];

/// The number of distinct windows on the board
pub const NUM_WINDOWS: usize = WIDTH * (HEIGHT - WIN_LENGTH + 1)
    + HEIGHT * (WIDTH - WIN_LENGTH + 1)
    + 2 * (HEIGHT - WIN_LENGTH + 1) * (WIDTH - WIN_LENGTH + 1);

// up, up-right, right, down-right
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (-1, 1), (0, 1), (1, 1)];

/// Builds every window on the board in scan order: anchors row by row from the
/// top, left to right, then each direction in turn. Windows that would leave the
/// board are skipped, so each window appears exactly once.
const fn window_table() -> [Window; NUM_WINDOWS] {
    let mut table = [[(0, 0); WIN_LENGTH]; NUM_WINDOWS];
    let mut n = 0;
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            let mut d = 0;
            while d < DIRECTIONS.len() {
                let (dr, dc) = DIRECTIONS[d];
                let end_row = row as isize + dr * (WIN_LENGTH as isize - 1);
                let end_column = column as isize + dc * (WIN_LENGTH as isize - 1);
                if end_row >= 0
                    && end_row < HEIGHT as isize
                    && end_column >= 0
                    && end_column < WIDTH as isize
                {
                    let mut k = 0;
                    while k < WIN_LENGTH {
                        table[n][k] = (
                            (row as isize + dr * k as isize) as usize,
                            (column as isize + dc * k as isize) as usize,
                        );
                        k += 1;
                    }
                    n += 1;
                }
                d += 1;
            }
            column += 1;
        }
        row += 1;
    }
    table
}

/// All windows of the board, in the order they are scanned
pub const WINDOWS: [Window; NUM_WINDOWS] = window_table();

/// Returns true for the two values that end a game with a winner
pub fn is_win_sentinel(score: f64) -> bool {
    score == VICTORY || score == LOSS
}

/// Scores a single window
pub fn window_score(board: &Board, window: &Window) -> f64 {
    let mut human_sum = 0;
    let mut computer_sum = 0;
    for &(row, column) in window.iter() {
        match board.get(row, column) {
            mark @ Mark::Human => human_sum += mark.weight(),
            mark @ Mark::Computer => computer_sum += mark.weight(),
            Mark::Empty => {}
        }
    }

    // both sides present, nobody can complete this window
    if human_sum > 0 && computer_sum > 0 {
        return 0.0;
    }
    if computer_sum == Mark::Computer.weight() * WIN_LENGTH as u32 {
        return VICTORY;
    }
    if human_sum == Mark::Human.weight() * WIN_LENGTH as u32 {
        return LOSS;
    }
    if computer_sum > 0 {
        f64::from(1u32 << computer_sum)
    } else if human_sum > 0 {
        -f64::from(1u32 << human_sum)
    } else {
        0.0
    }
}

/// Scores the whole board from scratch.
///
/// Windows anchored on an empty cell are skipped. The first completed window
/// found decides the score outright. Otherwise a full board is a `TIE` and
/// anything else is `BASELINE` plus the sum of the anchored windows.
pub fn evaluate(board: &Board, empty_cells: usize) -> f64 {
    let mut score = BASELINE;
    for window in WINDOWS.iter() {
        let (row, column) = window[0];
        if board.is_empty(row, column) {
            continue;
        }
        let value = window_score(board, window);
        if is_win_sentinel(value) {
            return value;
        }
        score += value;
    }

    if empty_cells == 0 {
        TIE
    } else {
        score
    }
}
