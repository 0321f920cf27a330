use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// One side of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }
}

/// The contents of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Mark {
    Empty,
    Human,
    Computer,
}

impl Mark {
    /// Weight of the mark in the window scores.
    ///
    /// Computer marks weigh `WIN_LENGTH + 1`, so a window's mark sum alone tells
    /// whose marks it holds and how many.
    pub const fn weight(self) -> u32 {
        match self {
            Mark::Empty => 0,
            Mark::Human => 1,
            Mark::Computer => WIN_LENGTH as u32 + 1,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Mark::Empty),
            'O' | 'o' => Some(Mark::Human),
            'X' | 'x' => Some(Mark::Computer),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Human => 'O',
            Mark::Computer => 'X',
        }
    }
}

/// A 6x7 grid of marks
///
/// Row 0 is the top of the board, pieces are dropped into a column and land
/// in its lowest empty row.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Mark; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Parses a diagram of the board, one string per row from the top.
    ///
    /// `.` is an empty cell, `O` a human mark and `X` a computer mark. Whitespace
    /// is ignored. Gravity is not checked.
    pub fn from_rows(rows: [&str; HEIGHT]) -> Result<Self> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let marks = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Mark::from_char(c)
                        .ok_or_else(|| anyhow!("could not parse '{}' in row {} as a mark", c, row))
                })
                .collect::<Result<Vec<_>>>()?;
            if marks.len() != WIDTH {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    marks.len(),
                    WIDTH
                ));
            }
            board.cells[row].copy_from_slice(&marks);
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Mark {
        self.cells[row][column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, mark: Mark) {
        self.cells[row][column] = mark;
    }

    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        self.cells[row][column].is_empty()
    }

    /// A column is full once its top cell is taken
    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[0][column].is_empty()
    }

    /// The row a piece dropped into `column` lands in, `None` if the column is full
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        // scan from the bottom row upwards
        (0..HEIGHT).rev().find(|&row| self.is_empty(row, column))
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|mark| mark.is_empty())
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark; WIDTH]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|mark| mark.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
