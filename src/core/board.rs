//! The 3x3 board and its winning lines.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`, so speculative moves are made on a throwaway copy
//! with [`Board::with_mark`] and never touch the original.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::{Error, Result};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The centre cell.
pub const CENTER: usize = 4;

/// Corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge cells between corners.
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// All eight winning lines: rows, then columns, then diagonals.
///
/// Order matters: [`Board::winner`] reports the first complete line.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Parse a cell index in `0..9` from text, e.g. user input.
///
/// ```
/// use rust_ttt::core::parse_index;
///
/// assert_eq!(parse_index(" 4 "), Ok(4));
/// assert!(parse_index("9").is_err());
/// ```
pub fn parse_index(text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|&i| i < CELL_COUNT)
        .ok_or_else(|| Error::InvalidIndex(text.to_string()))
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    /// The player holding this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display symbol: `X`, `O`, or a space for empty cells.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(player) => player.symbol(),
        }
    }
}

/// A 3x3 tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit cell contents.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parse a board from symbols.
    ///
    /// Accepts `X`, `O` and `_` (or `.`) for empty, in row-major order.
    /// Whitespace and commas are ignored, so `"XO_ _X_ ___"` works.
    ///
    /// ```
    /// use rust_ttt::core::{Board, Cell, Player};
    ///
    /// let board = Board::parse("X,O,_ _,X,_ _,_,_").unwrap();
    /// assert_eq!(board.get(0), Some(Cell::Mark(Player::First)));
    /// assert_eq!(board.get(1), Some(Cell::Mark(Player::Second)));
    /// assert_eq!(board.empty_indices().count(), 6);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in text.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let cell = match ch {
                'X' | 'x' => Cell::Mark(Player::First),
                'O' | 'o' => Cell::Mark(Player::Second),
                '_' | '.' => Cell::Empty,
                _ => return Err(Error::InvalidBoard(text.to_string())),
            };
            if count == CELL_COUNT {
                return Err(Error::InvalidBoard(text.to_string()));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(Error::InvalidBoard(text.to_string()));
        }
        Ok(Self { cells })
    }

    /// Cell at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// True if `index` is on the board and unoccupied.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Indices of unoccupied cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Copy of this board with `player`'s mark at `index`.
    ///
    /// Does not check occupancy; callers decide legality.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`CELL_COUNT`].
    #[must_use]
    pub fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::Mark(player);
        next
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Owner of `line` if all three cells hold the same mark.
    ///
    /// A line reaching off the board has no owner.
    #[must_use]
    pub fn line_owner(&self, line: [usize; 3]) -> Option<Player> {
        let first = self.get(line[0])?.player()?;
        line.iter()
            .all(|&i| self.get(i) == Some(Cell::Mark(first)))
            .then_some(first)
    }

    /// First complete line in [`WINNING_LINES`] order, with its owner.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        WINNING_LINES
            .iter()
            .find_map(|&line| self.line_owner(line).map(|p| (p, line)))
    }

    /// Owner of the first complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(player, _)| player)
    }

    /// Would marking `index` leave `player` holding a complete line?
    ///
    /// Checks every line on a trial copy; `self` is untouched. Returns
    /// `false` for occupied or out-of-range cells.
    #[must_use]
    pub fn completes_line(&self, index: usize, player: Player) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        let trial = self.with_mark(index, player);
        WINNING_LINES
            .iter()
            .any(|&line| trial.line_owner(line) == Some(player))
    }

    /// Count of cells marked by `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let c = &self.cells[row * 3..row * 3 + 3];
            writeln!(f, " {} | {} | {}", c[0].symbol(), c[1].symbol(), c[2].symbol())?;
            if row < 2 {
                f.write_str("---+---+---\n")?;
            }
        }
        Ok(())
    }
}
