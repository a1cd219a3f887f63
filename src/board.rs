use std::fmt;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::error::{GameError, Result};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight unit steps `(dr, dc)` around a square.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// On-board neighbours of every square, indexed by `Position::index`.
static NEIGHBORS: Lazy<Vec<Vec<Position>>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|idx| {
            let pos = Position::from_index(idx);
            DIRECTIONS
                .iter()
                .filter_map(|&(dr, dc)| pos.offset(dr, dc))
                .collect()
        })
        .collect()
});

/// State of a single square. Black is the human side, White the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Returns the other colour. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            Cell::Empty => Cell::Empty,
        }
    }

    pub fn is_stone(self) -> bool {
        self != Cell::Empty
    }

    /// Wire code used by the JS side: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Bounds-checked constructor for coordinates coming from outside the engine.
    pub fn new(row: u8, col: u8) -> Result<Self> {
        if (row as usize) >= BOARD_SIZE || (col as usize) >= BOARD_SIZE {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Steps once in `(dr, dc)`; `None` when the step leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        in_bounds(row, col).then(|| Position::at(row as u8, col as u8))
    }

    pub fn neighbors(self) -> &'static [Position] {
        &NEIGHBORS[self.index()]
    }

    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    pub fn is_edge(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        self.row == 0 || self.row == last || self.col == 0 || self.col == last
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Black and white piece totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PieceCount {
    pub black: u8,
    pub white: u8,
}

impl PieceCount {
    pub fn total(self) -> u8 {
        self.black + self.white
    }
}

/// 8x8 grid of cells indexed `[row][col]`. Copying the board is a plain
/// 64-byte value copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Position::at(3, 3), Cell::White);
        board.set(Position::at(3, 4), Cell::Black);
        board.set(Position::at(4, 3), Cell::Black);
        board.set(Position::at(4, 4), Cell::White);
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parses eight rows of `B`, `W` and `.` (whitespace ignored).
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(GameError::InvalidBoard(format!(
                    "row {row} has {} cells, expected {BOARD_SIZE}",
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    '.' => Cell::Empty,
                    'B' | 'b' => Cell::Black,
                    'W' | 'w' => Cell::White,
                    other => {
                        return Err(GameError::InvalidBoard(format!(
                            "unexpected symbol '{other}' at ({row}, {col})"
                        )));
                    }
                };
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Signed-coordinate read; off-board squares yield `None`.
    pub fn get_at(&self, row: i32, col: i32) -> Option<Cell> {
        in_bounds(row, col).then(|| self.cells[row as usize][col as usize])
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// All squares with their contents, in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..NUM_SQUARES).map(move |idx| {
            let pos = Position::from_index(idx);
            (pos, self.get(pos))
        })
    }

    pub fn count(&self) -> PieceCount {
        self.squares()
            .fold(PieceCount::default(), |mut acc, (_, cell)| {
                match cell {
                    Cell::Black => acc.black += 1,
                    Cell::White => acc.white += 1,
                    Cell::Empty => {}
                }
                acc
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.count().total()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn has_empty_neighbor(&self, pos: Position) -> bool {
        pos.neighbors()
            .iter()
            .any(|&n| self.get(n) == Cell::Empty)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (pos, cell) in self.squares() {
            out[pos.index()] = cell.code();
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
