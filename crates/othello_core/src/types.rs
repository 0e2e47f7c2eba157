use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '0' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' | '1' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' | '2' => Some(Cell::White),
            _ => None,
        }
    }
}

/// A placement at column `x`, row `y` (both 0-based).
///
/// A move only means something together with a board and a side; passing is
/// represented by `Option<Move>::None` everywhere in the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub x: u8,
    pub y: u8,
}

impl Move {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Algebraic coordinate: column letter then 1-based row, e.g. `d3`.
    pub fn to_coord(self) -> String {
        let f = (b'a' + self.x) as char;
        format!("{f}{}", self.y as u32 + 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_coord())
    }
}

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 4;
/// Largest supported board edge; bounded by the column letters of [`Move::to_coord`].
pub const MAX_SIZE: usize = 26;
/// Edge of the standard board.
pub const STANDARD_SIZE: usize = 8;

/// The eight compass directions as (dx, dy).
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
