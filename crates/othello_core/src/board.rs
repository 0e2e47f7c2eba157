//! Square Othello board.
//!
//! A [`Board`] is a value: moves never mutate it in place, they return the
//! successor board. Search branches therefore never observe each other's flips.

use std::fmt;

use crate::error::OthelloError;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Row-major, `cells[y * size + x]`.
    cells: Vec<Cell>,
}

impl Board {
    /// Board of edge `size` with the four-disc opening in the centre.
    ///
    /// With `c = size / 2`, White holds `(c-1, c-1)` and `(c, c)`, Black holds
    /// `(c, c-1)` and `(c-1, c)`.
    pub fn new(size: usize) -> Result<Self, OthelloError> {
        let mut board = Self::empty(size)?;
        let c = size / 2;
        board.set(c - 1, c - 1, Cell::White);
        board.set(c, c, Cell::White);
        board.set(c, c - 1, Cell::Black);
        board.set(c - 1, c, Cell::Black);
        Ok(board)
    }

    /// The standard 8x8 opening position.
    pub fn standard() -> Self {
        let mut board = Board {
            size: STANDARD_SIZE,
            cells: vec![Cell::Empty; STANDARD_SIZE * STANDARD_SIZE],
        };
        board.set(3, 3, Cell::White);
        board.set(4, 4, Cell::White);
        board.set(4, 3, Cell::Black);
        board.set(3, 4, Cell::Black);
        board
    }

    pub fn empty(size: usize) -> Result<Self, OthelloError> {
        validate_size(size)?;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Builds a board from row-major cells. The length must be a square of a
    /// valid edge size.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, OthelloError> {
        let size = (cells.len() as f64).sqrt().round() as usize;
        if size * size != cells.len() {
            return Err(OthelloError::CellCount {
                expected: size * size,
                actual: cells.len(),
            });
        }
        validate_size(size)?;
        Ok(Board { size, cells })
    }

    /// Parses one string per row. `.` is empty, `B`/`X` black, `W`/`O` white;
    /// whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, OthelloError> {
        let size = rows.len();
        validate_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            let before = cells.len();
            for c in row.chars().filter(|c| !c.is_whitespace()) {
                let cell = Cell::from_char(c)
                    .ok_or_else(|| OthelloError::Parse(format!("bad cell {c:?} in row {y}")))?;
                cells.push(cell);
            }
            if cells.len() - before != size {
                return Err(OthelloError::Parse(format!(
                    "row {y} has {} cells, expected {size}",
                    cells.len() - before
                )));
            }
        }
        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(x, y)`. Panics when out of range, like slice indexing.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.size + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y * self.size + x] = cell;
    }

    /// Cell at a signed coordinate, `None` past the edge.
    #[inline]
    fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let n = self.size as i32;
        if x < 0 || y < 0 || x >= n || y >= n {
            return None;
        }
        Some(self.cells[y as usize * self.size + x as usize])
    }

    pub fn contains(&self, mv: Move) -> bool {
        (mv.x as usize) < self.size && (mv.y as usize) < self.size
    }

    pub fn count(&self, side: Side) -> usize {
        let target = side.cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Total discs of both colours.
    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.disc_count()
    }

    /// Number of opponent discs bracketed by `side` when moving at `(x, y)`
    /// and walking towards `(dx, dy)`. Zero when the run is empty or is not
    /// closed by one of `side`'s discs before the edge.
    fn bracketed_run(&self, side: Side, x: i32, y: i32, dx: i8, dy: i8) -> usize {
        let own = side.cell();
        let opponent = side.opponent().cell();
        let (dx, dy) = (dx as i32, dy as i32);
        let (mut cx, mut cy) = (x + dx, y + dy);
        let mut run = 0;
        while self.get(cx, cy) == Some(opponent) {
            run += 1;
            cx += dx;
            cy += dy;
        }
        if run > 0 && self.get(cx, cy) == Some(own) {
            run
        } else {
            0
        }
    }

    /// True iff the target is empty and at least one direction brackets a run
    /// of opponent discs. Off-board moves are never legal.
    pub fn is_legal(&self, side: Side, mv: Move) -> bool {
        if !self.contains(mv) || self.cell(mv.x as usize, mv.y as usize) != Cell::Empty {
            return false;
        }
        let (x, y) = (mv.x as i32, mv.y as i32);
        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| self.bracketed_run(side, x, y, dx, dy) > 0)
    }

    /// Discs that `mv` would flip, direction by direction in [`DIRECTIONS`]
    /// order. Empty for illegal moves.
    pub fn flips(&self, side: Side, mv: Move) -> Vec<Move> {
        let mut out = Vec::new();
        if !self.contains(mv) || self.cell(mv.x as usize, mv.y as usize) != Cell::Empty {
            return out;
        }
        let (x, y) = (mv.x as i32, mv.y as i32);
        for (dx, dy) in DIRECTIONS {
            let run = self.bracketed_run(side, x, y, dx, dy) as i32;
            for step in 1..=run {
                let fx = x + dx as i32 * step;
                let fy = y + dy as i32 * step;
                out.push(Move::new(fx as u8, fy as u8));
            }
        }
        out
    }

    /// Checked move application: the successor board, or an error when the
    /// move is off the board or not legal for `side`. `self` is untouched.
    pub fn apply_move(&self, side: Side, mv: Move) -> Result<Board, OthelloError> {
        if !self.contains(mv) {
            return Err(OthelloError::OutOfBounds {
                mv,
                size: self.size,
            });
        }
        if !self.is_legal(side, mv) {
            return Err(OthelloError::IllegalMove { side, mv });
        }
        Ok(self.play(side, mv))
    }

    /// Applies a move the caller already knows to be legal (for example one
    /// produced by [`crate::legal_moves`]).
    pub fn play(&self, side: Side, mv: Move) -> Board {
        debug_assert!(self.is_legal(side, mv), "play called with illegal move {mv}");
        let mut next = self.clone();
        let own = side.cell();
        for flipped in self.flips(side, mv) {
            next.set(flipped.x as usize, flipped.y as usize, own);
        }
        next.set(mv.x as usize, mv.y as usize, own);
        next
    }

    /// One string per row in the notation accepted by [`Board::from_rows`].
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

fn validate_size(size: usize) -> Result<(), OthelloError> {
    if size % 2 != 0 || !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(OthelloError::InvalidSize(size));
    }
    Ok(())
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
