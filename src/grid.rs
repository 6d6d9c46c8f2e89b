use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::zone::ZoneType;

/// Moore neighbourhood offsets: orthogonal first, then diagonals.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub zone: ZoneType,
    pub population: u32,
    pub pollution: u32,
    /// Only residential cells produce workers.
    pub available_workers: u32,
    /// Only industrial cells produce goods.
    pub available_goods: u32,
    pub is_powered: bool,
}

impl Cell {
    pub fn new(zone: ZoneType) -> Self {
        Self {
            zone,
            population: 0,
            pollution: 0,
            available_workers: 0,
            available_goods: 0,
            is_powered: false,
        }
    }
}

/// Fixed-size rectangular region, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, fill: ZoneType) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::new(fill); rows * cols],
        })
    }

    pub fn from_rows(rows: Vec<Vec<ZoneType>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.into_iter().map(Cell::new));
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Parses a region layout: one row per line, comma separated cells, the
    /// first character of each token selects the zone.
    pub fn from_layout(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let row_index = rows.len();
            let mut row = Vec::new();
            for (col, token) in line.split(',').enumerate() {
                let zone = token
                    .chars()
                    .next()
                    .and_then(ZoneType::from_symbol)
                    .ok_or_else(|| GridError::UnknownZone {
                        symbol: token.to_string(),
                        row: row_index,
                        col,
                    })?;
                row.push(zone);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let at = Coord::new(row, col);
        if !self.in_bounds(at) {
            return Err(self.out_of_range(at));
        }
        Ok(&self.cells[self.index_of(at)])
    }

    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, GridError> {
        let at = Coord::new(row, col);
        if !self.in_bounds(at) {
            return Err(self.out_of_range(at));
        }
        let idx = self.index_of(at);
        Ok(&mut self.cells[idx])
    }

    /// In-bounds Moore neighbours of `at`. Corners yield three, edges five.
    pub fn neighbors8(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = at.row.checked_add_signed(dr)?;
            let col = at.col.checked_add_signed(dc)?;
            let next = Coord::new(row, col);
            self.in_bounds(next).then_some(next)
        })
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |idx| Coord::new(idx / cols, idx % cols))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.coords().zip(self.cells.iter())
    }

    /// Cells grouped by row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    pub fn populations(&self) -> Vec<u32> {
        self.cells.iter().map(|cell| cell.population).collect()
    }

    fn index_of(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    fn out_of_range(&self, at: Coord) -> GridError {
        GridError::OutOfRange {
            row: at.row,
            col: at.col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, at: Coord) -> &Cell {
        assert!(self.in_bounds(at), "{}", self.out_of_range(at));
        &self.cells[self.index_of(at)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, at: Coord) -> &mut Cell {
        assert!(self.in_bounds(at), "{}", self.out_of_range(at));
        let idx = self.index_of(at);
        &mut self.cells[idx]
    }
}
