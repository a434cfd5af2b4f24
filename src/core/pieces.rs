//! Pieces module - the tetromino catalog
//!
//! Seven fixed shapes keyed by `O T S Z L J I`, each a small bounding-box
//! matrix: O is 2x2, T/S/Z/L/J are 3x3 with one padding row, I is a 4x4
//! single column. Cells carry the kind's id so the grid keeps per-piece
//! identity after a lock.

use std::fmt;

use crate::types::{Cell, PieceKind};

/// One tetromino in one rotation state: a rectangular matrix of cells.
///
/// Immutable once produced; rotation derives a new matrix (see
/// [`crate::core::rotate`]), it never mutates in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<Cell>>,
}

impl Shape {
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        Self { rows }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Height of the bounding box.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (x, y) within the bounding box.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// The raw rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterate (x, y, value) over the occupied cells only.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, &value)| (value != 0).then_some((x, y, value)))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// Lookup with a key outside the fixed `O T S Z L J I` alphabet.
    /// This is a programming fault in the caller, not a runtime condition.
    UnknownPieceKey(char),
}

impl CatalogError {
    pub fn code(self) -> &'static str {
        match self {
            CatalogError::UnknownPieceKey(_) => "unknown_piece_key",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownPieceKey(key) => {
                write!(f, "unknown piece key {:?}", key)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The base (spawn) orientation for a kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    let v = kind.cell_value();
    let rows = match kind {
        PieceKind::O => vec![
            vec![v, v],
            vec![v, v],
        ],
        PieceKind::T => vec![
            vec![0, 0, 0],
            vec![v, v, v],
            vec![0, v, 0],
        ],
        PieceKind::S => vec![
            vec![0, 0, 0],
            vec![0, v, v],
            vec![v, v, 0],
        ],
        PieceKind::Z => vec![
            vec![0, 0, 0],
            vec![v, v, 0],
            vec![0, v, v],
        ],
        PieceKind::L => vec![
            vec![0, v, 0],
            vec![0, v, 0],
            vec![0, v, v],
        ],
        PieceKind::J => vec![
            vec![0, v, 0],
            vec![0, v, 0],
            vec![v, v, 0],
        ],
        PieceKind::I => vec![
            vec![0, v, 0, 0],
            vec![0, v, 0, 0],
            vec![0, v, 0, 0],
            vec![0, v, 0, 0],
        ],
    };
    Shape::from_rows(rows)
}

/// Look up a base shape by its catalog key.
pub fn lookup(key: char) -> Result<Shape, CatalogError> {
    let kind = PieceKind::from_key(key).ok_or(CatalogError::UnknownPieceKey(key))?;
    Ok(shape_of(kind))
}
