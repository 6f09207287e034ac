//! Static wall/pathway grid with world-space point classification.

use maze_chase_core::{Cell, CellCoord, Position};

use crate::ConfigError;

/// Rectangular grid of maze cells fixed at construction.
///
/// Each cell maps to an axis-aligned world-space rectangle whose extent is
/// derived from an external display-width scale input. Points that fall
/// outside every cell rectangle classify as [`Cell::Wall`] so that unknown
/// space is never traversable.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    columns: u32,
    rows: u32,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Builds a grid from row-major cell rows and per-cell extents.
    ///
    /// Fails when the layout is empty or ragged, or when either extent is
    /// not strictly positive.
    pub(crate) fn from_rows(
        layout: &[Vec<Cell>],
        cell_width: f32,
        cell_height: f32,
    ) -> Result<Self, ConfigError> {
        let Some(first) = layout.first() else {
            return Err(ConfigError::EmptyMazeLayout);
        };
        let expected = first.len();
        if expected == 0 {
            return Err(ConfigError::EmptyMazeLayout);
        }

        for (row, cells) in layout.iter().enumerate() {
            if cells.len() != expected {
                return Err(ConfigError::RaggedMazeLayout {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        if !(cell_width > 0.0) || !(cell_height > 0.0) {
            return Err(ConfigError::NonPositiveCellExtent);
        }

        let columns = u32::try_from(expected).map_err(|_| ConfigError::EmptyMazeLayout)?;
        let rows = u32::try_from(layout.len()).map_err(|_| ConfigError::EmptyMazeLayout)?;
        let cells = layout.iter().flatten().copied().collect();

        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
            cells,
        })
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Width of a single cell rectangle in world units.
    #[must_use]
    pub const fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Height of a single cell rectangle in world units.
    #[must_use]
    pub const fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Classification stored for the provided grid cell, if it exists.
    #[must_use]
    pub fn cell_at(&self, coord: CellCoord) -> Option<Cell> {
        self.index(coord).and_then(|index| self.cells.get(index).copied())
    }

    /// Classifies a world-space point by the cell rectangle containing it.
    ///
    /// Points outside the grid classify as [`Cell::Wall`].
    #[must_use]
    pub fn classify(&self, point: Position) -> Cell {
        self.containing_cell(point)
            .and_then(|coord| self.cell_at(coord))
            .unwrap_or(Cell::Wall)
    }

    /// Grid cell whose rectangle contains the provided point, if any.
    #[must_use]
    pub fn containing_cell(&self, point: Position) -> Option<CellCoord> {
        if point.x() < 0.0 || point.y() < 0.0 {
            return None;
        }

        let column = (point.x() / self.cell_width) as u32;
        let row = (point.y() / self.cell_height) as u32;
        if column < self.columns && row < self.rows {
            Some(CellCoord::new(column, row))
        } else {
            None
        }
    }

    /// World-space origin (lower-left corner) of the provided cell.
    #[must_use]
    pub fn cell_origin(&self, coord: CellCoord) -> Position {
        Position::new(
            coord.column() as f32 * self.cell_width,
            coord.row() as f32 * self.cell_height,
        )
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        if coord.column() < self.columns && coord.row() < self.rows {
            let row = usize::try_from(coord.row()).ok()?;
            let column = usize::try_from(coord.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Parses a textual maze row where `#` marks walls and any other byte marks
/// pathway cells.
pub(crate) fn parse_row(row: &str) -> Vec<Cell> {
    row.bytes()
        .map(|byte| if byte == b'#' { Cell::Wall } else { Cell::Pathway })
        .collect()
}
