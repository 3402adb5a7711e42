//! Map loading, validation and world-space cell lookup.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Side length of one grid cell in world units.
pub const CELL_SIZE: f32 = 64.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("map is empty")]
    Empty,
    #[error("map perimeter is open at row {row}, col {col}")]
    OpenPerimeter { row: usize, col: usize },
}

/// Immutable tile grid. Rows are equalized to the same width at parse time
/// and the outer ring must be solid wall, so every in-bounds world point is
/// surrounded by walls and movement/raycasting can never walk off the grid.
#[derive(Debug)]
pub struct Map {
    cells: Vec<Vec<Cell>>,
}

impl Map {
    /// Parses a map from text lines: space and `.` are empty, anything else
    /// is a wall. Short rows are padded with walls.
    pub fn parse(lines: &[&str]) -> Result<Self, MapError> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| match ch {
                    ' ' | '.' => Cell::Empty,
                    _ => Cell::Wall,
                })
                .collect();
            cells.push(row);
        }
        let maxw = cells.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut cells {
            while row.len() < maxw {
                row.push(Cell::Wall);
            }
        }
        let map = Self { cells };
        map.check_perimeter()?;
        Ok(map)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let reader = BufReader::new(File::open(path)?);
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        Self::parse(&refs)
    }

    /// The built-in 8x8 demo grid.
    pub fn sample() -> Self {
        Self::parse(&[
            "########",
            "#      #",
            "# ## # #",
            "#      #",
            "# # ## #",
            "# #    #",
            "# # #  #",
            "########",
        ])
        .expect("sample map is valid")
    }

    fn check_perimeter(&self) -> Result<(), MapError> {
        if self.cells.is_empty() || self.cells[0].is_empty() {
            return Err(MapError::Empty);
        }
        let rows = self.cells.len();
        let cols = self.cells[0].len();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let edge = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                if edge && cell != Cell::Wall {
                    return Err(MapError::OpenPerimeter { row, col });
                }
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell under a continuous world-space point. Points outside the grid
    /// report `Wall`, so a violated containment invariant cannot index out
    /// of bounds.
    #[inline]
    pub fn cell_at(&self, world_x: f32, world_y: f32) -> Cell {
        let col = (world_x / CELL_SIZE).floor() as isize;
        let row = (world_y / CELL_SIZE).floor() as isize;
        if row < 0 || col < 0 {
            return Cell::Wall;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.cells.len() || col >= self.cells[row].len() {
            return Cell::Wall;
        }
        self.cells[row][col]
    }

    #[inline]
    pub fn is_wall(&self, world_x: f32, world_y: f32) -> bool {
        self.cell_at(world_x, world_y) == Cell::Wall
    }
}
