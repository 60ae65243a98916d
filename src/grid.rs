//! The square module grid handed from the encoder to the renderer.
//!
//! Indexing is `modules[x][y]`: `x` selects the column, `y` the row, with `(0, 0)` in the top
//! left corner. Every consumer in this crate keeps that order so output is never transposed.

use crate::error::{Error, Result};
use crate::qrcode::QrCode;

/// Side length of a finder pattern, in modules.
pub const FINDER_SIZE: usize = 7;

/// An immutable `N x N` grid of modules, `true` = dark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    /// Column-major: `columns[x][y]`.
    columns: Vec<Vec<bool>>,
}

/// Which part of the symbol a module belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Body,
    /// The ring of a finder pattern (outer 7x7 border and the light ring inside it).
    OuterEye,
    /// The 3x3 centre of a finder pattern.
    InnerEye,
}

impl ModuleGrid {
    /// Builds a grid from `columns[x][y]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if the grid is empty or not square.
    pub fn from_columns(columns: Vec<Vec<bool>>) -> Result<Self> {
        let size = columns.len();
        if size == 0 {
            return Err(Error::InvalidGrid("grid has no modules".into()));
        }
        if let Some((x, column)) = columns.iter().enumerate().find(|(_, c)| c.len() != size) {
            return Err(Error::InvalidGrid(format!(
                "column {} has {} modules, expected {}",
                x,
                column.len(),
                size
            )));
        }
        Ok(Self { size, columns })
    }

    /// Builds a grid by calling `f(x, y)` for every module.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        assert!(size > 0, "grid has no modules");
        let columns = (0..size)
            .map(|x| (0..size).map(|y| f(x, y)).collect())
            .collect();
        Self { size, columns }
    }

    /// Parses a grid from rows of text, `#` (or `1`) for dark and anything else for light.
    ///
    /// Handy for small hand-written fixtures:
    ///
    /// ```
    /// use qistyle::grid::ModuleGrid;
    ///
    /// let grid = ModuleGrid::from_rows(&["#..", ".#.", "..#"]).unwrap();
    /// assert!(grid.get(1, 1));
    /// assert!(!grid.get(1, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let cells: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#' || c == '1').collect())
            .collect();
        if let Some((y, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(Error::InvalidGrid(format!(
                "row {} has {} modules, expected {}",
                y,
                row.len(),
                size
            )));
        }
        let columns = (0..size)
            .map(|x| (0..size).map(|y| cells[y][x]).collect())
            .collect();
        ModuleGrid::from_columns(columns)
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value of `modules[x][y]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `[0, size)`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.columns[x][y]
    }

    /// Value of the module offset by `(dx, dy)` from `(x, y)`; anything off the grid is light.
    pub fn neighbor(&self, x: usize, y: usize, dx: isize, dy: isize) -> bool {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        let range = 0..self.size as isize;
        range.contains(&nx) && range.contains(&ny) && self.columns[nx as usize][ny as usize]
    }

    /// Number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.columns.iter().flatten().filter(|&&m| m).count()
    }

    /// Locates `(x, y)` relative to the three finder patterns.
    ///
    /// Grids smaller than a finder pattern have no eyes.
    pub fn region(&self, x: usize, y: usize) -> Region {
        if self.size < FINDER_SIZE {
            return Region::Body;
        }
        let far = self.size - FINDER_SIZE;
        for &(ox, oy) in &[(0, 0), (far, 0), (0, far)] {
            if (ox..ox + FINDER_SIZE).contains(&x) && (oy..oy + FINDER_SIZE).contains(&y) {
                let (lx, ly) = (x - ox, y - oy);
                return if (2..=4).contains(&lx) && (2..=4).contains(&ly) {
                    Region::InnerEye
                } else {
                    Region::OuterEye
                };
            }
        }
        Region::Body
    }
}

impl From<&QrCode> for ModuleGrid {
    fn from(qr: &QrCode) -> Self {
        let size = qr.size() as usize;
        ModuleGrid::from_fn(size, |x, y| qr.get_module(x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qrcode::QrCodeEcc;

    #[test]
    fn test_from_columns_rejects_ragged() {
        let err = ModuleGrid::from_columns(vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid(_)));
        assert!(ModuleGrid::from_columns(Vec::new()).is_err());
    }

    #[test]
    fn test_indexing_is_x_then_y() {
        // Only the module in column 2, row 0 is dark.
        let grid = ModuleGrid::from_fn(3, |x, y| x == 2 && y == 0);
        assert!(grid.get(2, 0));
        assert!(!grid.get(0, 2));

        let rows = ModuleGrid::from_rows(&["..#", "...", "..."]).unwrap();
        assert_eq!(rows, grid);
    }

    #[test]
    fn test_neighbor_off_grid_is_light() {
        let grid = ModuleGrid::from_fn(2, |_, _| true);
        assert!(grid.neighbor(0, 0, 1, 1));
        assert!(!grid.neighbor(0, 0, -1, 0));
        assert!(!grid.neighbor(1, 1, 0, 1));
    }

    #[test]
    fn test_regions() {
        let grid = ModuleGrid::from_fn(21, |_, _| false);
        assert_eq!(grid.region(0, 0), Region::OuterEye);
        assert_eq!(grid.region(3, 3), Region::InnerEye);
        assert_eq!(grid.region(1, 1), Region::OuterEye);
        assert_eq!(grid.region(17, 3), Region::InnerEye);
        assert_eq!(grid.region(3, 17), Region::InnerEye);
        assert_eq!(grid.region(20, 20), Region::Body);
        assert_eq!(grid.region(7, 7), Region::Body);
        assert_eq!(ModuleGrid::from_fn(5, |_, _| true).region(2, 2), Region::Body);
    }

    #[test]
    fn test_from_qrcode() {
        let qr = QrCode::encode_text("HELLO", QrCodeEcc::Low).unwrap();
        let grid = ModuleGrid::from(&qr);
        assert_eq!(grid.size(), 21);
        assert!(grid.get(0, 0));
        assert!(grid.get(20, 0));
        assert!(!grid.get(7, 0));
    }
}
