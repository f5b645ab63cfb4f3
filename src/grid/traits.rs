// Common trait for grid implementations

use crate::config::GridConfig;
use crate::grid::cell::Cell;
use crate::sketch_errors::{validate_cell_coordinates, SketchResult};

/// Common trait for square cell grids
pub trait GridTrait {
    /// Get the grid configuration
    fn config(&self) -> &GridConfig;

    /// All cells in row-major order
    fn cells(&self) -> &[Cell];

    fn cells_mut(&mut self) -> &mut [Cell];

    /// Reset every cell in place, keeping the grid size
    fn clear(&mut self) {
        for cell in self.cells_mut() {
            cell.reset();
        }
    }

    /// Number of cells that have been drawn on since the last reset
    fn touched_cells(&self) -> usize {
        self.cells().iter().filter(|cell| !cell.is_pristine()).count()
    }

    /// Validate coordinates against grid bounds
    fn validate_coordinates(&self, row: usize, col: usize) -> SketchResult<()> {
        validate_cell_coordinates(row, col, self.config().size)
    }

    fn cell(&self, row: usize, col: usize) -> SketchResult<&Cell> {
        self.validate_coordinates(row, col)?;
        let index = self.config().index_of(row, col);
        Ok(&self.cells()[index])
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> SketchResult<&mut Cell> {
        self.validate_coordinates(row, col)?;
        let index = self.config().index_of(row, col);
        Ok(&mut self.cells_mut()[index])
    }
}
