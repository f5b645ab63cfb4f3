// Drawing Grid - the N x N arena of cells a session draws on

use crate::config::GridConfig;
use crate::grid::cell::Cell;
use crate::grid::traits::GridTrait;
use crate::sketch_errors::{validate_grid_size, SketchResult};
use log::debug;

#[derive(Debug, Clone)]
pub struct DrawingGrid {
    config: GridConfig,
    cells: Vec<Cell>,
}

impl DrawingGrid {
    /// Build a fresh grid of `size` x `size` pristine cells
    pub fn new(size: usize) -> SketchResult<Self> {
        let size = validate_grid_size(size)?;
        let config = GridConfig::new(size);

        let cells = (0..config.cell_count())
            .map(|index| {
                let (row, col) = config.position_of(index);
                Cell::new(row, col)
            })
            .collect();

        debug!("🔲 Allocated {}x{} drawing grid", size, size);
        Ok(Self { config, cells })
    }

    pub fn side(&self) -> usize {
        self.config.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }
}

impl GridTrait for DrawingGrid {
    fn config(&self) -> &GridConfig {
        &self.config
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
