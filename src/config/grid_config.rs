use crate::sketch_errors::{validate_grid_size, SketchResult};

// Dynamic grid configuration
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells per side
    pub size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: crate::DEFAULT_GRID_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Row-major position of a linear cell index
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn validate(&self) -> SketchResult<()> {
        validate_grid_size(self.size).map(|_| ())
    }
}
