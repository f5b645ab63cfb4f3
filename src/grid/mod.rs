// Grid module - cell state and the drawing grid that owns it

pub mod cell;
pub mod drawing;
pub mod traits;

// Re-export the main grid types for easy access
pub use cell::{Cell, MAX_INTERACTIONS};
pub use drawing::DrawingGrid;
pub use traits::GridTrait;

pub use crate::config::GridConfig;
