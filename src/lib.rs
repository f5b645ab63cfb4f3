// E-Sketch: interactive drawing grid
// Pointer events color cells according to the current drawing mode.

pub mod color;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod grid;
pub mod logging;
pub mod mode;
pub mod session;
pub mod sketch_config;
pub mod sketch_errors;
pub mod surface;
pub mod tui;

// Re-export main types for convenience
pub use color::{Glow, Paint, Rgb};
pub use config::GridConfig;
pub use dispatch::{dispatch, DrawDecision, PointerEvent, PointerState};
pub use grid::{Cell, DrawingGrid, GridTrait};
pub use mode::Mode;
pub use session::{KeyCommand, ResizeOutcome, Session};
pub use sketch_config::SketchConfig;
pub use sketch_errors::{parse_grid_size, validate_grid_size, SketchError, SketchResult};
pub use surface::{CellHandle, Label, RecordingSurface, Surface};

/// Grid side length at startup
pub const DEFAULT_GRID_SIZE: usize = 16;
pub const MIN_GRID_SIZE: usize = 1;
pub const MAX_GRID_SIZE: usize = 100;

/// Side length of the drawing area in pixels
pub const CONTAINER_SIZE_PX: f32 = 640.0;
