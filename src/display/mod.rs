// Display module for colors, labels and text snapshots
pub mod formatters;

// Re-export main functions
pub use formatters::{format_grid_size, format_hex, format_rgb, render_snapshot, snapshot_glyph};
