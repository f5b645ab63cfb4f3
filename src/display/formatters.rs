// Display formatting utilities for colors, labels and text snapshots

use crate::color::{Rgb, CYAN};
use crate::surface::VisualBoard;

/// Format a color as `#RRGGBB`
pub fn format_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

/// Format a color as `rgb(r, g, b)`
pub fn format_rgb(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

/// Grid size readout, e.g. `16x16`
pub fn format_grid_size(size: usize) -> String {
    format!("{}x{}", size, size)
}

/// Glyph for one cell visual in a text snapshot
pub fn snapshot_glyph(painted: bool, fill: Rgb) -> char {
    match (painted, fill) {
        (false, _) => '.',
        (true, CYAN) => 'c',
        (true, _) => '#',
    }
}

/// Render the board as one line of glyphs per row
pub fn render_snapshot(board: &VisualBoard) -> String {
    let side = board.side();
    let mut out = String::with_capacity(side * (side + 1));
    for row in 0..side {
        for col in 0..side {
            let glyph = board
                .visual_at(row, col)
                .map(|visual| snapshot_glyph(visual.painted, visual.fill))
                .unwrap_or('?');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{LIGHT_GREEN, RAINBOW_PALETTE};

    #[test]
    fn test_color_formats() {
        assert_eq!(format_hex(CYAN), "#00FFFF");
        assert_eq!(format_hex(RAINBOW_PALETTE[5]), "#4B0082");
        assert_eq!(format_rgb(LIGHT_GREEN), "rgb(144, 238, 144)");
    }

    #[test]
    fn test_grid_size_readout() {
        assert_eq!(format_grid_size(16), "16x16");
        assert_eq!(format_grid_size(1), "1x1");
    }

    #[test]
    fn test_snapshot() {
        let mut board = VisualBoard::new();
        let handles: Vec<_> = (0..4).map(|i| board.push(i / 2, i % 2, 320.0)).collect();
        board.paint(handles[0], CYAN, None);
        board.paint(handles[3], LIGHT_GREEN, None);
        assert_eq!(render_snapshot(&board), "c.\n.#\n");
    }
}
