// Grid geometry - where the drawing grid sits on screen and which cell is under a point

use ratatui::layout::Rect;

/// Terminal characters are roughly twice as tall as they are wide
const CHAR_ASPECT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Screen area covered by the grid
    pub area: Rect,
    /// Cells per side
    pub side: usize,
}

impl GridGeometry {
    /// Fit a visually square grid of `side` cells, centered in `available`
    pub fn fit(available: Rect, side: usize) -> Option<Self> {
        if side == 0 || available.width == 0 || available.height == 0 {
            return None;
        }

        let height = available.height.min(available.width / CHAR_ASPECT);
        if height == 0 {
            return None;
        }
        let width = height * CHAR_ASPECT;

        let area = Rect {
            x: available.x + (available.width - width) / 2,
            y: available.y + (available.height - height) / 2,
            width,
            height,
        };
        Some(Self { area, side })
    }

    /// Cell (row, col) under the screen position, if it is inside the grid
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let area = self.area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }

        let dx = (column - area.x) as usize;
        let dy = (row - area.y) as usize;
        let cell_row = dy * self.side / area.height as usize;
        let cell_col = dx * self.side / area.width as usize;
        Some((cell_row, cell_col))
    }

    /// Linear index of the cell under the screen position
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cell_at(column, row)
            .map(|(cell_row, cell_col)| cell_row * self.side + cell_col)
    }
}
