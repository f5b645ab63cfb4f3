// Cell state - per-cell interaction counter and remembered base color

use crate::color::Rgb;

/// Interactions after which a darkening cell is fully black
pub const MAX_INTERACTIONS: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    interaction_count: u8,
    base_color: Option<Rgb>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            interaction_count: 0,
            base_color: None,
        }
    }

    pub fn interaction_count(&self) -> u8 {
        self.interaction_count
    }

    /// Count one more interaction, saturating at [`MAX_INTERACTIONS`]
    pub fn increment_interaction(&mut self) -> u8 {
        self.interaction_count = (self.interaction_count + 1).min(MAX_INTERACTIONS);
        self.interaction_count
    }

    pub fn base_color(&self) -> Option<Rgb> {
        self.base_color
    }

    /// Return the stored base color, storing `default` first if none is set
    pub fn base_color_or_init(&mut self, default: Rgb) -> Rgb {
        *self.base_color.get_or_insert(default)
    }

    pub fn reset(&mut self) {
        self.interaction_count = 0;
        self.base_color = None;
    }

    pub fn is_pristine(&self) -> bool {
        self.interaction_count == 0 && self.base_color.is_none()
    }
}
