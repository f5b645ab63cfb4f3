// Color functions - one color computation per drawing mode

use crate::grid::cell::Cell;
use crate::mode::Mode;
use rand::seq::SliceRandom;
use rand::Rng;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Scale every channel by `1 - factor`, rounding down
    pub fn darkened(self, factor: f64) -> Self {
        let keep = (1.0 - factor).clamp(0.0, 1.0);
        let scale = |channel: u8| (channel as f64 * keep).floor() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const LIGHT_GREEN: Rgb = Rgb::new(144, 238, 144);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// ROYGBIV
pub const RAINBOW_PALETTE: [Rgb; 7] = [
    Rgb::from_hex(0xFF0000),
    Rgb::from_hex(0xFF7F00),
    Rgb::from_hex(0xFFFF00),
    Rgb::from_hex(0x00FF00),
    Rgb::from_hex(0x0000FF),
    Rgb::from_hex(0x4B0082),
    Rgb::from_hex(0x9400D3),
];

/// Glow drawn around a painted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glow {
    pub color: Rgb,
    pub radius: u8,
}

/// Fraction of the base color removed per interaction
pub const DARKENING_STEP: f64 = 0.1;

pub const CYAN_GLOW_RADIUS: u8 = 8;
pub const SOFT_GLOW_RADIUS: u8 = 5;

/// The result of a draw: fill color plus optional glow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Rgb,
    pub glow: Option<Glow>,
}

impl Paint {
    fn glowing(color: Rgb, radius: u8) -> Self {
        Self {
            color,
            glow: Some(Glow { color, radius }),
        }
    }
}

pub fn hover_or_click_color() -> Rgb {
    CYAN
}

/// Pick a palette entry uniformly at random
pub fn rainbow_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    // The palette is a non-empty constant
    *RAINBOW_PALETTE.choose(rng).unwrap_or(&RAINBOW_PALETTE[0])
}

/// Darken the cell by one more step and return its new shade
pub fn darkening_color(cell: &mut Cell) -> Rgb {
    let interactions = cell.increment_interaction();
    let base = cell.base_color_or_init(LIGHT_GREEN);
    base.darkened(interactions as f64 * DARKENING_STEP)
}

/// Compute the paint for one draw on `cell` in `mode`
pub fn paint_for_mode<R: Rng + ?Sized>(mode: Mode, cell: &mut Cell, rng: &mut R) -> Paint {
    match mode {
        Mode::Hover | Mode::Click => Paint::glowing(hover_or_click_color(), CYAN_GLOW_RADIUS),
        Mode::Rainbow => Paint::glowing(rainbow_color(rng), SOFT_GLOW_RADIUS),
        Mode::Darkening => Paint::glowing(darkening_color(cell), SOFT_GLOW_RADIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_darkening_sequence() {
        let mut cell = Cell::new(0, 0);
        let expected = [
            (129, 214, 129),
            (115, 190, 115),
            (100, 166, 100),
            (86, 142, 86),
            (72, 119, 72),
            (57, 95, 57),
            (43, 71, 43),
            (28, 47, 28),
            (14, 23, 14),
            (0, 0, 0),
        ];
        for (r, g, b) in expected {
            assert_eq!(darkening_color(&mut cell), Rgb::new(r, g, b));
        }
        assert_eq!(darkening_color(&mut cell), BLACK);
        assert_eq!(cell.interaction_count(), 10);
    }

    #[test]
    fn test_darkening_keeps_existing_base_color() {
        let mut cell = Cell::new(0, 0);
        cell.base_color_or_init(Rgb::new(200, 100, 50));
        assert_eq!(darkening_color(&mut cell), Rgb::new(180, 90, 45));
    }

    #[test]
    fn test_rainbow_stays_in_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(RAINBOW_PALETTE.contains(&rainbow_color(&mut rng)));
        }
    }

    #[test]
    fn test_rainbow_reaches_every_color() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(rainbow_color(&mut rng));
        }
        assert_eq!(seen.len(), RAINBOW_PALETTE.len());
    }

    #[test]
    fn test_same_seed_same_rainbow() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(rainbow_color(&mut a), rainbow_color(&mut b));
        }
    }

    #[test]
    fn test_paint_per_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cell = Cell::new(1, 2);

        let hover = paint_for_mode(Mode::Hover, &mut cell, &mut rng);
        assert_eq!(hover.color, CYAN);
        assert_eq!(hover.glow.map(|g| g.radius), Some(CYAN_GLOW_RADIUS));

        let click = paint_for_mode(Mode::Click, &mut cell, &mut rng);
        assert_eq!(click, hover);
        assert_eq!(cell.interaction_count(), 0);

        let dark = paint_for_mode(Mode::Darkening, &mut cell, &mut rng);
        assert_eq!(dark.color, Rgb::new(129, 214, 129));
        assert_eq!(dark.glow.map(|g| g.radius), Some(SOFT_GLOW_RADIUS));
        assert_eq!(cell.interaction_count(), 1);
    }

    #[test]
    fn test_hex_decoding() {
        assert_eq!(Rgb::from_hex(0x4B0082), Rgb::new(75, 0, 130));
    }
}
