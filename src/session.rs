// Sketch session - the single owner of grid, mode, pointer state and randomness
//
// Every input event goes through a `Session`. It asks the dispatcher whether
// the event draws, computes the paint with the color functions, mutates the
// cell and tells the surface what to show. Cell visuals live in a parallel
// `handles` vector indexed like the grid's cells.

use crate::color::{paint_for_mode, Paint};
use crate::config::GridConfig;
use crate::dispatch::{dispatch, PointerEvent, PointerState};
use crate::display::formatters::{format_grid_size, format_rgb};
use crate::grid::{DrawingGrid, GridTrait};
use crate::mode::Mode;
use crate::sketch_config::SketchConfig;
use crate::sketch_errors::{parse_grid_size, validate_grid_size, SketchResult};
use crate::surface::{CellHandle, Label, Surface};
use crate::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a resize request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    Resized(usize),
    /// The input was not a size in range; the grid is unchanged
    Rejected(String),
    Cancelled,
}

/// Keyboard shortcuts understood by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Reset,
    Resize,
    ToggleMode,
}

impl KeyCommand {
    pub fn from_char(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'r' => Some(KeyCommand::Reset),
            'n' => Some(KeyCommand::Resize),
            'm' => Some(KeyCommand::ToggleMode),
            _ => None,
        }
    }
}

pub fn resize_prompt_message() -> String {
    format!(
        "Enter the number of squares per side for the new grid ({}-{}):",
        MIN_GRID_SIZE, MAX_GRID_SIZE
    )
}

pub fn invalid_size_message() -> String {
    format!(
        "Please enter a valid number between {} and {}.",
        MIN_GRID_SIZE, MAX_GRID_SIZE
    )
}

pub struct Session<S: Surface, R: Rng = StdRng> {
    surface: S,
    grid: DrawingGrid,
    handles: Vec<CellHandle>,
    mode: Mode,
    pointer: PointerState,
    rng: R,
    container_size_px: f32,
}

impl<S: Surface> Session<S, StdRng> {
    /// Start a session from configuration, seeding the rainbow colors if asked to
    pub fn from_config(surface: S, config: &SketchConfig) -> SketchResult<Self> {
        config.validate()?;
        let rng = match config.input.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session::with_rng(
            surface,
            rng,
            config.grid.size,
            config.input.initial_mode,
            config.display.container_size_px,
        )
    }
}

impl<S: Surface, R: Rng> Session<S, R> {
    /// Build the initial grid and set every label for `mode`
    pub fn with_rng(
        surface: S,
        rng: R,
        size: usize,
        mode: Mode,
        container_size_px: f32,
    ) -> SketchResult<Self> {
        let grid = DrawingGrid::new(size)?;
        let mut session = Self {
            surface,
            grid,
            handles: Vec::new(),
            mode,
            pointer: PointerState::default(),
            rng,
            container_size_px,
        };
        session.attach_visuals();
        session.refresh_mode_labels();
        info!(
            "✅ Session ready: {} grid in {} mode",
            format_grid_size(size),
            mode
        );
        Ok(session)
    }

    /// Replace the grid with a fresh `size` x `size` one.
    ///
    /// On an invalid size the current grid and its visuals are left untouched.
    pub fn create_grid(&mut self, size: usize) -> SketchResult<()> {
        let size = validate_grid_size(size)?;
        info!("🔲 Creating {} grid...", format_grid_size(size));

        self.grid = DrawingGrid::new(size)?;
        self.attach_visuals();
        Ok(())
    }

    /// Rebuild the surface's cell visuals for the current grid
    fn attach_visuals(&mut self) {
        let size = self.grid.side();
        let cell_size_px = self.container_size_px / size as f32;

        self.surface.clear_cells();
        self.handles = self
            .grid
            .cells()
            .iter()
            .map(|cell| {
                self.surface
                    .create_cell_visual(cell.row, cell.col, cell_size_px)
            })
            .collect();
        self.surface
            .set_text(Label::GridSize, &format_grid_size(size));

        info!(
            "✅ Grid created successfully! Square size: {:.2}px",
            cell_size_px
        );
    }

    /// Wipe every cell back to black without changing the size
    pub fn reset_grid(&mut self) {
        self.grid.clear();
        for handle in &self.handles {
            self.surface.reset_cell(*handle);
        }
        info!("🧹 Grid reset!");
    }

    /// Prompt for a new size and rebuild the grid if the answer is valid
    pub fn request_resize(&mut self) -> SketchResult<ResizeOutcome> {
        let reply = self
            .surface
            .prompt_integer(&resize_prompt_message(), self.grid.side())?;

        match reply {
            None => {
                debug!("Resize prompt cancelled");
                Ok(ResizeOutcome::Cancelled)
            }
            Some(input) => self.resize_from_input(&input),
        }
    }

    /// Validate raw user input and resize, warning the user on bad input
    pub fn resize_from_input(&mut self, input: &str) -> SketchResult<ResizeOutcome> {
        match parse_grid_size(input) {
            Ok(size) => {
                self.create_grid(size)?;
                info!("New grid created: {}", format_grid_size(size));
                Ok(ResizeOutcome::Resized(size))
            }
            Err(err) if err.is_user_input() => {
                warn!("⚠️ Resize rejected: {}", err);
                self.surface.warn(&invalid_size_message())?;
                Ok(ResizeOutcome::Rejected(input.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    /// Advance to the next mode and refresh the labels
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.next());
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.refresh_mode_labels();
        info!("🎛️ Mode changed to: {}", mode);
    }

    fn refresh_mode_labels(&mut self) {
        let mode = self.mode;
        self.surface.set_text(Label::CurrentMode, mode.display_name());
        self.surface
            .set_text(Label::ToggleButton, &mode.toggle_label());
        self.surface
            .set_text(Label::Instructions, mode.instructions());
    }

    /// Feed one pointer event to the session.
    ///
    /// `target` is the linear index of the cell under the pointer, `None` when
    /// the event happened outside the grid. Returns the paint if the event drew.
    pub fn handle_pointer(&mut self, event: PointerEvent, target: Option<usize>) -> Option<Paint> {
        let decision = dispatch(event, self.mode, &mut self.pointer);
        if !decision.should_draw() {
            return None;
        }
        target.and_then(|index| self.draw_on(index))
    }

    /// Draw on the cell at `index` in the current mode
    pub fn draw_on(&mut self, index: usize) -> Option<Paint> {
        let handle = *self.handles.get(index)?;
        let cell = self.grid.get_mut(index)?;
        let paint = paint_for_mode(self.mode, cell, &mut self.rng);

        self.surface.paint_cell(handle, paint.color, paint.glow);
        debug!(
            "🎨 Drew {} on ({}, {}) in {:?} mode",
            format_rgb(paint.color),
            index / self.grid.side(),
            index % self.grid.side(),
            self.mode
        );
        Some(paint)
    }

    /// Run the command bound to `key`, if any
    pub fn handle_key(&mut self, key: char) -> SketchResult<Option<KeyCommand>> {
        let Some(command) = KeyCommand::from_char(key) else {
            return Ok(None);
        };
        match command {
            KeyCommand::Reset => self.reset_grid(),
            KeyCommand::Resize => {
                self.request_resize()?;
            }
            KeyCommand::ToggleMode => {
                self.toggle_mode();
            }
        }
        Ok(Some(command))
    }

    /// Linear index of the cell at (`row`, `col`), if inside the grid
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.grid
            .validate_coordinates(row, col)
            .ok()
            .map(|_| self.grid.config().index_of(row, col))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn grid(&self) -> &DrawingGrid {
        &self.grid
    }

    pub fn grid_config(&self) -> &GridConfig {
        self.grid.config()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn handles(&self) -> &[CellHandle] {
        &self.handles
    }
}
