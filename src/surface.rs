// Presentation layer - the surface the core paints through
//
// The core never touches terminals or widgets directly. It asks a `Surface`
// to create one visual per cell, paint or reset those visuals, update the
// text labels and run the modal prompt/warning dialogs.

use crate::color::{Glow, Rgb, BLACK};
use crate::display::formatters::render_snapshot;
use crate::sketch_errors::SketchResult;
use log::debug;
use std::collections::{HashMap, VecDeque};

/// Handle to the visual representation of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle(pub usize);

/// Text displays the core keeps up to date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    GridSize,
    CurrentMode,
    Instructions,
    ToggleButton,
}

pub trait Surface {
    /// Discard every cell visual
    fn clear_cells(&mut self);

    /// Create the visual for the cell at (`row`, `col`), `size_px` wide and high
    fn create_cell_visual(&mut self, row: usize, col: usize, size_px: f32) -> CellHandle;

    /// Fill a cell, overriding whatever it showed before
    fn paint_cell(&mut self, cell: CellHandle, color: Rgb, glow: Option<Glow>);

    /// Paint a cell black and drop any glow
    fn reset_cell(&mut self, cell: CellHandle);

    fn set_text(&mut self, label: Label, text: &str);

    /// Ask the user for a number. `Ok(None)` means the prompt was cancelled.
    fn prompt_integer(&mut self, message: &str, default: usize) -> SketchResult<Option<String>>;

    /// Show a modal notice and wait for it to be dismissed
    fn warn(&mut self, message: &str) -> SketchResult<()>;
}

/// What a surface currently shows for one cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellVisual {
    pub row: usize,
    pub col: usize,
    pub size_px: f32,
    pub fill: Rgb,
    pub glow: Option<Glow>,
    pub painted: bool,
}

impl CellVisual {
    fn new(row: usize, col: usize, size_px: f32) -> Self {
        Self {
            row,
            col,
            size_px,
            fill: BLACK,
            glow: None,
            painted: false,
        }
    }
}

/// In-memory cell visuals and labels shared by the surface implementations
#[derive(Debug, Default, Clone)]
pub struct VisualBoard {
    visuals: Vec<CellVisual>,
    labels: HashMap<Label, String>,
    side: usize,
}

impl VisualBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.visuals.clear();
        self.side = 0;
    }

    pub fn push(&mut self, row: usize, col: usize, size_px: f32) -> CellHandle {
        self.side = self.side.max(row + 1).max(col + 1);
        self.visuals.push(CellVisual::new(row, col, size_px));
        CellHandle(self.visuals.len() - 1)
    }

    pub fn paint(&mut self, cell: CellHandle, color: Rgb, glow: Option<Glow>) {
        if let Some(visual) = self.visuals.get_mut(cell.0) {
            visual.fill = color;
            visual.glow = glow;
            visual.painted = true;
        }
    }

    pub fn reset(&mut self, cell: CellHandle) {
        if let Some(visual) = self.visuals.get_mut(cell.0) {
            visual.fill = BLACK;
            visual.glow = None;
            visual.painted = false;
        }
    }

    pub fn set_label(&mut self, label: Label, text: &str) {
        self.labels.insert(label, text.to_string());
    }

    pub fn label(&self, label: Label) -> Option<&str> {
        self.labels.get(&label).map(String::as_str)
    }

    pub fn visuals(&self) -> &[CellVisual] {
        &self.visuals
    }

    pub fn visual(&self, cell: CellHandle) -> Option<&CellVisual> {
        self.visuals.get(cell.0)
    }

    /// Cells per side of the visuals created so far
    pub fn side(&self) -> usize {
        self.side
    }

    /// Visual at (`row`, `col`) assuming row-major creation order
    pub fn visual_at(&self, row: usize, col: usize) -> Option<&CellVisual> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.visuals.get(row * self.side + col)
    }
}

/// Everything the core asked a [`RecordingSurface`] to do
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    ClearCells,
    CreateCell { row: usize, col: usize, size_px: f32 },
    Paint { cell: CellHandle, color: Rgb, glow: Option<Glow> },
    Reset { cell: CellHandle },
    SetText { label: Label, text: String },
    Prompt { message: String, default: usize },
    Warn { message: String },
}

/// Headless surface that records commands and answers prompts from a script
#[derive(Debug, Default)]
pub struct RecordingSurface {
    board: VisualBoard,
    commands: Vec<SurfaceCommand>,
    prompt_replies: VecDeque<Option<String>>,
    warnings: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next prompt; `None` cancels it
    pub fn push_prompt_reply(&mut self, reply: Option<&str>) {
        self.prompt_replies.push_back(reply.map(str::to_string));
    }

    pub fn board(&self) -> &VisualBoard {
        &self.board
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Drain recorded commands, keeping the visual state
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Paint commands recorded so far, in order
    pub fn paints(&self) -> Vec<(CellHandle, Rgb)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Paint { cell, color, .. } => Some((*cell, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn snapshot(&self) -> String {
        render_snapshot(&self.board)
    }
}

impl Surface for RecordingSurface {
    fn clear_cells(&mut self) {
        self.board.clear();
        self.commands.push(SurfaceCommand::ClearCells);
    }

    fn create_cell_visual(&mut self, row: usize, col: usize, size_px: f32) -> CellHandle {
        self.commands
            .push(SurfaceCommand::CreateCell { row, col, size_px });
        self.board.push(row, col, size_px)
    }

    fn paint_cell(&mut self, cell: CellHandle, color: Rgb, glow: Option<Glow>) {
        self.board.paint(cell, color, glow);
        self.commands
            .push(SurfaceCommand::Paint { cell, color, glow });
    }

    fn reset_cell(&mut self, cell: CellHandle) {
        self.board.reset(cell);
        self.commands.push(SurfaceCommand::Reset { cell });
    }

    fn set_text(&mut self, label: Label, text: &str) {
        self.board.set_label(label, text);
        self.commands.push(SurfaceCommand::SetText {
            label,
            text: text.to_string(),
        });
    }

    fn prompt_integer(&mut self, message: &str, default: usize) -> SketchResult<Option<String>> {
        self.commands.push(SurfaceCommand::Prompt {
            message: message.to_string(),
            default,
        });
        // An unscripted prompt behaves like the user accepting the default
        let reply = self
            .prompt_replies
            .pop_front()
            .unwrap_or_else(|| Some(default.to_string()));
        debug!("📝 Scripted prompt reply: {:?}", reply);
        Ok(reply)
    }

    fn warn(&mut self, message: &str) -> SketchResult<()> {
        self.warnings.push(message.to_string());
        self.commands.push(SurfaceCommand::Warn {
            message: message.to_string(),
        });
        Ok(())
    }
}
