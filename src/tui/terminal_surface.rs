// Terminal surface - the presentation layer backed by crossterm + ratatui

use crate::color::{Glow, Rgb};
use crate::sketch_errors::SketchResult;
use crate::surface::{CellHandle, Label, Surface, VisualBoard};
use crate::tui::layout::GridGeometry;
use crate::tui::render::{render_frame, Overlay, RenderOptions};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::backend::Backend;
use ratatui::Terminal;

/// Longest input the resize prompt accepts
const MAX_PROMPT_INPUT: usize = 16;

pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    board: VisualBoard,
    overlay: Overlay,
    options: RenderOptions,
    geometry: Option<GridGeometry>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, show_help: bool, show_status_bar: bool) -> Self {
        Self {
            terminal,
            board: VisualBoard::new(),
            overlay: if show_help { Overlay::Help } else { Overlay::None },
            options: RenderOptions { show_status_bar },
            geometry: None,
        }
    }

    /// Redraw the screen, remembering where the grid landed for hit testing
    pub fn draw(&mut self) -> SketchResult<()> {
        let Self {
            terminal,
            board,
            overlay,
            options,
            geometry,
        } = self;

        terminal.draw(|f| {
            *geometry = render_frame(f, board, overlay, options);
        })?;
        Ok(())
    }

    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.geometry.as_ref()
    }

    pub fn board(&self) -> &VisualBoard {
        &self.board
    }

    pub fn help_visible(&self) -> bool {
        self.overlay == Overlay::Help
    }

    pub fn toggle_help(&mut self) {
        self.overlay = if self.help_visible() {
            Overlay::None
        } else {
            Overlay::Help
        };
    }

    /// Block until a key is pressed, redrawing on terminal resizes
    fn next_key(&mut self) -> SketchResult<KeyEvent> {
        loop {
            self.draw()?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                _ => {}
            }
        }
    }
}

/// Line editor behind the resize prompt.
///
/// The default starts out selected: the first character typed replaces it,
/// Backspace and Enter work on it as on any other text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PromptLine {
    input: String,
    selected: bool,
}

impl PromptLine {
    fn with_default(default: usize) -> Self {
        Self {
            input: default.to_string(),
            selected: true,
        }
    }

    /// Apply one key press. `Some` ends the prompt, `Some(None)` cancels it.
    fn apply(&mut self, key: KeyEvent) -> Option<Option<String>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(None),
                _ => None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(Some(self.input.clone())),
            KeyCode::Esc => Some(None),
            KeyCode::Backspace => {
                self.selected = false;
                self.input.pop();
                None
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.selected {
                    self.input.clear();
                    self.selected = false;
                }
                if self.input.chars().count() < MAX_PROMPT_INPUT {
                    self.input.push(c);
                }
                None
            }
            _ => None,
        }
    }

    fn overlay(&self, message: &str) -> Overlay {
        Overlay::Prompt {
            message: message.to_string(),
            input: self.input.clone(),
            selected: self.selected,
        }
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear_cells(&mut self) {
        self.board.clear();
        self.geometry = None;
    }

    fn create_cell_visual(&mut self, row: usize, col: usize, size_px: f32) -> CellHandle {
        self.board.push(row, col, size_px)
    }

    fn paint_cell(&mut self, cell: CellHandle, color: Rgb, glow: Option<Glow>) {
        self.board.paint(cell, color, glow);
    }

    fn reset_cell(&mut self, cell: CellHandle) {
        self.board.reset(cell);
    }

    fn set_text(&mut self, label: Label, text: &str) {
        self.board.set_label(label, text);
    }

    fn prompt_integer(&mut self, message: &str, default: usize) -> SketchResult<Option<String>> {
        let previous = std::mem::replace(&mut self.overlay, Overlay::None);
        let mut line = PromptLine::with_default(default);

        let reply = loop {
            self.overlay = line.overlay(message);
            let key = self.next_key()?;
            if let Some(reply) = line.apply(key) {
                break reply;
            }
        };

        self.overlay = previous;
        debug!("📝 Prompt reply: {:?}", reply);
        Ok(reply)
    }

    fn warn(&mut self, message: &str) -> SketchResult<()> {
        let previous = std::mem::replace(
            &mut self.overlay,
            Overlay::Warning {
                message: message.to_string(),
            },
        );
        let result = self.next_key().map(|_| ());
        self.overlay = previous;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_prompt_editing() {
        let mut line = PromptLine::with_default(16);
        assert_eq!(line.apply(key(KeyCode::Backspace)), None);
        assert_eq!(line.apply(key(KeyCode::Backspace)), None);
        assert_eq!(line.apply(key(KeyCode::Char('4'))), None);
        assert_eq!(line.apply(key(KeyCode::Char('2'))), None);
        assert_eq!(line.apply(key(KeyCode::Enter)), Some(Some("42".to_string())));
        assert_eq!(line.apply(key(KeyCode::Esc)), Some(None));
    }

    #[test]
    fn test_typing_replaces_the_default() {
        let mut line = PromptLine::with_default(16);
        assert!(line.selected);
        line.apply(key(KeyCode::Char('3')));
        line.apply(key(KeyCode::Char('2')));
        assert!(!line.selected);

        let reply = line.apply(key(KeyCode::Enter)).flatten().unwrap();
        assert_eq!(reply, "32");
        assert_eq!(crate::parse_grid_size(&reply).unwrap(), 32);
    }

    #[test]
    fn test_enter_accepts_untouched_default() {
        let mut line = PromptLine::with_default(16);
        assert_eq!(line.apply(key(KeyCode::Enter)), Some(Some("16".to_string())));
    }

    #[test]
    fn test_backspace_edits_the_default() {
        let mut line = PromptLine::with_default(16);
        line.apply(key(KeyCode::Backspace));
        line.apply(key(KeyCode::Char('2')));
        assert_eq!(line.apply(key(KeyCode::Enter)), Some(Some("12".to_string())));
    }

    #[test]
    fn test_control_keys_do_not_type() {
        let mut line = PromptLine::with_default(16);
        assert_eq!(
            line.apply(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(None)
        );

        let mut line = PromptLine::with_default(16);
        assert_eq!(line.apply(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)), None);
        assert_eq!(line.apply(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)), None);
        assert_eq!(line, PromptLine::with_default(16));
    }

    #[test]
    fn test_prompt_input_is_bounded() {
        let mut line = PromptLine::with_default(16);
        for _ in 0..40 {
            line.apply(key(KeyCode::Char('9')));
        }
        assert_eq!(line.input.len(), MAX_PROMPT_INPUT);
    }

    #[test]
    fn test_draw_records_geometry() {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut surface = TerminalSurface::new(terminal, false, true);
        for index in 0..16 {
            surface.create_cell_visual(index / 4, index % 4, 160.0);
        }
        assert!(surface.geometry().is_none());

        surface.draw().unwrap();
        assert_eq!(surface.geometry().map(|g| g.side), Some(4));

        surface.clear_cells();
        assert!(surface.geometry().is_none());
    }

    #[test]
    fn test_help_toggle() {
        let terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut surface = TerminalSurface::new(terminal, true, false);
        assert!(surface.help_visible());
        surface.toggle_help();
        assert!(!surface.help_visible());
    }
}
