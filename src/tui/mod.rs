// Terminal front end - mouse-driven drawing in the alternate screen

pub mod layout;
pub mod pointer;
pub mod render;
pub mod terminal_surface;

pub use layout::GridGeometry;
pub use pointer::PointerTracker;
pub use terminal_surface::TerminalSurface;

use crate::session::{KeyCommand, Session};
use crate::sketch_config::SketchConfig;
use crate::sketch_errors::SketchResult;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(50);

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    ToggleHelp,
    CloseHelp,
    Session(char),
    Ignore,
}

fn classify_key(key: &KeyEvent, help_visible: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if help_visible {
        return KeyAction::CloseHelp;
    }
    // Shortcuts take no modifiers beyond shift
    if !(key.modifiers - KeyModifiers::SHIFT).is_empty() {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' => KeyAction::ToggleHelp,
            other => KeyAction::Session(other),
        },
        _ => KeyAction::Ignore,
    }
}

/// Run the interactive drawing grid until the user quits
pub fn run(config: &SketchConfig) -> SketchResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_session(terminal, config);

    // Restore terminal even when the session failed
    let restored = restore_terminal();
    if let Err(e) = &result {
        error!("❌ Session ended with error: {}", e);
    }
    result.and(restored)
}

fn restore_terminal() -> SketchResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, cursor::Show)?;
    Ok(())
}

fn run_session<B: Backend>(terminal: Terminal<B>, config: &SketchConfig) -> SketchResult<()> {
    let surface = TerminalSurface::new(
        terminal,
        config.display.show_help_on_start,
        config.display.show_status_bar,
    );
    let mut session = Session::from_config(surface, config)?;
    let mut tracker = PointerTracker::new();
    info!("🚀 Interactive session started");

    loop {
        session.surface_mut().draw()?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match classify_key(&key, session.surface().help_visible()) {
                    KeyAction::Quit => break,
                    KeyAction::ToggleHelp | KeyAction::CloseHelp => {
                        session.surface_mut().toggle_help();
                    }
                    KeyAction::Session(c) => {
                        if session.handle_key(c)? == Some(KeyCommand::Resize) {
                            tracker.forget();
                        }
                    }
                    KeyAction::Ignore => {}
                }
            }
            Event::Mouse(mouse) => {
                let events = tracker.translate(mouse, session.surface().geometry());
                for (pointer_event, target) in events {
                    session.handle_pointer(pointer_event, target);
                }
            }
            // Next draw picks up the new size
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    info!("👋 Interactive session finished");
    Ok(())
}
