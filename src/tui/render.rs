// Frame rendering for the terminal front end

use crate::color::Rgb;
use crate::surface::{Label, VisualBoard};
use crate::tui::layout::GridGeometry;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Modal content drawn over the main screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    /// `selected` marks an untouched default that typing will replace
    Prompt {
        message: String,
        input: String,
        selected: bool,
    },
    Warning { message: String },
}

pub struct RenderOptions {
    pub show_status_bar: bool,
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Draw the whole screen and return where the grid ended up
pub fn render_frame(
    f: &mut Frame,
    board: &VisualBoard,
    overlay: &Overlay,
    options: &RenderOptions,
) -> Option<GridGeometry> {
    let status_height = if options.show_status_bar { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header
            Constraint::Min(3),                // Grid area
            Constraint::Length(status_height), // Key bindings
        ])
        .split(f.area());

    render_header(f, chunks[0], board);
    let geometry = render_grid(f, chunks[1], board);
    if options.show_status_bar {
        render_status(f, chunks[2]);
    }

    match overlay {
        Overlay::None => {}
        Overlay::Help => render_help(f),
        Overlay::Prompt {
            message,
            input,
            selected,
        } => render_prompt(f, message, input, *selected),
        Overlay::Warning { message } => render_warning(f, message),
    }

    geometry
}

fn render_header(f: &mut Frame, area: Rect, board: &VisualBoard) {
    let label = |label: Label| board.label(label).unwrap_or("").to_string();

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Grid: ", Style::default().fg(Color::White)),
            Span::styled(label(Label::GridSize), Style::default().fg(Color::Green)),
            Span::raw("   "),
            Span::styled("Mode: ", Style::default().fg(Color::White)),
            Span::styled(
                label(Label::CurrentMode),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            label(Label::Instructions),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title("🎨 E-Sketch"))
    .wrap(Wrap { trim: true });

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, board: &VisualBoard) -> Option<GridGeometry> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(board.label(Label::ToggleButton).unwrap_or("").to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(geometry) = GridGeometry::fit(inner, board.side()) else {
        let msg = Paragraph::new("Area too small for grid display")
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(msg, inner);
        return None;
    };

    let lines: Vec<Line> = (0..geometry.area.height)
        .map(|dy| grid_line(board, &geometry, geometry.area.y + dy))
        .collect();
    f.render_widget(Paragraph::new(lines), geometry.area);

    Some(geometry)
}

/// One screen row of the grid, merging runs of identically styled characters
fn grid_line(board: &VisualBoard, geometry: &GridGeometry, y: u16) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<Style> = None;

    for dx in 0..geometry.area.width {
        let (glyph, style) = geometry
            .cell_at(geometry.area.x + dx, y)
            .and_then(|(row, col)| board.visual_at(row, col))
            .map(|visual| {
                if visual.painted {
                    let mut style = Style::default().bg(to_color(visual.fill));
                    if visual.glow.is_some() {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    (' ', style)
                } else {
                    ('·', Style::default().fg(Color::DarkGray).bg(Color::Black))
                }
            })
            .unwrap_or((' ', Style::default()));

        if run_style != Some(style) {
            if let Some(previous) = run_style {
                spans.push(Span::styled(std::mem::take(&mut run), previous));
            }
            run_style = Some(style);
        }
        run.push(glyph);
    }
    if let Some(style) = run_style {
        spans.push(Span::styled(run, style));
    }

    Line::from(spans)
}

fn render_status(f: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let status = Paragraph::new(Line::from(vec![
        key("m"),
        Span::raw(" toggle mode  "),
        key("r"),
        Span::raw(" reset  "),
        key("n"),
        Span::raw(" new grid  "),
        key("h"),
        Span::raw(" help  "),
        key("q"),
        Span::raw(" quit"),
    ]))
    .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame) {
    let help_text = vec![
        Line::from("🎨 E-Sketch - Help"),
        Line::from(""),
        Line::from("Mouse:"),
        Line::from("  Move over squares to draw (Hover, Rainbow, Darkening)"),
        Line::from("  Click and drag to draw (Click & Drag)"),
        Line::from("  Clicking a square always draws on it"),
        Line::from(""),
        Line::from("Keyboard Commands:"),
        Line::from("  m          - Toggle drawing mode"),
        Line::from("  r          - Reset the grid"),
        Line::from("  n          - New grid (1-100 squares per side)"),
        Line::from("  h          - Toggle this help screen"),
        Line::from("  q / Esc    - Quit"),
        Line::from(""),
        Line::from("Modes:"),
        Line::from(vec![
            Span::styled("  █ ", Style::default().fg(Color::Cyan)),
            Span::raw("Hover / Click & Drag - cyan"),
        ]),
        Line::from(vec![
            Span::styled("  █ ", Style::default().fg(Color::Magenta)),
            Span::raw("Rainbow - random ROYGBIV color"),
        ]),
        Line::from(vec![
            Span::styled("  █ ", Style::default().fg(Color::LightGreen)),
            Span::raw("Progressive Darkening - 10% darker per pass"),
        ]),
        Line::from(""),
        Line::from("Press any key to close this help screen"),
    ];

    let popup_area = centered_rect(70, 80, f.area());
    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));

    f.render_widget(Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

fn render_prompt(f: &mut Frame, message: &str, input: &str, selected: bool) {
    let mut input_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if selected {
        input_style = input_style.add_modifier(Modifier::REVERSED);
    }

    let popup_area = centered_rect(60, 30, f.area());
    let prompt = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(input.to_string(), input_style),
            Span::styled("_", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to confirm, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("New Grid")
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(prompt, popup_area);
}

fn render_warning(f: &mut Frame, message: &str) {
    let popup_area = centered_rect(50, 20, f.area());
    let warning = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("⚠️ {}", message),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Invalid Size")
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(warning, popup_area);
}

/// A `percent_x` by `percent_y` share of `area`, centered in it
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [band] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(band);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CYAN;
    use ratatui::{backend::TestBackend, Terminal};

    fn board(side: usize) -> VisualBoard {
        let mut board = VisualBoard::new();
        for index in 0..side * side {
            board.push(index / side, index % side, 640.0 / side as f32);
        }
        board.set_label(Label::GridSize, "2x2");
        board.set_label(Label::CurrentMode, "Hover");
        board
    }

    #[test]
    fn test_render_reports_geometry() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let board = board(2);
        let options = RenderOptions {
            show_status_bar: true,
        };

        let mut geometry = None;
        terminal
            .draw(|f| geometry = render_frame(f, &board, &Overlay::None, &options))
            .unwrap();

        let geometry = geometry.unwrap();
        assert_eq!(geometry.side, 2);
        assert_eq!(geometry.area.width, geometry.area.height * 2);
    }

    #[test]
    fn test_grid_line_merges_runs() {
        let mut board = board(2);
        board.paint(crate::surface::CellHandle(0), CYAN, None);
        let geometry = GridGeometry {
            area: Rect::new(0, 0, 4, 2),
            side: 2,
        };

        let line = grid_line(&board, &geometry, 0);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "  ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Rgb(0, 255, 255)));
        assert_eq!(line.spans[1].content, "··");
    }

    #[test]
    fn test_overlays_render() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let board = board(3);
        let options = RenderOptions {
            show_status_bar: false,
        };
        for overlay in [
            Overlay::Help,
            Overlay::Prompt {
                message: "size?".to_string(),
                input: "12".to_string(),
                selected: true,
            },
            Overlay::Warning {
                message: "bad".to_string(),
            },
        ] {
            terminal
                .draw(|f| {
                    render_frame(f, &board, &overlay, &options);
                })
                .unwrap();
        }
    }

    #[test]
    fn test_centered_rect() {
        let popup = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(popup, Rect::new(25, 10, 50, 20));

        let popup = centered_rect(60, 30, Rect::new(10, 5, 80, 20));
        assert_eq!((popup.width, popup.height), (48, 6));
        assert_eq!(popup.x, 10 + 16);
        assert_eq!(popup.y, 5 + 7);
    }
}
