use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use taka_counter::{breakdown, format_taka, input_display, Denomination, RawInput, Rgb, Session};
use tracing::{debug, info};

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub struct App {
    pub session: Session,
    pub state: TableState,
    /// Text of the focused field as typed, which may not parse to its count
    pub editing: String,
}

impl App {
    pub fn new(session: Session) -> Self {
        let mut state = TableState::default();
        state.select(Some(0));

        let editing = input_display(session.ledger().count(Denomination::ALL[0]));
        Self {
            session,
            state,
            editing,
        }
    }

    /// Move focus and reload the field text from the stored count
    fn focus(&mut self, i: usize) {
        self.state.select(Some(i));
        self.sync_editing();
    }

    fn sync_editing(&mut self) {
        self.editing = input_display(self.session.ledger().count(self.focused()));
    }

    /// Denomination whose field has focus
    pub fn focused(&self) -> Denomination {
        let i = self.state.selected().unwrap_or(0);
        Denomination::ALL[i.min(Denomination::COUNT - 1)]
    }

    pub fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) if i + 1 < Denomination::COUNT => i + 1,
            _ => 0,
        };
        self.focus(i);
    }

    pub fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(0) | None => Denomination::COUNT - 1,
            Some(i) => i - 1,
        };
        self.focus(i);
    }

    /// Append a character to the focused field, as an input-change event
    pub fn type_char(&mut self, c: char) {
        let d = self.focused();
        self.editing.push(c);
        self.session.set_count(d, &self.editing);
    }

    pub fn backspace(&mut self) {
        let d = self.focused();
        self.editing.pop();
        self.session.set_count(d, &self.editing);
    }

    pub fn clear_field(&mut self) {
        let d = self.focused();
        self.session.set_count(d, RawInput::Empty);
        self.editing.clear();
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.sync_editing();
    }

    /// Returns true when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous();
                } else {
                    self.next();
                }
            }
            KeyCode::BackTab => self.previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Enter => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => self.focus(0),
            KeyCode::End => self.focus(Denomination::COUNT - 1),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.clear_field(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('t') => self.session.toggle_theme(),
            _ => {}
        }
        false
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("counter screen started");

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("UI event loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) {
                debug!(total = %app.session.total(), "quit requested");
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let palette = app.session.theme().palette();

    // Paint the whole screen with the theme background first
    f.render_widget(
        Block::default().style(Style::default().bg(color(palette.background))),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar with theme indicator
            Constraint::Min(0),    // Denomination fields
            Constraint::Length(4), // Total amount
            Constraint::Length(3), // Key hints
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_table(f, chunks[1], app);
    render_total(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.session.theme().palette();

    let icon = if app.session.is_dark() { "☀" } else { "☾" };
    let header_text = vec![Line::from(vec![
        Span::styled(
            " ৳ Currency Counter",
            Style::default()
                .fg(color(palette.text))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{} {} (t)", icon, app.session.theme().as_str()),
            Style::default().fg(color(palette.toggle)),
        ),
    ])];

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(color(palette.surface)))
            .border_style(Style::default().fg(color(palette.muted))),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let palette = app.session.theme().palette();
    let focused = app.focused();

    let header_cells = ["Note", "Count", "Breakdown"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(color(palette.muted))
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .session
        .counts()
        .iter()
        .map(|entry| {
            let field = if entry.denomination == focused {
                format!("{}▌", app.editing)
            } else {
                input_display(entry.count)
            };

            let cells = vec![
                Cell::from(format!("{} –", entry.denomination)).style(
                    Style::default()
                        .fg(color(palette.text))
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(format!("{:>10}", field)).style(
                    Style::default()
                        .fg(color(palette.text))
                        .bg(color(palette.input)),
                ),
                Cell::from(breakdown(entry.denomination, entry.count).unwrap_or_default())
                    .style(Style::default().fg(color(palette.muted))),
            ];

            Row::new(cells).height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(color(palette.surface)))
            .border_style(Style::default().fg(color(palette.muted)))
            .title(" Notes "),
    )
    .highlight_style(
        Style::default()
            .fg(color(palette.focus))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_total(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.session.theme().palette();
    let on_bar = Style::default().fg(color(palette.on_total_bar));

    let content = vec![
        Line::from(Span::styled(
            "Total Amount:",
            on_bar.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_taka(app.session.total()),
            on_bar.add_modifier(Modifier::BOLD),
        )),
    ];

    let total = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .style(Style::default().bg(color(palette.total_bar))),
        );

    f.render_widget(total, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.session.theme().palette();
    let key = Style::default().fg(color(palette.focus));
    let text = Style::default().fg(color(palette.muted));

    let status_spans = vec![
        Span::styled("0-9", key),
        Span::styled(" Type | ", text),
        Span::styled("⌫/Del", key),
        Span::styled(" Erase | ", text),
        Span::styled("↑/↓", key),
        Span::styled(" Nav | ", text),
        Span::styled("r", Style::default().fg(color(palette.reset))),
        Span::styled(" Reset All | ", text),
        Span::styled("t", key),
        Span::styled(" Theme | ", text),
        Span::styled("q", Style::default().fg(color(palette.reset))),
        Span::styled(" Quit", text),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(color(palette.surface)))
            .border_style(Style::default().fg(color(palette.muted))),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_updates_focused_count() {
        let mut app = App::new(Session::new(false));
        assert_eq!(app.focused(), Denomination::Tk1000);

        type_str(&mut app, "5");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focused(), Denomination::Tk50);
        type_str(&mut app, "3");

        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 5);
        assert_eq!(app.session.ledger().count(Denomination::Tk50), 3);
        assert_eq!(app.session.total(), 5150);
    }

    #[test]
    fn test_multi_digit_and_backspace() {
        let mut app = App::new(Session::new(false));
        type_str(&mut app, "125");
        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 125);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 12);

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 0);
    }

    #[test]
    fn test_typed_negative_stores_zero() {
        let mut app = App::new(Session::new(false));
        type_str(&mut app, "-2");
        assert_eq!(app.editing, "-2");
        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 0);
        assert_eq!(app.session.total(), 0);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.editing, "-");
        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 0);

        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "2");
        assert_eq!(app.session.ledger().count(Denomination::Tk1000), 2);
    }

    #[test]
    fn test_field_text_reloads_on_focus_and_reset() {
        let mut app = App::new(Session::new(false));
        type_str(&mut app, "-");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.editing, "");
        type_str(&mut app, "4");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.focused(), Denomination::Tk1000);
        assert_eq!(app.editing, "");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.editing, "4");

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.editing, "");
        assert_eq!(app.session.total(), 0);
        type_str(&mut app, "1");
        assert_eq!(app.session.ledger().count(Denomination::Tk500), 1);
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = App::new(Session::new(false));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focused(), Denomination::Tk5);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), Denomination::Tk1000);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused(), Denomination::Tk5);
    }

    #[test]
    fn test_reset_and_theme_keys() {
        let mut app = App::new(Session::new(false));
        type_str(&mut app, "9");

        press(&mut app, KeyCode::Char('t'));
        assert!(app.session.is_dark());
        assert_eq!(app.session.total(), 9000);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.total(), 0);
        assert!(app.session.is_dark());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Session::new(false));
        assert!(!press(&mut app, KeyCode::Char('1')));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_render_shows_total_and_breakdown() {
        let mut app = App::new(Session::new(false));
        app.session.set_count(Denomination::Tk1000, 5u64);
        app.session.set_count(Denomination::Tk50, 3u64);

        let screen = render(&mut app);
        assert!(screen.contains("Currency Counter"));
        assert!(screen.contains("Total Amount:"));
        assert!(screen.contains("5,150"));
        assert!(screen.contains("1000 x 5 = "));
        assert!(screen.contains("50 x 3 = "));
        assert!(!screen.contains("500 x"));
    }

    #[test]
    fn test_render_in_dark_mode() {
        let mut app = App::new(Session::new(true));
        let screen = render(&mut app);
        assert!(screen.contains("dark"));
        assert!(screen.contains("Total Amount:"));
    }
}
