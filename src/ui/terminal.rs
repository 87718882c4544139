use crate::app::{App, AppMode};
use crate::ui::chips::{self, ChipLayout};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::colors;
use crossterm::event;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
    layout: ChipLayout,
}

impl TuiManager {
    pub fn new() -> Result<Self, UiError> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            guard,
            layout: ChipLayout::empty(),
        })
    }

    pub fn release_events(&self) -> bool {
        self.guard.release_events()
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> Result<(), UiError> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if event::poll(Duration::from_millis(50))? {
                let ev = event::read()?;
                // hit-testing uses the layout of the frame on screen
                app.handle_event(&ev, &self.layout);
                self.render_frame(app)?;
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> Result<(), UiError> {
        let state = app.render_state();
        let size = self.terminal.size()?;
        let full = Rect::new(0, 0, size.width, size.height);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // chip row
                Constraint::Length(1), // input line
                Constraint::Min(0),
                Constraint::Length(1), // detail line
            ])
            .split(full);

        let (chip_line, chip_layout) = chips::chip_row(&state.tokens, state.disabled, rows[0]);
        let input = chips::input_line(&state.pending);
        let detail = chips::detail_line(&state.tokens, state.hovered, state.disabled);
        let cursor_col = rows[1].x + 2 + state.cursor_col;
        let cursor_row = rows[1].y;

        self.terminal.draw(|frame| {
            let bg = Style::default().bg(colors::background());
            frame.render_widget(Paragraph::new(chip_line).style(bg), rows[0]);
            frame.render_widget(Paragraph::new(input).style(bg), rows[1]);
            frame.render_widget(Paragraph::new(detail).style(bg), rows[3]);
            frame.set_cursor_position((cursor_col, cursor_row));
        })?;

        self.layout = chip_layout;
        Ok(())
    }
}
