//! Ratatui shell: scene panel on the left, status pane on the right,
//! input line along the bottom.
//!
//! There is no image decoding here; the scene panel shows the room's
//! asset key and the most recent audio cue. The display owns the
//! terminal: raw mode and the alternate screen are entered on creation
//! and restored on drop, so the shell can never strand the user's
//! terminal in a broken state mid-game.

use crate::cues::Cue;
use crate::display_trait::{DisplayError, GameDisplay};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::io::{self, Stdout};

pub struct RatatuiDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    status: String,
    image_key: String,
    input: String,
    last_cue: Option<Cue>,
}

impl RatatuiDisplay {
    pub fn new() -> Result<Self, DisplayError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal =
            Terminal::new(backend).map_err(|e| DisplayError::new(format!("terminal: {}", e)))?;

        Ok(RatatuiDisplay {
            terminal,
            status: String::new(),
            image_key: String::new(),
            input: String::new(),
            last_cue: None,
        })
    }

    fn render(&mut self) -> Result<(), DisplayError> {
        let status = self.status.clone();
        let image_key = self.image_key.clone();
        let input = format!("> {}", self.input);
        let cue_line = match self.last_cue {
            Some(cue) => format!("audio: {}", cue.asset()),
            None => String::new(),
        };

        self.terminal
            .draw(|f| {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(1), Constraint::Length(3)])
                    .split(f.size());
                let panes = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(rows[0]);

                let scene_text = vec![
                    Line::from(""),
                    Line::from(image_key.as_str()),
                    Line::from(""),
                    Line::from(cue_line.as_str()),
                ];
                let scene = Paragraph::new(scene_text)
                    .style(Style::default().fg(Color::Magenta))
                    .block(Block::default().borders(Borders::ALL).title("scene"));
                f.render_widget(scene, panes[0]);

                let status_pane = Paragraph::new(status.as_str())
                    .wrap(Wrap { trim: false })
                    .block(Block::default().borders(Borders::ALL).title("status"));
                f.render_widget(status_pane, panes[1]);

                let input_pane = Paragraph::new(input.as_str())
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .block(Block::default().borders(Borders::ALL).title("command"));
                f.render_widget(input_pane, rows[1]);
            })
            .map_err(|e| DisplayError::new(format!("draw: {}", e)))?;

        Ok(())
    }
}

impl GameDisplay for RatatuiDisplay {
    fn render_status(&mut self, text: &str) -> Result<(), DisplayError> {
        self.status = text.to_string();
        self.render()
    }

    fn render_room_image(&mut self, image_key: &str) -> Result<(), DisplayError> {
        self.image_key = image_key.to_string();
        self.render()
    }

    fn play_cue(&mut self, cue: Cue) {
        self.last_cue = Some(cue);
        if let Err(e) = self.render() {
            debug!("cue render failed: {}", e);
        }
    }

    fn echo_input(&mut self, line: &str) {
        self.input = line.to_string();
        if let Err(e) = self.render() {
            debug!("input echo render failed: {}", e);
        }
    }

    fn handle_resize(&mut self, _width: u16, _height: u16) {
        // ratatui re-measures on draw
        let _ = self.render();
    }
}

impl Drop for RatatuiDisplay {
    fn drop(&mut self) {
        // Always restore the terminal, even on panic unwind
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}
