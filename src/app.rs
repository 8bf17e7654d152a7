use crate::{
    helpers::pick_text,
    reveal::{EnvMotion, RevealConfig, TextReveal},
    types::TextSource,
};

use ratatui::{
    crossterm::event::{self, KeyCode},
    prelude::*,
    widgets::*,
};
use std::time::Instant;
use tui_input::{Input, InputRequest};

pub struct App {
    source: TextSource,
    config: RevealConfig,
    reveal: TextReveal,
    input: Input,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl App {
    pub fn new(source: TextSource, config: RevealConfig) -> Self {
        let mut app = Self {
            source,
            config,
            reveal: TextReveal::new(&EnvMotion),
            input: Input::default(),
            started_at: None,
            finished_at: None,
        };

        let text = pick_text(&app.source);
        app.restart(&text, Instant::now());

        app
    }

    fn restart(&mut self, text: &str, now: Instant) {
        self.reveal.start(text, self.config.clone(), now);
        self.started_at = Some(now);
        self.finished_at = if self.reveal.is_complete() {
            Some(now)
        } else {
            None
        };
    }

    pub fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let typed = self.input.value().trim().to_string();
                if !typed.is_empty() {
                    self.input = Input::default();
                    self.restart(&typed, Instant::now());
                }
            }
            KeyCode::F(5) => {
                let text = pick_text(&self.source);
                self.restart(&text, Instant::now());
            }
            KeyCode::F(6) => {
                self.reveal.cancel();
            }
            KeyCode::Char(c) => {
                self.input.handle(InputRequest::InsertChar(c));
            }
            KeyCode::Backspace => {
                self.input.handle(InputRequest::DeletePrevChar);
            }
            KeyCode::Left => {
                self.input.handle(InputRequest::GoToPrevChar);
            }
            KeyCode::Right => {
                self.input.handle(InputRequest::GoToNextChar);
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.reveal.tick(now);

        if self.reveal.is_complete() && self.finished_at.is_none() {
            self.finished_at = Some(now);
        }
    }

    // 1s blink period, phase-locked to the start of the run.
    fn caret_visible(&self, now: Instant) -> bool {
        let elapsed_ms = self
            .started_at
            .map(|t| now.duration_since(t).as_millis())
            .unwrap_or(0);

        (elapsed_ms / 500) % 2 == 0
    }

    fn elapsed_secs(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(started) => {
                let until = self.finished_at.unwrap_or(now);

                until.duration_since(started).as_secs_f64()
            }
            None => 0.0,
        }
    }

    pub fn draw_ui(&self, f: &mut Frame, now: Instant) {
        let area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(3), // Title
                    Constraint::Min(5),    // Reveal (multi-line)
                    Constraint::Length(3), // Input
                    Constraint::Length(3), // Stats
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new("Terminal Typewriter").alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let reveal_block = Block::default().title("Reveal").borders(Borders::ALL);
        let mut revealed = self.reveal.prefix().to_string();
        if self.reveal.show_caret() && self.caret_visible(now) {
            revealed.push('|');
        }

        let reveal_paragraph = Paragraph::new(revealed)
            .block(reveal_block)
            .wrap(Wrap { trim: false });
        f.render_widget(reveal_paragraph, chunks[1]);

        let input_block = Block::default().title("Your Text").borders(Borders::ALL);
        let input_inner = input_block.inner(chunks[2]);
        let input_width = input_inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(input_width);

        let input_paragraph = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(input_block);
        f.render_widget(input_paragraph, chunks[2]);

        let cursor_x = input_inner.x + self.input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((cursor_x, input_inner.y));

        let stats_text = format!(
            "Time: {:.1}s | Glyphs: {}/{}",
            self.elapsed_secs(now),
            self.reveal.revealed(),
            self.reveal.glyph_count()
        );

        let status = if self.reveal.is_complete() {
            format!(
                "{} | Done! Type a line and press Enter, F5 for a new quote, ESC to quit.",
                stats_text
            )
        } else {
            stats_text
        };

        let stats_block = Block::default().title("Stats").borders(Borders::ALL);
        let stats_paragraph = Paragraph::new(status).block(stats_block);
        f.render_widget(stats_paragraph, chunks[3]);
    }
}
