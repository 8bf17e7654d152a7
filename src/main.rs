mod app;
mod helpers;
mod reveal;
mod timer;
mod types;

use crate::{app::App, helpers::parse_args};

use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
};
use std::{
    io,
    time::{Duration, Instant},
};

const POLLING_RATE_MS: u64 = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (source, config) = parse_args();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, config);

    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| app.draw_ui(frame, now))?;
        terminal.show_cursor()?;

        if event::poll(Duration::from_millis(POLLING_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => break,
                    _ => app.handle_key(key),
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
