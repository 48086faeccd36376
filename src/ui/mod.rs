pub mod app;
pub mod render;

use crossterm::event::Event;
use ratatui::{Terminal, backend::Backend};

use crate::error::Result;
use app::App;

/// Draws `app`, then applies each event and redraws, until the app asks to
/// quit or `events` runs out.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: impl IntoIterator<Item = Event>,
) -> Result<()> {
    terminal.draw(|f| render::draw(f, app))?;

    for event in events {
        if let Event::Key(key) = event {
            app.handle_key(key);
        }
        if app.should_quit {
            break;
        }
        terminal.draw(|f| render::draw(f, app))?;
    }

    Ok(())
}
