use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};
use crate::db::KeyValueStore;

/// How long to wait for input before feeding the app a tick event.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
        // Resize and other events just trigger a redraw.
        return Ok(None);
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop until the user quits, then cancels the timers.
pub fn run<S: KeyValueStore>(app: &mut App<S>, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while !app.quit {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        match poll(POLL_TIMEOUT)? {
            Some(AppEvent::KeyPress(key)) => {
                app.update(AppEvent::KeyPress(key));
                // Due ticks are still consumed while input keeps arriving.
                app.update(AppEvent::Tick);
            }
            _ => app.update(AppEvent::Tick),
        }
    }
    app.shutdown();
    Ok(())
}
