mod form;
mod state;

use crossterm::event::KeyCode;

pub use form::{FormField, TargetForm};
pub use state::{App, TARGET_REACHED};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Form,
    Dashboard,
    Help,
}
