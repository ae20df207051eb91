use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Clock is counting
    pub fn running() -> Color {
        Color::LightGreen
    }

    /// Clock is paused or idle
    pub fn paused() -> Color {
        Color::Yellow
    }

    /// Target reached
    pub fn done() -> Color {
        Color::LightRed
    }

    /// Focused form field
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Section titles and readouts
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
