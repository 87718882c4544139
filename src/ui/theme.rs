use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub chip: Color,
    pub chip_text: Color,
    pub accent: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),   // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),      // #A9B1D6 Light Blue
            chip: Color::Rgb(52, 59, 88),         // #343B58 Slate
            chip_text: Color::Rgb(192, 202, 245), // #C0CAF5 Pale Blue
            accent: Color::Rgb(247, 118, 142),    // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),    // #646E96 Dimmed Blue
        }
    }

    /// Default theme is midnight
    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn chip() -> Color {
        Theme::current().chip
    }
    pub fn chip_text() -> Color {
        Theme::current().chip_text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
