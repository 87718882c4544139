use crossterm::event::KeyCode;

/// Keys that terminate the pending text and commit it as a new token.
pub const DELIMITERS: [KeyCode; 5] = [
    KeyCode::Tab,
    KeyCode::Enter,
    KeyCode::Char(' '),
    KeyCode::Char(','),
    KeyCode::Char(';'),
];

pub fn is_delimiter(code: KeyCode) -> bool {
    DELIMITERS.contains(&code)
}
