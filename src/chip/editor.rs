use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input_line::InputLine;
use super::keys;
use super::list::{ChangeListener, TokenList};

/// How the editor disposed of a key event.
///
/// `Suppressed` means the control's default handling for that key must not
/// run; `Passed` means the event was handled as ordinary text entry (or
/// not at all) and nothing further is required of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Suppressed,
    Passed,
}

/// Chip input editor: an ordered token list plus a single-line input
/// control for uncommitted text.
///
/// Keyboard handling is a two-phase protocol. On key press a delimiter
/// with non-empty pending text is suppressed but nothing mutates; the
/// commit happens on the matching key release (or on blur). This ordering
/// keeps the delimiter character from leaking into the input field, since
/// the press fires before the release.
pub struct TokenListEditor {
    list: TokenList,
    input: InputLine,
    disabled: bool,
}

impl TokenListEditor {
    pub fn new() -> Self {
        Self::with_tokens(vec![])
    }

    /// Seed the token list. Applied once; the editor never re-reads the
    /// source of these defaults afterwards.
    pub fn with_tokens(tokens: Vec<String>) -> Self {
        Self {
            list: TokenList::new(tokens),
            input: InputLine::new(),
            disabled: false,
        }
    }

    /// When set, chip removal by interaction is a no-op; the list still
    /// renders.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&[String]) + 'static,
    {
        self.list.set_on_change(Box::new(listener) as ChangeListener);
        self
    }

    pub fn tokens(&self) -> &[String] {
        self.list.tokens()
    }

    pub fn pending(&self) -> &str {
        self.input.value()
    }

    pub fn pending_width(&self) -> u16 {
        self.input.width()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Append `text` to the token list. Callers guarantee `text` is
    /// non-empty; clearing the pending text afterwards is their follow-up.
    pub fn add_token(&mut self, text: String) {
        self.list.push(text);
    }

    /// Remove the token at `index`, or the last one when omitted. A
    /// missing target is a silent no-op.
    pub fn remove_token(&mut self, index: Option<usize>) {
        self.list.remove(index);
    }

    /// Press phase. A delimiter over non-empty pending text is suppressed
    /// here so the character never reaches the field; the commit waits for
    /// the release phase. Everything else gets the control's default
    /// handling: character insertion and in-field backspace editing.
    pub fn handle_key_press(&mut self, key: &KeyEvent) -> Outcome {
        if keys::is_delimiter(key.code) && !self.input.is_empty() {
            return Outcome::Suppressed;
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Outcome::Passed;
        }
        match key.code {
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace if !self.input.is_empty() => self.input.delete_back(),
            _ => {}
        }
        Outcome::Passed
    }

    /// Release phase: the mutation half of the protocol.
    pub fn handle_key_release(&mut self, key: &KeyEvent) -> Outcome {
        if keys::is_delimiter(key.code) && !self.input.is_empty() {
            let text = self.input.value().to_string();
            self.add_token(text);
            self.input.clear();
            return Outcome::Suppressed;
        }
        if key.code == KeyCode::Backspace && self.input.is_empty() {
            self.remove_token(None);
            return Outcome::Suppressed;
        }
        Outcome::Passed
    }

    /// Focus loss commits whatever is pending so typed text is never
    /// silently dropped when the user navigates away.
    pub fn handle_blur(&mut self) -> Outcome {
        if self.input.is_empty() {
            return Outcome::Passed;
        }
        let text = self.input.value().to_string();
        self.add_token(text);
        self.input.clear();
        Outcome::Suppressed
    }

    /// Chip click: removal at that position, unless removal is disabled.
    pub fn click_chip(&mut self, index: usize) {
        if self.disabled {
            return;
        }
        self.remove_token(Some(index));
    }
}

impl Default for TokenListEditor {
    fn default() -> Self {
        Self::new()
    }
}
