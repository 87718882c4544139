use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mode::AppMode;
use super::render_state::RenderState;
use crate::chip::TokenListEditor;
use crate::ui::chips::ChipLayout;

/// Host application state: owns the editor, routes decoded terminal
/// events to it, and tracks which chip the mouse is over.
pub struct App {
    mode: AppMode,
    editor: TokenListEditor,
    hovered: Option<usize>,
    release_events: bool,
}

impl App {
    /// `release_events` reports whether the terminal delivers key release
    /// events. When it does not, the release phase of the editor protocol
    /// is synthesized immediately after each press phase, preserving the
    /// press-then-release ordering the editor expects.
    pub fn new(editor: TokenListEditor, release_events: bool) -> Self {
        Self {
            mode: AppMode::Editing,
            editor,
            hovered: None,
            release_events,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn editor(&self) -> &TokenListEditor {
        &self.editor
    }

    pub fn handle_event(&mut self, event: &Event, layout: &ChipLayout) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, layout),
            Event::FocusLost => {
                self.editor.handle_blur();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if is_quit_key(key) {
            if key.kind != KeyEventKind::Release {
                // leaving the widget counts as focus loss: commit pending
                self.editor.handle_blur();
                self.mode = AppMode::Quit;
            }
            return;
        }
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.editor.handle_key_press(key);
                if !self.release_events {
                    self.editor.handle_key_release(key);
                }
            }
            KeyEventKind::Release => {
                self.editor.handle_key_release(key);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, layout: &ChipLayout) {
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered = layout.chip_at(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = layout.chip_at(mouse.column, mouse.row) {
                    self.editor.click_chip(index);
                    // indices shifted under the cursor
                    self.hovered = None;
                }
            }
            _ => {}
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            tokens: self.editor.tokens().to_vec(),
            pending: self.editor.pending().to_string(),
            cursor_col: self.editor.pending_width(),
            disabled: self.editor.is_disabled(),
            hovered: self.hovered,
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
