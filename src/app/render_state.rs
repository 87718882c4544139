use crate::app::mode::AppMode;

/// Render state for UI components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub mode: AppMode,
    pub tokens: Vec<String>,
    pub pending: String,
    pub cursor_col: u16,
    pub disabled: bool,
    pub hovered: Option<usize>,
}

impl RenderState {
    /// Empty state for a freshly started session
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            tokens: vec![],
            pending: String::new(),
            cursor_col: 0,
            disabled: false,
            hovered: None,
        }
    }
}
