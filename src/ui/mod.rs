pub mod chips;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use chips::{chip_row, detail_line, input_line, ChipLayout};
pub use terminal::{TuiManager, UiError};
pub use terminal_guard::TerminalGuard;
