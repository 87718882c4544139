pub mod editor;
pub mod input_line;
pub mod keys;
pub mod list;

pub use editor::{Outcome, TokenListEditor};
pub use input_line::InputLine;
pub use list::{ChangeListener, TokenList};
