pub mod app;
pub mod mode;
pub mod render_state;

pub use app::App;
pub use mode::AppMode;
pub use render_state::RenderState;
