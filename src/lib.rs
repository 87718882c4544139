pub mod app;
pub mod chip;
pub mod ui;
