pub mod app;
pub mod screen;
pub mod theme;
