pub mod app;
pub mod form;
pub mod input;
pub mod list_renderer;
pub mod render;
pub mod tabs;
pub mod theme;

pub use app::run;
