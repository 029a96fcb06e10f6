pub mod config;
pub mod note;
pub mod sample;
pub mod task;

pub use config::*;
pub use note::*;
pub use task::*;
