pub mod ambient;
pub mod config_io;
pub mod state;
