pub mod config;
pub mod geometry;
pub mod vision;

pub use config::*;
pub use vision::*;
