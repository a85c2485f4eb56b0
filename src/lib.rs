pub mod config;
pub mod error;
pub mod generate;
pub mod loader;
pub mod palette;
pub mod render;
pub mod zone;
// cmd and reports are binary modules (in main.rs).
