pub mod animation;
pub mod config;
pub mod draw;
pub mod render;
pub mod utilities;
