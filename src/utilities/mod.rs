pub mod color;
pub mod scale;

pub use color::parse_hex_color;
pub use scale::{bounded_progress, ease, phase_progress};
