// src/render/mod.rs
// Ties the animation state to the draw routines

pub mod renderer;

pub use renderer::Renderer;
