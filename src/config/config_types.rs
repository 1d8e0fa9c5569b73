// src/config/config_types.rs
//
// Config types for the app. Defaults match the stock motif.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// stroke width = min(w, h) / stroke_factor
    #[serde(default = "default_stroke_factor")]
    pub stroke_factor: f32,
    /// ball radius = min(w, h) / radius_factor
    #[serde(default = "default_radius_factor")]
    pub radius_factor: f32,
    #[serde(default = "default_background")]
    pub background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_parts")]
    pub parts: usize,
    /// progress added per tick
    #[serde(default = "default_step")]
    pub step: f32,
    /// time between ticks
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_title(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_factor: default_stroke_factor(),
            radius_factor: default_radius_factor(),
            background: default_background(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            parts: default_parts(),
            step: default_step(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    800
}

fn default_title() -> String {
    "hvbpath".to_string()
}

fn default_stroke_factor() -> f32 {
    90.0
}

fn default_radius_factor() -> f32 {
    12.2
}

fn default_background() -> String {
    "#BDBDBD".to_string()
}

fn default_parts() -> usize {
    3
}

fn default_step() -> f32 {
    0.02 / default_parts() as f32
}

fn default_delay_ms() -> u64 {
    20
}

fn default_colors() -> Vec<String> {
    ["#F44336", "#03A9F4", "#009688", "#3F51B5", "#4CAF50"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Parsed colors, built once from `StyleConfig` and `PaletteConfig`.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: nannou::prelude::Rgb<f32>,
    pub palette: Vec<nannou::prelude::Rgb<f32>>,
}
