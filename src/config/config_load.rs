// src/config/config_load.rs
//
// loading config.toml

use anyhow::{bail, ensure, Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::config_types::*;
use crate::utilities::parse_hex_color;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Where the active config came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl Config {
    pub fn load() -> Result<(Self, ConfigSource)> {
        // First try the executable's directory, then the working directory
        let candidates = [Self::exe_dir_path(), Some(PathBuf::from(CONFIG_FILE))];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                let config = Self::load_from_path(&path)?;
                info!("Loaded config from {}", path.display());
                return Ok((config, ConfigSource::File(path)));
            }
        }

        warn!("No {} found, using built-in defaults", CONFIG_FILE);
        Ok((Self::default(), ConfigSource::Defaults))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero"
        );
        ensure!(
            self.style.stroke_factor > 0.0,
            "style.stroke_factor must be positive"
        );
        ensure!(
            self.style.radius_factor > 0.0,
            "style.radius_factor must be positive"
        );
        ensure!(self.animation.parts > 0, "animation.parts must be at least 1");
        ensure!(self.animation.step > 0.0, "animation.step must be positive");
        ensure!(self.animation.delay_ms > 0, "animation.delay_ms must be positive");
        if self.palette.colors.is_empty() {
            bail!("palette.colors must contain at least one color");
        }
        self.theme().map(|_| ())
    }

    pub fn theme(&self) -> Result<Theme> {
        let background = parse_hex_color(&self.style.background).context("style.background")?;
        let palette = self
            .palette
            .colors
            .iter()
            .enumerate()
            .map(|(i, c)| parse_hex_color(c).with_context(|| format!("palette.colors[{}]", i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Theme {
            background,
            palette,
        })
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.animation.delay_ms)
    }
}
