// src/config/config_load.rs
//
// loading of config.toml

use super::config_types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 800,
                height: 800,
            },
            animation: AnimationConfig {
                segment_count: 3,
                scale_gap: 0.02,
                tick_interval_ms: 20,
            },
            style: StyleConfig {
                size_factor: 4.0,
                background_color: HexColor::from_rgb8(0xbd, 0xbd, 0xbd),
                colors: vec![
                    HexColor::from_rgb8(0x67, 0x3a, 0xb7),
                    HexColor::from_rgb8(0xf4, 0x43, 0x36),
                    HexColor::from_rgb8(0x4c, 0xaf, 0x50),
                    HexColor::from_rgb8(0x21, 0x96, 0xf3),
                    HexColor::from_rgb8(0xff, 0x98, 0x00),
                ],
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_path("config.toml")
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the animation core cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::ZeroViewport {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if self.animation.segment_count == 0 {
            return Err(ConfigError::ZeroSegments);
        }
        if self.animation.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        let gap = self.animation.scale_gap;
        if gap.is_nan() || gap <= 0.0 {
            return Err(ConfigError::InvalidScaleGap(gap));
        }
        let size_factor = self.style.size_factor;
        if size_factor.is_nan() || size_factor <= 0.0 {
            return Err(ConfigError::InvalidSizeFactor(size_factor));
        }
        if self.style.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.window.width as f32, self.window.height as f32)
    }
}
