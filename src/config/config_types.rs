// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("viewport must be non-zero, got {width}x{height}")]
    ZeroViewport { width: u32, height: u32 },

    #[error("segment_count must be at least 1")]
    ZeroSegments,

    #[error("tick_interval_ms must be at least 1")]
    ZeroTickInterval,

    #[error("scale_gap must be positive, got {0}")]
    InvalidScaleGap(f32),

    #[error("size_factor must be positive, got {0}")]
    InvalidSizeFactor(f32),
}

/// A `#rrggbb` color as written in config.toml.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Rgb);

impl HexColor {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(text.to_string());
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn color(&self) -> Rgb {
        self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    pub segment_count: usize,
    pub scale_gap: f32,
    pub tick_interval_ms: u32,
}

impl AnimationConfig {
    /// Scale travelled by a node on every tick.
    pub fn scale_step(&self) -> f32 {
        self.scale_gap / self.segment_count as f32
    }

    pub fn tick_interval(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub size_factor: f32,
    pub background_color: HexColor,
    pub colors: Vec<HexColor>,
}

impl StyleConfig {
    pub fn palette(&self) -> Vec<Rgb> {
        self.colors.iter().map(HexColor::color).collect()
    }
}
