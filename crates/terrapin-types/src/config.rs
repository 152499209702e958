//! Session configuration.
//!
//! `SessionConfig` represents the optional `terrapin.toml` that controls
//! default drawing preferences, the window geometry, and where the rendered
//! drawing is written. All fields have sensible defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::prefs::{DEFAULT_COLOR, DEFAULT_SIZE, DEFAULT_SPEED, DrawingPreferences};
use crate::shape::{Appearance, DrawShape};

/// Top-level configuration for a drawing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Default cursor speed, clamped to 0..=10.
    #[serde(default = "default_speed")]
    pub speed: u8,

    /// Default cursor appearance.
    #[serde(default)]
    pub appearance: Appearance,

    /// Default drawing color name.
    #[serde(default = "default_color")]
    pub color: String,

    /// Default shape to draw.
    #[serde(default)]
    pub shape: DrawShape,

    /// Default shape size in pixels, floored at 1.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Title of the drawing window.
    #[serde(default = "default_title")]
    pub window_title: String,

    /// Window width in pixels.
    #[serde(default = "default_width")]
    pub window_width: u32,

    /// Window height in pixels.
    #[serde(default = "default_height")]
    pub window_height: u32,

    /// Where the rendered SVG is written when the window closes.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_speed() -> u8 {
    DEFAULT_SPEED
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_title() -> String {
    "Turtle Graphics".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_output() -> PathBuf {
    PathBuf::from("drawing.svg")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            appearance: Appearance::default(),
            color: default_color(),
            shape: DrawShape::default(),
            size: default_size(),
            window_title: default_title(),
            window_width: default_width(),
            window_height: default_height(),
            output: default_output(),
        }
    }
}

impl SessionConfig {
    /// Build the per-iteration preferences from the configured defaults.
    ///
    /// Out-of-range configured values are clamped here so the preference
    /// invariants hold no matter what the file said.
    pub fn preferences(&self) -> DrawingPreferences {
        DrawingPreferences {
            speed: DrawingPreferences::clamp_speed(i64::from(self.speed)),
            appearance: self.appearance,
            color: self.color.clone(),
            shape: self.shape,
            size: DrawingPreferences::clamp_size(i64::from(self.size)),
        }
    }
}
