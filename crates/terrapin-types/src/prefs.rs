//! Drawing preferences for one session iteration.

use crate::shape::{Appearance, DrawShape};

/// Default cursor speed (0 is fastest, 10 slowest-but-one on the 0..=10 scale).
pub const DEFAULT_SPEED: u8 = 5;
/// Default drawing color.
pub const DEFAULT_COLOR: &str = "blue";
/// Default shape size in pixels.
pub const DEFAULT_SIZE: u32 = 100;
/// Color a default-colored potato is promoted to.
pub const POTATO_COLOR: &str = "saddlebrown";

/// Everything one drawing iteration needs to know.
///
/// Constructed fresh per iteration, either from [`crate::config::SessionConfig`]
/// defaults or from the customization wizard, consumed by the dispatch step,
/// and discarded. Invariants: `speed` is within 0..=10 and `size` is at least
/// 1; both clamping helpers below enforce this at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingPreferences {
    pub speed: u8,
    pub appearance: Appearance,
    pub color: String,
    pub shape: DrawShape,
    pub size: u32,
}

impl Default for DrawingPreferences {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            appearance: Appearance::default(),
            color: DEFAULT_COLOR.to_string(),
            shape: DrawShape::default(),
            size: DEFAULT_SIZE,
        }
    }
}

impl DrawingPreferences {
    /// Clamp a raw speed reply into the 0..=10 scale.
    pub fn clamp_speed(raw: i64) -> u8 {
        raw.clamp(0, 10) as u8
    }

    /// Clamp a raw size reply to the 1-pixel floor.
    pub fn clamp_size(raw: i64) -> u32 {
        raw.clamp(1, i64::from(u32::MAX)) as u32
    }

    /// The color the drawing step should actually use.
    ///
    /// A potato left at the default blue is promoted to its natural
    /// saddlebrown; every other combination passes through unchanged.
    pub fn effective_color(&self) -> &str {
        if self.shape == DrawShape::Potato && self.color == DEFAULT_COLOR {
            POTATO_COLOR
        } else {
            &self.color
        }
    }
}
