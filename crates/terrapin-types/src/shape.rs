//! Shape vocabulary: what the cursor can look like and what it can draw.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the cursor is displayed on the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Turtle,
    Arrow,
    Circle,
    Square,
    Triangle,
    Classic,
}

impl Appearance {
    /// Every recognized appearance, in prompt-listing order.
    pub const ALL: [Appearance; 6] = [
        Appearance::Turtle,
        Appearance::Arrow,
        Appearance::Circle,
        Appearance::Square,
        Appearance::Triangle,
        Appearance::Classic,
    ];
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Turtle => write!(f, "turtle"),
            Appearance::Arrow => write!(f, "arrow"),
            Appearance::Circle => write!(f, "circle"),
            Appearance::Square => write!(f, "square"),
            Appearance::Triangle => write!(f, "triangle"),
            Appearance::Classic => write!(f, "classic"),
        }
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "turtle" => Ok(Appearance::Turtle),
            "arrow" => Ok(Appearance::Arrow),
            "circle" => Ok(Appearance::Circle),
            "square" => Ok(Appearance::Square),
            "triangle" => Ok(Appearance::Triangle),
            "classic" => Ok(Appearance::Classic),
            other => Err(format!("invalid appearance: '{other}'")),
        }
    }
}

/// A figure the session can draw.
///
/// `Random` is a meta-shape: the session expands it into a composition of the
/// concrete shapes rather than dispatching it directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawShape {
    Circle,
    #[default]
    Square,
    Triangle,
    Pentagon,
    Hexagon,
    Star,
    Potato,
    Random,
}

impl DrawShape {
    /// Every drawable option, in prompt-listing order.
    pub const ALL: [DrawShape; 8] = [
        DrawShape::Circle,
        DrawShape::Square,
        DrawShape::Triangle,
        DrawShape::Pentagon,
        DrawShape::Hexagon,
        DrawShape::Star,
        DrawShape::Potato,
        DrawShape::Random,
    ];

    /// The shapes a random composition samples from (everything but `Random`).
    pub const CONCRETE: [DrawShape; 7] = [
        DrawShape::Circle,
        DrawShape::Square,
        DrawShape::Triangle,
        DrawShape::Pentagon,
        DrawShape::Hexagon,
        DrawShape::Star,
        DrawShape::Potato,
    ];
}

impl fmt::Display for DrawShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawShape::Circle => write!(f, "circle"),
            DrawShape::Square => write!(f, "square"),
            DrawShape::Triangle => write!(f, "triangle"),
            DrawShape::Pentagon => write!(f, "pentagon"),
            DrawShape::Hexagon => write!(f, "hexagon"),
            DrawShape::Star => write!(f, "star"),
            DrawShape::Potato => write!(f, "potato"),
            DrawShape::Random => write!(f, "random"),
        }
    }
}

impl FromStr for DrawShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(DrawShape::Circle),
            "square" => Ok(DrawShape::Square),
            "triangle" => Ok(DrawShape::Triangle),
            "pentagon" => Ok(DrawShape::Pentagon),
            "hexagon" => Ok(DrawShape::Hexagon),
            "star" => Ok(DrawShape::Star),
            // "poato" is a long-standing accepted typo alias.
            "potato" | "poato" => Ok(DrawShape::Potato),
            "random" => Ok(DrawShape::Random),
            other => Err(format!("invalid shape: '{other}'")),
        }
    }
}
