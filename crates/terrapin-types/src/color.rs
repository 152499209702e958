//! RGB colors and name resolution.
//!
//! Colors travel through the system as free-form strings (the prompts accept
//! anything) and are only resolved here, at the canvas boundary. Resolution
//! accepts `#rrggbb` / `#rgb` hex literals and a fixed table of common names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Recognized color names (CSS values), lowercase.
const NAMED: &[(&str, Rgb)] = &[
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    ("chocolate", Rgb::new(0xd2, 0x69, 0x1e)),
    ("crimson", Rgb::new(0xdc, 0x14, 0x3c)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("gold", Rgb::new(0xff, 0xd7, 0x00)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("indigo", Rgb::new(0x4b, 0x00, 0x82)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("peru", Rgb::new(0xcd, 0x85, 0x3f)),
    ("pink", Rgb::new(0xff, 0xc0, 0xcb)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("saddlebrown", Rgb::new(0x8b, 0x45, 0x13)),
    ("salmon", Rgb::new(0xfa, 0x80, 0x72)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("tan", Rgb::new(0xd2, 0xb4, 0x8c)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("violet", Rgb::new(0xee, 0x82, 0xee)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
];

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if let Some(hex) = name.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError(s.trim().to_string()));
        }
        NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, rgb)| *rgb)
            .ok_or_else(|| ColorParseError(s.trim().to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
