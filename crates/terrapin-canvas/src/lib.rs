//! Headless canvas backend for Terrapin.
//!
//! Implements the core `TurtleCanvas` trait over an in-memory turtle scene
//! that is rendered to an SVG document when the window closes, plus the
//! session configuration loader.

pub mod config;
pub mod scene;
pub mod svg;
pub mod window;

pub use window::SvgCanvas;
