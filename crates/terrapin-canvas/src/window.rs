//! SVG-backed drawing window.
//!
//! `SvgCanvas` implements the core `TurtleCanvas` trait headlessly: drawing
//! commands mutate a [`TurtleScene`], and closing the window renders the
//! scene to an SVG document on disk. A closed window reports
//! `WindowClosed` for every further call, mirroring a display surface that
//! disappeared out-of-band.

use std::fs;
use std::path::{Path, PathBuf};

use terrapin_core::canvas::{CanvasResult, TurtleCanvas};
use terrapin_types::color::Rgb;
use terrapin_types::config::SessionConfig;
use terrapin_types::error::CanvasError;
use tracing::debug;

use crate::scene::TurtleScene;
use crate::svg;

/// Cursor appearances the canvas accepts.
pub const VALID_APPEARANCES: [&str; 6] = [
    "turtle", "arrow", "circle", "square", "triangle", "classic",
];

pub struct SvgCanvas {
    scene: TurtleScene,
    title: String,
    width: u32,
    height: u32,
    output: PathBuf,
    closed: bool,
}

impl SvgCanvas {
    /// Open a drawing window of the given dimensions. The rendered document
    /// is written to `output` when the window closes.
    pub fn open(title: &str, width: u32, height: u32, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        debug!(title, width, height, output = %output.display(), "opening drawing window");
        Self {
            scene: TurtleScene::new(),
            title: title.to_string(),
            width,
            height,
            output,
            closed: false,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::open(
            &config.window_title,
            config.window_width,
            config.window_height,
            config.output.clone(),
        )
    }

    pub fn scene(&self) -> &TurtleScene {
        &self.scene
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> CanvasResult {
        if self.closed {
            Err(CanvasError::WindowClosed)
        } else {
            Ok(())
        }
    }

    /// Resolve a color reply to its canonical name and value.
    fn resolve(&self, color: &str) -> CanvasResult<(String, Rgb)> {
        let name = color.trim().to_lowercase();
        let rgb = name
            .parse::<Rgb>()
            .map_err(|_| CanvasError::InvalidColor(color.trim().to_string()))?;
        Ok((name, rgb))
    }
}

impl TurtleCanvas for SvgCanvas {
    fn forward(&mut self, distance: f64) -> CanvasResult {
        self.ensure_open()?;
        self.scene.forward(distance);
        Ok(())
    }

    fn turn(&mut self, degrees: f64) -> CanvasResult {
        self.ensure_open()?;
        self.scene.turn(degrees);
        Ok(())
    }

    fn circle(&mut self, radius: f64) -> CanvasResult {
        self.ensure_open()?;
        self.scene.circle(radius);
        Ok(())
    }

    fn pen_up(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.scene.pen_up();
        Ok(())
    }

    fn pen_down(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.scene.pen_down();
        Ok(())
    }

    fn go_to(&mut self, x: f64, y: f64) -> CanvasResult {
        self.ensure_open()?;
        self.scene.go_to(x, y);
        Ok(())
    }

    fn set_heading(&mut self, degrees: f64) -> CanvasResult {
        self.ensure_open()?;
        self.scene.set_heading(degrees);
        Ok(())
    }

    fn home(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.scene.home();
        Ok(())
    }

    fn clear(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.scene.clear();
        Ok(())
    }

    fn set_speed(&mut self, speed: u8) -> CanvasResult {
        self.ensure_open()?;
        self.scene.set_speed(speed.min(10));
        Ok(())
    }

    fn set_color(&mut self, color: &str) -> CanvasResult {
        self.ensure_open()?;
        let (name, rgb) = self.resolve(color)?;
        self.scene.set_pen_color(name.clone(), rgb);
        self.scene.set_fill_color(name, rgb);
        Ok(())
    }

    fn set_pen_color(&mut self, color: &str) -> CanvasResult {
        self.ensure_open()?;
        let (name, rgb) = self.resolve(color)?;
        self.scene.set_pen_color(name, rgb);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> CanvasResult {
        self.ensure_open()?;
        let (name, rgb) = self.resolve(color)?;
        self.scene.set_fill_color(name, rgb);
        Ok(())
    }

    fn pen_color(&self) -> CanvasResult<String> {
        self.ensure_open()?;
        Ok(self.scene.pen_color().name.clone())
    }

    fn fill_color(&self) -> CanvasResult<String> {
        self.ensure_open()?;
        Ok(self.scene.fill_color().name.clone())
    }

    fn set_appearance(&mut self, appearance: &str) -> CanvasResult {
        self.ensure_open()?;
        let name = appearance.trim().to_lowercase();
        if !VALID_APPEARANCES.contains(&name.as_str()) {
            return Err(CanvasError::InvalidAppearance(appearance.trim().to_string()));
        }
        self.scene.set_appearance(name);
        Ok(())
    }

    fn begin_fill(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.scene.begin_fill();
        Ok(())
    }

    fn end_fill(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.scene.end_fill();
        Ok(())
    }

    fn close(&mut self) -> CanvasResult {
        self.ensure_open()?;
        self.closed = true;
        let doc = svg::render(&self.scene, &self.title, self.width, self.height);
        fs::write(&self.output, doc).map_err(|err| CanvasError::Io(err.to_string()))?;
        debug!(path = %self.output.display(), "drawing written");
        Ok(())
    }
}
