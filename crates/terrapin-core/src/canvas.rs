//! TurtleCanvas trait definition.
//!
//! The core abstraction over the drawing surface. The session loop and the
//! dispatch translator drive the surface exclusively through this trait;
//! implementations live in `terrapin-canvas` (e.g., `SvgCanvas`).
//!
//! Every method is fallible because the window can disappear out-of-band at
//! any point: implementations report that as [`CanvasError::WindowClosed`].

use terrapin_types::error::CanvasError;

pub type CanvasResult<T = ()> = Result<T, CanvasError>;

/// A cursor with position, heading, and pen state on a drawing surface.
///
/// Headings are in degrees with 0 pointing along +x; positive turns are
/// clockwise in screen coordinates.
pub trait TurtleCanvas {
    /// Move `distance` pixels along the current heading, drawing if the pen
    /// is down.
    fn forward(&mut self, distance: f64) -> CanvasResult;

    /// Rotate by `degrees`; positive is clockwise.
    fn turn(&mut self, degrees: f64) -> CanvasResult;

    /// Draw a circle of `radius` tangent to the current position. The cursor
    /// position and heading are unchanged afterwards.
    fn circle(&mut self, radius: f64) -> CanvasResult;

    fn pen_up(&mut self) -> CanvasResult;

    fn pen_down(&mut self) -> CanvasResult;

    /// Jump to absolute coordinates, drawing on the way if the pen is down.
    fn go_to(&mut self, x: f64, y: f64) -> CanvasResult;

    fn set_heading(&mut self, degrees: f64) -> CanvasResult;

    /// Return to the origin and face along +x.
    fn home(&mut self) -> CanvasResult;

    /// Erase everything drawn so far; cursor state is untouched.
    fn clear(&mut self) -> CanvasResult;

    /// Cursor speed on the 0..=10 scale. Purely cosmetic for headless
    /// surfaces, which record it as metadata.
    fn set_speed(&mut self, speed: u8) -> CanvasResult;

    /// Set both pen and fill color. Fails with [`CanvasError::InvalidColor`]
    /// on names the surface cannot resolve.
    fn set_color(&mut self, color: &str) -> CanvasResult;

    fn set_pen_color(&mut self, color: &str) -> CanvasResult;

    fn set_fill_color(&mut self, color: &str) -> CanvasResult;

    /// The canonical name of the current pen color, as last accepted.
    fn pen_color(&self) -> CanvasResult<String>;

    /// The canonical name of the current fill color, as last accepted.
    fn fill_color(&self) -> CanvasResult<String>;

    /// Set the cursor's on-screen appearance. Fails with
    /// [`CanvasError::InvalidAppearance`] for names outside the fixed set.
    fn set_appearance(&mut self, appearance: &str) -> CanvasResult;

    /// Start capturing a fill region at the current position.
    fn begin_fill(&mut self) -> CanvasResult;

    /// Close and emit the captured fill region.
    fn end_fill(&mut self) -> CanvasResult;

    /// Release the drawing surface. Every later call reports
    /// [`CanvasError::WindowClosed`].
    fn close(&mut self) -> CanvasResult;
}
