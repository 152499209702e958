//! Random composition: a fixed count of randomly placed, sized, and colored
//! shapes scattered across the surface.

use rand::Rng;
use rand::seq::SliceRandom;
use terrapin_types::error::CanvasError;
use terrapin_types::shape::DrawShape;
use tracing::debug;

use crate::canvas::{CanvasResult, TurtleCanvas};
use crate::dispatch;

/// Number of shapes in one composition.
pub const SHAPE_COUNT: usize = 12;

/// Colors sampled for each placed shape.
pub const PALETTE: [&str; 9] = [
    "red", "blue", "green", "purple", "orange", "gold", "magenta", "cyan", "black",
];

/// Substitute when the canvas rejects a palette entry.
const FALLBACK_COLOR: &str = "blue";

const SIZE_MIN: u32 = 30;
const SIZE_MAX: u32 = 120;
const X_EXTENT: i32 = 300;
const Y_EXTENT: i32 = 220;

/// Draw the composition: for each shape, lift the pen, jump to a random
/// position and heading, lower the pen, pick a palette color, and dispatch
/// a random concrete shape at a random size.
///
/// A rejected color falls back to the default without aborting the
/// remaining iterations; a lost window still ends the run immediately.
pub fn draw<C: TurtleCanvas, R: Rng>(canvas: &mut C, rng: &mut R) -> CanvasResult {
    for index in 0..SHAPE_COUNT {
        let shape = DrawShape::CONCRETE
            .choose(rng)
            .copied()
            .unwrap_or(DrawShape::Square);
        let size = rng.gen_range(SIZE_MIN..=SIZE_MAX);
        let x = rng.gen_range(-X_EXTENT..=X_EXTENT);
        let y = rng.gen_range(-Y_EXTENT..=Y_EXTENT);
        let heading = rng.gen_range(0..360);
        let color = PALETTE.choose(rng).copied().unwrap_or(FALLBACK_COLOR);

        canvas.pen_up()?;
        canvas.go_to(f64::from(x), f64::from(y))?;
        canvas.set_heading(f64::from(heading))?;
        canvas.pen_down()?;

        match canvas.set_color(color) {
            Ok(()) => {}
            Err(CanvasError::InvalidColor(name)) => {
                debug!(color = %name, index, "palette color rejected, using fallback");
                canvas.set_color(FALLBACK_COLOR)?;
            }
            Err(err) => return Err(err),
        }

        dispatch::draw_shape(canvas, shape, size)?;
    }
    Ok(())
}
