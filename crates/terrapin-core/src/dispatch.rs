//! Shape dispatch: translate a parsed shape and size into primitive calls.
//!
//! Each concrete shape maps to a fixed emission -- a perimeter walk for the
//! regular polygons, one circle call, or the potato outline. Unrecognized
//! shape *names* never reach this module; the parse boundary falls back to
//! the default square there, so nothing here can recurse.

use terrapin_types::shape::DrawShape;

use crate::canvas::{CanvasResult, TurtleCanvas};

/// Perimeter walk for a regular figure: `sides` repeats of forward(size)
/// followed by a constant signed turn (positive = clockwise).
#[derive(Debug, Clone, Copy)]
pub struct PolygonSpec {
    pub sides: u32,
    pub turn: f64,
}

pub const SQUARE: PolygonSpec = PolygonSpec { sides: 4, turn: 90.0 };
pub const TRIANGLE: PolygonSpec = PolygonSpec { sides: 3, turn: -120.0 };
pub const PENTAGON: PolygonSpec = PolygonSpec { sides: 5, turn: 72.0 };
pub const HEXAGON: PolygonSpec = PolygonSpec { sides: 6, turn: 60.0 };
pub const STAR: PolygonSpec = PolygonSpec { sides: 5, turn: 144.0 };

/// Potato outline: clockwise turn after each segment, segment length as a
/// fraction of the nominal size.
const POTATO_SEGMENTS: [(f64, f64); 10] = [
    (35.0, 0.40),
    (28.0, 0.48),
    (42.0, 0.36),
    (25.0, 0.50),
    (50.0, 0.34),
    (30.0, 0.46),
    (45.0, 0.38),
    (25.0, 0.47),
    (40.0, 0.41),
    (40.0, 0.39),
];

const POTATO_PEN: &str = "peru";
const POTATO_FILL: &str = "saddlebrown";

/// The perimeter walk a shape dispatches to, if it is a regular figure.
pub fn polygon_spec(shape: DrawShape) -> Option<PolygonSpec> {
    match shape {
        DrawShape::Square => Some(SQUARE),
        DrawShape::Triangle => Some(TRIANGLE),
        DrawShape::Pentagon => Some(PENTAGON),
        DrawShape::Hexagon => Some(HEXAGON),
        DrawShape::Star => Some(STAR),
        _ => None,
    }
}

/// Emit the primitive sequence for `shape` at the given linear size.
pub fn draw_shape<C: TurtleCanvas>(canvas: &mut C, shape: DrawShape, size: u32) -> CanvasResult {
    match shape {
        DrawShape::Circle => canvas.circle(f64::from(size) / 2.0),
        DrawShape::Potato => potato(canvas, size),
        // Random is expanded by the session via `random_art`; a stray Random
        // here draws the fallback square like any unusable shape.
        DrawShape::Random => polygon(canvas, SQUARE, size),
        DrawShape::Square => polygon(canvas, SQUARE, size),
        DrawShape::Triangle => polygon(canvas, TRIANGLE, size),
        DrawShape::Pentagon => polygon(canvas, PENTAGON, size),
        DrawShape::Hexagon => polygon(canvas, HEXAGON, size),
        DrawShape::Star => polygon(canvas, STAR, size),
    }
}

fn polygon<C: TurtleCanvas>(canvas: &mut C, spec: PolygonSpec, size: u32) -> CanvasResult {
    for _ in 0..spec.sides {
        canvas.forward(f64::from(size))?;
        canvas.turn(spec.turn)?;
    }
    Ok(())
}

/// Filled organic outline. Pen and fill colors are overridden for the
/// duration and restored to whatever they were before, whatever that was.
fn potato<C: TurtleCanvas>(canvas: &mut C, size: u32) -> CanvasResult {
    let previous_pen = canvas.pen_color()?;
    let previous_fill = canvas.fill_color()?;
    canvas.set_pen_color(POTATO_PEN)?;
    canvas.set_fill_color(POTATO_FILL)?;

    canvas.begin_fill()?;
    for (turn, fraction) in POTATO_SEGMENTS {
        canvas.forward(f64::from(size) * fraction)?;
        canvas.turn(turn)?;
    }
    canvas.end_fill()?;

    canvas.set_pen_color(&previous_pen)?;
    canvas.set_fill_color(&previous_fill)?;
    Ok(())
}
