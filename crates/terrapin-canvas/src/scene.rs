//! In-memory turtle scene.
//!
//! Tracks cursor state (position, heading, pen, colors) and accumulates the
//! vector elements that drawing commands produce. Headings are degrees,
//! 0 along +x, positive clockwise in screen coordinates (+y down); a heading
//! is always kept normalized into [0, 360).

use terrapin_types::color::Rgb;

/// One drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Straight stroke in the pen color.
    Segment {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgb,
    },
    /// Circle outline in the pen color.
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Rgb,
    },
    /// Closed filled region captured between begin_fill and end_fill.
    Fill {
        points: Vec<(f64, f64)>,
        fill: Rgb,
        stroke: Rgb,
    },
}

/// Axis-aligned extent of everything drawn so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn union_point(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

const DEFAULT_COLOR_NAME: &str = "black";
const DEFAULT_COLOR: Rgb = Rgb::new(0, 0, 0);

/// A named color as the scene carries it: the canonical name callers see
/// plus the resolved value the renderer uses.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColor {
    pub name: String,
    pub rgb: Rgb,
}

impl Default for NamedColor {
    fn default() -> Self {
        Self {
            name: DEFAULT_COLOR_NAME.to_string(),
            rgb: DEFAULT_COLOR,
        }
    }
}

#[derive(Debug)]
pub struct TurtleScene {
    pos: (f64, f64),
    heading: f64,
    pen_down: bool,
    pen: NamedColor,
    fill: NamedColor,
    speed: u8,
    appearance: String,
    elements: Vec<Element>,
    active_fill: Option<Vec<(f64, f64)>>,
    bounds: Option<Bounds>,
}

impl Default for TurtleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TurtleScene {
    pub fn new() -> Self {
        Self {
            pos: (0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            pen: NamedColor::default(),
            fill: NamedColor::default(),
            speed: 5,
            appearance: "turtle".to_string(),
            elements: Vec::new(),
            active_fill: None,
            bounds: None,
        }
    }

    fn union_point(&mut self, x: f64, y: f64) {
        match &mut self.bounds {
            Some(bounds) => bounds.union_point(x, y),
            None => self.bounds = Some(Bounds::point(x, y)),
        }
    }

    /// Move the cursor to `to`, stroking a segment if the pen is down and
    /// extending any active fill region.
    fn move_to(&mut self, to: (f64, f64)) {
        if self.pen_down {
            self.elements.push(Element::Segment {
                from: self.pos,
                to,
                color: self.pen.rgb,
            });
            self.union_point(self.pos.0, self.pos.1);
            self.union_point(to.0, to.1);
        }
        if let Some(path) = &mut self.active_fill {
            path.push(to);
        }
        self.pos = to;
    }

    pub fn forward(&mut self, distance: f64) {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        let to = (self.pos.0 + distance * cos, self.pos.1 + distance * sin);
        self.move_to(to);
    }

    pub fn turn(&mut self, degrees: f64) {
        self.heading = normalize(self.heading + degrees);
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize(degrees);
    }

    pub fn go_to(&mut self, x: f64, y: f64) {
        self.move_to((x, y));
    }

    /// Return to the origin and face along +x.
    pub fn home(&mut self) {
        self.move_to((0.0, 0.0));
        self.heading = 0.0;
    }

    /// Circle of `radius` tangent to the cursor, centered 90 degrees to the
    /// counterclockwise side of the heading. Cursor state is unchanged.
    pub fn circle(&mut self, radius: f64) {
        if !self.pen_down {
            return;
        }
        let (sin, cos) = (self.heading - 90.0).to_radians().sin_cos();
        let center = (self.pos.0 + radius * cos, self.pos.1 + radius * sin);
        self.elements.push(Element::Circle {
            center,
            radius,
            color: self.pen.rgb,
        });
        self.union_point(center.0 - radius, center.1 - radius);
        self.union_point(center.0 + radius, center.1 + radius);
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn begin_fill(&mut self) {
        self.active_fill = Some(vec![self.pos]);
    }

    /// Close the captured region and emit it. Degenerate captures (fewer
    /// than three points) are dropped.
    pub fn end_fill(&mut self) {
        if let Some(points) = self.active_fill.take() {
            if points.len() >= 3 {
                for (x, y) in &points {
                    self.union_point(*x, *y);
                }
                self.elements.push(Element::Fill {
                    points,
                    fill: self.fill.rgb,
                    stroke: self.pen.rgb,
                });
            }
        }
    }

    /// Drop everything drawn so far; cursor state is untouched.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.active_fill = None;
        self.bounds = None;
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    pub fn set_appearance(&mut self, appearance: impl Into<String>) {
        self.appearance = appearance.into();
    }

    pub fn set_pen_color(&mut self, name: impl Into<String>, rgb: Rgb) {
        self.pen = NamedColor {
            name: name.into(),
            rgb,
        };
    }

    pub fn set_fill_color(&mut self, name: impl Into<String>, rgb: Rgb) {
        self.fill = NamedColor {
            name: name.into(),
            rgb,
        };
    }

    pub fn position(&self) -> (f64, f64) {
        self.pos
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn pen_color(&self) -> &NamedColor {
        &self.pen
    }

    pub fn fill_color(&self) -> &NamedColor {
        &self.fill
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn appearance(&self) -> &str {
        &self.appearance
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

fn normalize(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_square_walk_returns_to_origin() {
        let mut scene = TurtleScene::new();
        for _ in 0..4 {
            scene.forward(100.0);
            scene.turn(90.0);
        }

        let (x, y) = scene.position();
        assert_close(x, 0.0);
        assert_close(y, 0.0);
        assert_close(scene.heading(), 0.0);
        assert_eq!(scene.elements().len(), 4);
    }

    #[test]
    fn test_pen_up_moves_without_stroking() {
        let mut scene = TurtleScene::new();
        scene.pen_up();
        scene.forward(50.0);
        scene.go_to(10.0, 10.0);
        assert!(scene.elements().is_empty());
        assert_eq!(scene.position(), (10.0, 10.0));
    }

    #[test]
    fn test_heading_stays_normalized() {
        let mut scene = TurtleScene::new();
        scene.turn(-90.0);
        assert_close(scene.heading(), 270.0);
        scene.turn(450.0);
        assert_close(scene.heading(), 0.0);
        scene.set_heading(-540.0);
        assert_close(scene.heading(), 180.0);
    }

    #[test]
    fn test_fill_region_captures_the_walk() {
        let mut scene = TurtleScene::new();
        scene.set_fill_color("saddlebrown", Rgb::new(0x8b, 0x45, 0x13));
        scene.begin_fill();
        scene.forward(10.0);
        scene.turn(90.0);
        scene.forward(10.0);
        scene.turn(90.0);
        scene.forward(10.0);
        scene.end_fill();

        let fill = scene
            .elements()
            .iter()
            .find_map(|element| match element {
                Element::Fill { points, fill, .. } => Some((points.clone(), *fill)),
                _ => None,
            })
            .expect("a fill element");
        assert_eq!(fill.0.len(), 4); // start plus three moves
        assert_eq!(fill.1, Rgb::new(0x8b, 0x45, 0x13));
    }

    #[test]
    fn test_degenerate_fill_is_dropped() {
        let mut scene = TurtleScene::new();
        scene.begin_fill();
        scene.forward(10.0);
        scene.end_fill();
        assert!(
            !scene
                .elements()
                .iter()
                .any(|element| matches!(element, Element::Fill { .. }))
        );
    }

    #[test]
    fn test_circle_leaves_cursor_alone() {
        let mut scene = TurtleScene::new();
        scene.circle(25.0);
        assert_eq!(scene.position(), (0.0, 0.0));
        assert_close(scene.heading(), 0.0);

        match &scene.elements()[0] {
            Element::Circle { center, radius, .. } => {
                assert_close(*radius, 25.0);
                assert_close(center.0, 0.0);
                assert_close(center.1, -25.0);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_bounds_track_strokes() {
        let mut scene = TurtleScene::new();
        assert!(scene.bounds().is_none());
        scene.go_to(30.0, -10.0);
        let bounds = scene.bounds().expect("bounds after a stroke");
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 30.0);
        assert_eq!(bounds.min_y, -10.0);
        assert_eq!(bounds.max_y, 0.0);
    }

    #[test]
    fn test_clear_keeps_cursor_state() {
        let mut scene = TurtleScene::new();
        scene.go_to(40.0, 40.0);
        scene.turn(45.0);
        scene.clear();
        assert!(scene.elements().is_empty());
        assert!(scene.bounds().is_none());
        assert_eq!(scene.position(), (40.0, 40.0));
        assert_close(scene.heading(), 45.0);
    }
}
