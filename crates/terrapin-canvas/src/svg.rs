//! SVG serialization of a turtle scene.
//!
//! The document uses a view box centered on the turtle origin, so scene
//! coordinates map directly: (0, 0) is the middle of the image, +y down.

use crate::scene::{Element, TurtleScene};

/// Render the scene to a complete SVG document.
pub fn render(scene: &TurtleScene, title: &str, width: u32, height: u32) -> String {
    let half_w = f64::from(width) / 2.0;
    let half_h = f64::from(height) / 2.0;

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"{} {} {width} {height}\">\n",
        -half_w, -half_h
    ));
    doc.push_str(&format!("  <title>{}</title>\n", escape(title)));
    doc.push_str(&format!(
        "  <desc>appearance: {}; speed: {}</desc>\n",
        escape(scene.appearance()),
        scene.speed()
    ));
    doc.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" fill=\"white\"/>\n",
        -half_w, -half_h
    ));

    for element in scene.elements() {
        match element {
            Element::Segment { from, to, color } => {
                doc.push_str(&format!(
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{color}\" \
                     stroke-width=\"1\" stroke-linecap=\"round\"/>\n",
                    from.0, from.1, to.0, to.1
                ));
            }
            Element::Circle {
                center,
                radius,
                color,
            } => {
                doc.push_str(&format!(
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"none\" \
                     stroke=\"{color}\" stroke-width=\"1\"/>\n",
                    center.0, center.1
                ));
            }
            Element::Fill {
                points,
                fill,
                stroke,
            } => {
                let points: Vec<String> = points
                    .iter()
                    .map(|(x, y)| format!("{x},{y}"))
                    .collect();
                doc.push_str(&format!(
                    "  <polygon points=\"{}\" fill=\"{fill}\" stroke=\"{stroke}\" \
                     stroke-width=\"1\"/>\n",
                    points.join(" ")
                ));
            }
        }
    }

    doc.push_str("</svg>\n");
    doc
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
