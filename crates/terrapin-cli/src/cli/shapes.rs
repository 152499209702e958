//! Drawable shape listing command.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use terrapin_core::{dispatch, random_art};
use terrapin_types::shape::DrawShape;

/// List every drawable shape with what the dispatch emits for it.
pub fn list(json: bool) -> Result<()> {
    if json {
        let shapes: Vec<_> = DrawShape::ALL
            .iter()
            .map(|shape| {
                let (kind, emits) = describe(*shape);
                serde_json::json!({
                    "name": shape.to_string(),
                    "kind": kind,
                    "emits": emits,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&shapes)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Shape").fg(Color::White),
        Cell::new("Kind").fg(Color::White),
        Cell::new("Emits").fg(Color::White),
    ]);

    for shape in DrawShape::ALL {
        let (kind, emits) = describe(shape);
        table.add_row(vec![
            Cell::new(shape.to_string()).fg(Color::Cyan),
            Cell::new(kind),
            Cell::new(emits).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  Default shape: {}",
        style(DrawShape::default().to_string()).bold()
    );
    println!();

    Ok(())
}

fn describe(shape: DrawShape) -> (&'static str, String) {
    match shape {
        DrawShape::Circle => ("curve", "one circle of radius size/2".to_string()),
        DrawShape::Potato => (
            "organic",
            "10 filled segments in peru over saddlebrown".to_string(),
        ),
        DrawShape::Random => (
            "composition",
            format!(
                "{} random shapes in {} palette colors",
                random_art::SHAPE_COUNT,
                random_art::PALETTE.len()
            ),
        ),
        other => match dispatch::polygon_spec(other) {
            Some(spec) => {
                let direction = if spec.turn < 0.0 { "left" } else { "right" };
                (
                    "polygon",
                    format!("{} sides, {}° {direction} turns", spec.sides, spec.turn.abs()),
                )
            }
            None => ("polygon", String::new()),
        },
    }
}
