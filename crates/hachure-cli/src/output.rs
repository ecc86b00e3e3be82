//! SVG and JSON rendering of a generated hatch pattern.

use serde::Serialize;

use hachure::{Line, Rect};

// Fixed canvas sized for the demo rectangle at 10x scale.
const SVG_WIDTH: u32 = 300;
const SVG_HEIGHT: u32 = 200;
const SVG_SCALE: f64 = 10.0;

/// A line in JSON output format.
#[derive(Serialize)]
struct JsonLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// JSON output with all lines.
#[derive(Serialize)]
struct JsonOutput {
    lines: Vec<JsonLine>,
}

/// Serialize the pattern as a JSON document. Coordinates stay in model
/// units, unscaled.
pub fn lines_to_json(lines: &[Line]) -> String {
    let json_lines: Vec<JsonLine> = lines
        .iter()
        .map(|l| JsonLine {
            x1: l.x1,
            y1: l.y1,
            x2: l.x2,
            y2: l.y2,
        })
        .collect();

    let output = JsonOutput { lines: json_lines };
    serde_json::to_string(&output).expect("Failed to serialize JSON")
}

/// Render the pattern as an SVG document: hatch lines in black, the
/// rectangle border in red, everything scaled by a fixed factor.
pub fn lines_to_svg(lines: &[Line], rect: &Rect) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">
"#,
        SVG_WIDTH, SVG_HEIGHT
    ));

    svg.push_str("<g stroke=\"black\" stroke-width=\"0.5\" fill=\"none\">\n");
    for line in lines {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
            line.x1 * SVG_SCALE,
            line.y1 * SVG_SCALE,
            line.x2 * SVG_SCALE,
            line.y2 * SVG_SCALE
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str("<g stroke=\"red\" stroke-width=\"1\" fill=\"none\">\n");
    for edge in rect.edges() {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
            edge.x1 * SVG_SCALE,
            edge.y1 * SVG_SCALE,
            edge.x2 * SVG_SCALE,
            edge.y2 * SVG_SCALE
        ));
    }
    svg.push_str("</g>\n</svg>\n");

    svg
}
