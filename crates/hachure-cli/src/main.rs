//! hachure - directional hatch fills for rectangles
//!
//! Usage:
//!   hachure [options]
//!
//! Generates a hatch fill for the demo rectangle and writes it as SVG or
//! JSON. Each generated line is also logged with its coordinates.

use std::env;
use std::fs;
use std::time::Instant;

use hachure::{Contour, Pattern, Point, Rect};

mod output;

use output::{lines_to_json, lines_to_svg};

/// Output format for the generated pattern.
#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Svg,
    Json,
}

fn print_usage(prog: &str) {
    eprintln!("hachure - directional hatch fills for rectangles");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} [options]", prog);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --angle <deg>     Hatch angle in degrees (default: 45)");
    eprintln!("  -s, --step <n>        Spacing between lines (default: 1)");
    eprintln!("  -p, --pattern <name>  Pattern: lines, crosshatch (default: lines)");
    eprintln!("  -o, --output <file>   Output file, '-' for stdout (default: hatch.svg)");
    eprintln!("  -f, --format <fmt>    Output format: svg, json (default: svg)");
    eprintln!("  -h, --help            Show this help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut angle = 45.0;
    let mut step = 1.0;
    let mut pattern_name = "lines";
    let mut output_path = "hatch.svg";
    let mut format = OutputFormat::Svg;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--angle" => {
                i += 1;
                if i < args.len() {
                    angle = args[i].parse().unwrap_or(45.0);
                }
            }
            "-s" | "--step" => {
                i += 1;
                if i < args.len() {
                    step = args[i].parse().unwrap_or(1.0);
                }
            }
            "-p" | "--pattern" => {
                i += 1;
                if i < args.len() {
                    pattern_name = &args[i];
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = &args[i];
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].to_lowercase().as_str() {
                        "svg" => OutputFormat::Svg,
                        "json" => OutputFormat::Json,
                        other => {
                            eprintln!("Unknown format: {}. Use 'svg' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!();
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let pattern = Pattern::from_name(pattern_name).unwrap_or_else(|| {
        eprintln!("Unknown pattern: {}. Available: lines, crosshatch.", pattern_name);
        std::process::exit(1);
    });

    // Demo region: a 20x10 rectangle anchored at the origin. Only the
    // contour's bounding corners matter to the generator.
    let contour: Contour = vec![
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let rect = Rect::bounding(&contour).expect("demo contour has points");

    let start = Instant::now();
    let lines = match pattern.generate(&rect, angle, step) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();
    eprintln!("Generated {} lines in {:?}", lines.len(), elapsed);

    // Keep the coordinate log off stdout when the document itself goes there.
    let document_on_stdout = output_path == "-";
    for (n, line) in lines.iter().enumerate() {
        if document_on_stdout {
            eprintln!(
                "Line {}: ({},{}) -> ({},{})",
                n + 1,
                line.x1, line.y1, line.x2, line.y2
            );
        } else {
            println!(
                "Line {}: ({},{}) -> ({},{})",
                n + 1,
                line.x1, line.y1, line.x2, line.y2
            );
        }
    }

    let document = match format {
        OutputFormat::Svg => lines_to_svg(&lines, &rect),
        OutputFormat::Json => lines_to_json(&lines),
    };

    match output_path {
        "-" => {
            println!("{}", document);
        }
        path => {
            fs::write(path, &document).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}
