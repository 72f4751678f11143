#![deny(unsafe_code)]
//! CLI binary for the superellipse engine.
//!
//! Subcommands:
//! - `svg` — render an SVG document to stdout or a file
//! - `path` — print SVG path data
//! - `bounds` — print the bounding box
//! - `area` — print the sampled and closed-form area
//! - `points` — print the sampled boundary points
//! - `design` — write a reusable design preset as JSON

mod error;
mod files;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use superellipse_core::shape::{DEFAULT_A, DEFAULT_B, DEFAULT_N, DEFAULT_SEGMENTS};
use superellipse_core::{
    assemble_design, build_path, compute_bounds, compute_bounds_with, estimate_area,
    estimate_area_with, exact_area, sample, Design, PathOptions, RenderStyle, ShapeParams,
    AREA_SEGMENTS, BOUNDS_SEGMENTS,
};

#[derive(Parser)]
#[command(name = "superellipse", about = "Superellipse geometry and SVG generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Curve parameters shared by every subcommand.
#[derive(Args, Clone, Copy)]
struct ShapeArgs {
    /// Semi-axis along x.
    #[arg(short, default_value_t = DEFAULT_A, allow_negative_numbers = true)]
    a: f64,

    /// Semi-axis along y.
    #[arg(short, default_value_t = DEFAULT_B, allow_negative_numbers = true)]
    b: f64,

    /// Shape exponent (2 = ellipse, >2 squarer, <2 star-like).
    #[arg(short, default_value_t = DEFAULT_N, allow_negative_numbers = true)]
    n: f64,
}

#[derive(Args)]
struct StyleArgs {
    /// Stroke color.
    #[arg(long, default_value = "black")]
    stroke: String,

    /// Stroke width in user units.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    stroke_width: f64,

    /// Fill color.
    #[arg(long, default_value = "none")]
    fill: String,

    /// Root width attribute in pixels.
    #[arg(short = 'W', long)]
    width: Option<f64>,

    /// Root height attribute in pixels.
    #[arg(short = 'H', long)]
    height: Option<f64>,

    /// Extra margin around the shape.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    padding: f64,

    /// Decimal digits kept in path coordinates.
    #[arg(long, default_value_t = 3)]
    precision: u32,
}

impl StyleArgs {
    fn into_style(self) -> RenderStyle {
        RenderStyle {
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            fill: self.fill,
            width: self.width,
            height: self.height,
            padding: self.padding,
            precision: self.precision,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render an SVG document.
    Svg {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Number of boundary samples.
        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,

        #[command(flatten)]
        style: StyleArgs,

        /// Design JSON file; replaces all shape and style flags.
        #[arg(short, long)]
        design: Option<PathBuf>,

        /// Output file or directory (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print SVG path data for the outline.
    Path {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Number of boundary samples.
        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,

        /// Decimal digits kept per coordinate.
        #[arg(long, default_value_t = 3)]
        precision: u32,

        /// Leave the path open (no trailing Z).
        #[arg(long)]
        open: bool,
    },
    /// Print the axis-aligned bounding box.
    Bounds {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Sample count (default 256).
        #[arg(short, long)]
        segments: Option<usize>,
    },
    /// Print the enclosed area.
    Area {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Sample count (default 1000).
        #[arg(short, long)]
        segments: Option<usize>,
    },
    /// Print the sampled boundary points.
    Points {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Number of boundary samples.
        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,
    },
    /// Write a design preset as JSON.
    Design {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Number of boundary samples.
        #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,

        #[command(flatten)]
        style: StyleArgs,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Svg {
            shape,
            segments,
            style,
            design,
            output,
        } => {
            let design = match design {
                Some(path) => files::read_design(&path)?,
                None => Design {
                    shape: ShapeParams::new(shape.a, shape.b, shape.n).with_segments(segments),
                    style: style.into_style(),
                },
            };
            let svg = assemble_design(&design)?;

            match output {
                Some(path) => {
                    let path = files::resolve_output(&path, &design.file_name());
                    files::write_text(&path, &svg)?;
                    if cli.json {
                        print_json(&serde_json::json!({
                            "output": path.display().to_string(),
                            "bytes": svg.len(),
                            "design": design,
                        }))?;
                    } else {
                        eprintln!(
                            "rendered superellipse (a={}, b={}, n={}, {} segments) -> {}",
                            design.shape.a,
                            design.shape.b,
                            design.shape.n,
                            design.shape.effective_segments(),
                            path.display()
                        );
                    }
                }
                None if cli.json => print_json(&serde_json::json!({ "svg": svg }))?,
                None => println!("{svg}"),
            }
        }
        Command::Path {
            shape,
            segments,
            precision,
            open,
        } => {
            let points = sample(shape.a, shape.b, shape.n, segments)?;
            let d = build_path(
                &points,
                PathOptions {
                    precision,
                    close: !open,
                },
            );
            if cli.json {
                print_json(&serde_json::json!({ "d": d }))?;
            } else {
                println!("{d}");
            }
        }
        Command::Bounds { shape, segments } => {
            let bb = match segments {
                Some(s) => compute_bounds_with(shape.a, shape.b, shape.n, s)?,
                None => compute_bounds(shape.a, shape.b, shape.n)?,
            };
            if cli.json {
                print_json(&serde_json::json!({
                    "min_x": bb.min_x,
                    "max_x": bb.max_x,
                    "min_y": bb.min_y,
                    "max_y": bb.max_y,
                    "segments": segments.unwrap_or(BOUNDS_SEGMENTS),
                }))?;
            } else {
                println!("x: [{}, {}]", bb.min_x, bb.max_x);
                println!("y: [{}, {}]", bb.min_y, bb.max_y);
                println!("size: {} x {}", bb.width(), bb.height());
            }
        }
        Command::Area { shape, segments } => {
            let estimate = match segments {
                Some(s) => estimate_area_with(shape.a, shape.b, shape.n, s)?,
                None => estimate_area(shape.a, shape.b, shape.n)?,
            };
            let exact = exact_area(shape.a, shape.b, shape.n)?;
            let relative_error = (estimate - exact).abs() / exact;
            let used = segments.unwrap_or(AREA_SEGMENTS);
            if cli.json {
                print_json(&serde_json::json!({
                    "area": estimate,
                    "exact": exact,
                    "relative_error": relative_error,
                    "segments": used,
                }))?;
            } else {
                println!("area:  {estimate}");
                println!("exact: {exact}");
                println!("relative error: {relative_error:.3e} ({used} segments)");
            }
        }
        Command::Points { shape, segments } => {
            let points = sample(shape.a, shape.b, shape.n, segments)?;
            if cli.json {
                print_json(&serde_json::to_value(&points)?)?;
            } else {
                for p in &points {
                    println!("{} {}", p.x, p.y);
                }
            }
        }
        Command::Design {
            shape,
            segments,
            style,
            output,
        } => {
            let design = Design {
                shape: ShapeParams::new(shape.a, shape.b, shape.n).with_segments(segments),
                style: style.into_style(),
            };
            design.validate()?;
            let text = serde_json::to_string_pretty(&design)?;
            match output {
                Some(path) => {
                    files::write_text(&path, &text)?;
                    if !cli.json {
                        eprintln!("wrote design -> {}", path.display());
                    }
                }
                None => println!("{text}"),
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_parameters_for_engine_validation() {
        let cli = Cli::try_parse_from(["superellipse", "area", "-a", "-5"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn svg_writes_named_file_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "superellipse", "svg", "-a", "50", "-b", "30", "-n", "2", "--segments", "64", "-o", out,
        ])
        .unwrap();
        run(cli).unwrap();
        let written = std::fs::read_to_string(dir.path().join("superellipse_a50_b30_n2.svg")).unwrap();
        assert!(written.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    }

    #[test]
    fn svg_from_design_matches_library_output() {
        let dir = tempfile::tempdir().unwrap();
        let design_path = dir.path().join("d.json");
        let svg_path = dir.path().join("out.svg");
        let mut design = Design::new(20.0, 10.0, 5.0);
        design.style.stroke_width = 3.0;
        files::write_text(&design_path, &serde_json::to_string(&design).unwrap()).unwrap();

        let cli = Cli::try_parse_from([
            "superellipse",
            "svg",
            "--design",
            design_path.to_str().unwrap(),
            "-o",
            svg_path.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();
        assert_eq!(
            std::fs::read_to_string(&svg_path).unwrap(),
            assemble_design(&design).unwrap()
        );
    }

    #[test]
    fn design_rejects_negative_stroke_width() {
        let cli = Cli::try_parse_from(["superellipse", "design", "--stroke-width", "-2"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("stroke_width"));
    }
}
