use std::io::{self, Write};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use shapes::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    run(args.command, &mut stdout)
}

/// Command-line arguments.
#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "Query containment, adjacency and boundary crossings of axis-aligned rectangles.\n\n\
                  Rectangles are written as `x,y:x,y`: the top-left corner, then the bottom-right \
                  corner, with y growing upward."
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in containment, adjacency and intersection demonstrations.
    Demo,
    /// Check whether either rectangle contains the other.
    Contains(Pair),
    /// Check whether the rectangles share an edge.
    Adjacent(Pair),
    /// List the points where the rectangles' boundaries cross.
    Intersect(Pair),
}

/// Two rectangles to compare.
#[derive(ClapArgs)]
struct Pair {
    /// Rectangle A, as `x,y:x,y`.
    #[arg(allow_hyphen_values = true)]
    a: Rect,

    /// Rectangle B, as `x,y:x,y`.
    #[arg(allow_hyphen_values = true)]
    b: Rect,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ContainsReport {
    a: Rect,
    b: Rect,
    a_contains_b: bool,
    b_contains_a: bool,
}

#[derive(Serialize)]
struct AdjacentReport {
    a: Rect,
    b: Rect,
    adjacent: bool,
    side_of_a: Option<Side>,
}

#[derive(Serialize)]
struct IntersectReport {
    a: Rect,
    b: Rect,
    points: Vec<Point>,
}

/// Executes `command`, writing its results to `out`.
fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Demo => demo(out),
        Command::Contains(pair) => {
            tracing::debug!(a = %pair.a, b = %pair.b, "checking containment");
            let report = ContainsReport {
                a: pair.a,
                b: pair.b,
                a_contains_b: pair.a.encloses(&pair.b),
                b_contains_a: pair.b.encloses(&pair.a),
            };
            if pair.json {
                write_json(out, &report)
            } else {
                write_contains(out, &report)
            }
        }
        Command::Adjacent(pair) => {
            tracing::debug!(a = %pair.a, b = %pair.b, "checking adjacency");
            let side_of_a = pair.a.shared_side(&pair.b);
            let report = AdjacentReport {
                a: pair.a,
                b: pair.b,
                adjacent: side_of_a.is_some(),
                side_of_a,
            };
            if pair.json {
                write_json(out, &report)
            } else {
                write_adjacent(out, &report, "B")
            }
        }
        Command::Intersect(pair) => {
            tracing::debug!(a = %pair.a, b = %pair.b, "computing boundary crossings");
            let report = IntersectReport {
                a: pair.a,
                b: pair.b,
                points: pair.a.points_of_intersection(&pair.b),
            };
            if pair.json {
                write_json(out, &report)
            } else {
                write_intersect(out, &report)
            }
        }
    }
}

fn write_json(out: &mut impl Write, report: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize result.")?;
    writeln!(out)?;
    Ok(())
}

fn write_contains(out: &mut impl Write, report: &ContainsReport) -> anyhow::Result<()> {
    writeln!(out, "Rectangle A: {}", report.a)?;
    writeln!(out, "Rectangle B: {}", report.b)?;
    writeln!(out, "A contains B: {}", report.a_contains_b)?;
    writeln!(out, "B contains A: {}", report.b_contains_a)?;
    Ok(())
}

fn write_adjacent(
    out: &mut impl Write,
    report: &AdjacentReport,
    name: &str,
) -> anyhow::Result<()> {
    writeln!(out, "Rectangle A: {}", report.a)?;
    writeln!(out, "Rectangle {}: {}", name, report.b)?;
    writeln!(out, "Are rectangles adjacent: {}", report.adjacent)?;
    if let Some(side) = report.side_of_a {
        writeln!(out, "Shared side of A: {side}")?;
    }
    Ok(())
}

fn write_intersect(out: &mut impl Write, report: &IntersectReport) -> anyhow::Result<()> {
    let points = report
        .points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Rectangle A: {}", report.a)?;
    writeln!(out, "Rectangle B: {}", report.b)?;
    writeln!(out, "Points of intersection: [{points}]")?;
    Ok(())
}

/// Builds a rectangle for the demonstrations, failing the whole run on invalid corners.
fn build_rect(top_left: (i64, i64), bottom_right: (i64, i64)) -> anyhow::Result<Rect> {
    Rect::new(top_left.into(), bottom_right.into())
        .with_context(|| "Error constructing rectangle.")
}

fn demo(out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!("running demonstrations");
    let a = build_rect((2, 4), (5, 2))?;
    let b = build_rect((3, 3), (4, 2))?;
    writeln!(out, "Containment demonstration:")?;
    write_contains(
        out,
        &ContainsReport {
            a,
            b,
            a_contains_b: a.encloses(&b),
            b_contains_a: b.encloses(&a),
        },
    )?;

    writeln!(out, "Adjacency demonstration:")?;
    let others = [("B", ((2, 2), (3, 0))), ("C", ((10, 10), (14, 7)))];
    for (name, (top_left, bottom_right)) in others {
        let other = build_rect(top_left, bottom_right)?;
        let side_of_a = a.shared_side(&other);
        write_adjacent(
            out,
            &AdjacentReport {
                a,
                b: other,
                adjacent: side_of_a.is_some(),
                side_of_a,
            },
            name,
        )?;
    }

    let a = build_rect((4, 7), (6, 4))?;
    let b = build_rect((2, 5), (5, 3))?;
    writeln!(out, "Intersection demonstration:")?;
    write_intersect(
        out,
        &IntersectReport {
            a,
            b,
            points: a.points_of_intersection(&b),
        },
    )?;

    Ok(())
}
