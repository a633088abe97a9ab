//! `railgraph routes` command - enumerate routes between two towns
//!
//! Exactly one bound selects the enumeration:
//! - `--max-stops N`: routes using at most N stops
//! - `--exact-stops N`: routes using exactly N stops
//! - `--max-distance D`: routes strictly shorter than D

use railgraph_core::error::{RailError, Result};
use railgraph_core::format::OutputFormat;
use railgraph_core::graph::{
    routes_with_exact_stops, routes_within_distance, routes_within_stops, Walk,
};
use railgraph_core::index::RouteIndex;

use crate::cli::Cli;

/// Execute the routes command
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    format: OutputFormat,
    index: &RouteIndex,
    start: &str,
    end: &str,
    max_stops: Option<usize>,
    exact_stops: Option<usize>,
    max_distance: Option<u32>,
) -> Result<()> {
    let walks = match (max_stops, exact_stops, max_distance) {
        (Some(max), None, None) => routes_within_stops(index, start, end, max),
        (None, Some(stops), None) => routes_with_exact_stops(index, start, end, stops),
        (None, None, Some(limit)) => routes_within_distance(index, start, end, limit),
        _ => {
            return Err(RailError::UsageError(
                "routes needs exactly one of --max-stops, --exact-stops, --max-distance"
                    .to_string(),
            ))
        }
    };

    match format {
        OutputFormat::Json => {
            let routes: Vec<serde_json::Value> = walks.iter().map(walk_json).collect();
            let output = serde_json::json!({
                "start": start,
                "end": end,
                "count": walks.len(),
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for walk in &walks {
                println!(
                    "{} stops={} distance={}",
                    walk,
                    walk.stop_count(),
                    walk.distance()
                );
            }
            if !cli.quiet {
                println!("{} route(s)", walks.len());
            }
        }
    }

    Ok(())
}

fn walk_json(walk: &Walk) -> serde_json::Value {
    serde_json::json!({
        "route": walk.to_string(),
        "stops": walk.stop_count(),
        "distance": walk.distance(),
    })
}
