//! `railgraph shortest` command - length of the shortest route
//!
//! Start may equal end; the answer always traverses at least one route.

use railgraph_core::error::Result;
use railgraph_core::format::OutputFormat;
use railgraph_core::graph::shortest_distance;
use railgraph_core::index::RouteIndex;

use crate::cli::Cli;

/// Execute the shortest command
pub fn execute(
    cli: &Cli,
    format: OutputFormat,
    index: &RouteIndex,
    start: &str,
    end: &str,
) -> Result<()> {
    let distance = shortest_distance(index, start, end)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "end": end,
                "distance": distance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                println!("{distance}");
            } else {
                println!("{start} -> {end}: {distance}");
            }
        }
    }

    Ok(())
}
