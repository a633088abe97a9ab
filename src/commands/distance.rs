//! `railgraph distance` command - distance of a fully specified path
//!
//! Accepts towns as separate arguments (`A B C`) or in the compact route
//! notation the route list itself uses (`ABC`).

use railgraph_core::error::Result;
use railgraph_core::format::OutputFormat;
use railgraph_core::graph::Walk;
use railgraph_core::index::RouteIndex;

use crate::cli::Cli;

/// Execute the distance command
pub fn execute(cli: &Cli, format: OutputFormat, index: &RouteIndex, towns: &[String]) -> Result<()> {
    let towns = expand_towns(towns);
    let town_refs: Vec<&str> = towns.iter().map(String::as_str).collect();
    let walk = Walk::from_towns(index, &town_refs)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "route": walk.to_string(),
                "stops": walk.stop_count(),
                "distance": walk.distance(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", walk.distance());
            } else {
                println!("{}: {}", walk, walk.distance());
            }
        }
    }

    Ok(())
}

/// Expand compact path notation (`ABC`) into one town per letter.
fn expand_towns(args: &[String]) -> Vec<String> {
    match args {
        [single] if single.len() > 1 && single.chars().all(|c| c.is_ascii_uppercase()) => {
            single.chars().map(String::from).collect()
        }
        _ => args.to_vec(),
    }
}
