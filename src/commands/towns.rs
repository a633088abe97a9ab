//! `railgraph towns` command - list towns and their departing routes

use railgraph_core::error::Result;
use railgraph_core::format::OutputFormat;
use railgraph_core::index::RouteIndex;

use crate::cli::Cli;

/// Execute the towns command
pub fn execute(cli: &Cli, format: OutputFormat, index: &RouteIndex) -> Result<()> {
    let towns = index.towns();

    match format {
        OutputFormat::Json => {
            let mut departures = serde_json::Map::new();
            for town in &towns {
                departures.insert(
                    town.to_string(),
                    serde_json::to_value(index.departures(town))?,
                );
            }
            let output = serde_json::json!({
                "town_count": index.town_count(),
                "route_count": index.route_count(),
                "departures": departures,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for town in &towns {
                let labels: Vec<String> = index
                    .departures(town)
                    .iter()
                    .map(|route| format!("{}{}", route.to, route.distance))
                    .collect();
                println!("{} -> {}", town, labels.join(" "));
            }
            if !cli.quiet {
                println!(
                    "{} town(s), {} route(s)",
                    index.town_count(),
                    index.route_count()
                );
            }
        }
    }

    Ok(())
}
