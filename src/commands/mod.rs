//! CLI commands for railgraph

pub mod distance;
pub mod routes;
pub mod shortest;
pub mod towns;

use std::fs;

use railgraph_core::error::{RailError, Result};
use railgraph_core::index::RouteIndex;

use crate::cli::Cli;
use crate::config::RailConfig;

/// Resolve the route list file and build the index from it.
pub fn load_index(cli: &Cli, config: &RailConfig) -> Result<RouteIndex> {
    let path = cli
        .graph
        .clone()
        .or_else(|| config.graph.clone())
        .ok_or_else(|| {
            RailError::UsageError(
                "no route list given (use --graph, RAILGRAPH_GRAPH, or railgraph.toml)"
                    .to_string(),
            )
        })?;

    let content = fs::read_to_string(&path)?;
    tracing::debug!(path = %path.display(), "route list read");
    RouteIndex::build(parse_labels(&content))
}

/// Split a route list into labels: whitespace or comma separated, with
/// `#` line comments.
fn parse_labels(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split('#').next())
        .flat_map(|line| line.split([',', ' ', '\t']))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
