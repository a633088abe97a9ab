//! CLI argument parsing for railgraph
//!
//! Uses clap for argument parsing. Global flags: --graph, --format,
//! --quiet, --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use railgraph_core::format::OutputFormat;

/// Railgraph - route queries over small rail networks
#[derive(Parser, Debug)]
#[command(name = "railgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Route list file (labels such as AB5, whitespace or comma separated)
    #[arg(long, global = true, env = "RAILGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report traversal progress
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distance of a fully specified path
    Distance {
        /// Towns along the path, as separate arguments (A B C) or compact
        /// notation (ABC)
        #[arg(required = true)]
        towns: Vec<String>,
    },

    /// Enumerate routes between two towns under a bound
    Routes {
        /// Start town
        start: String,

        /// End town
        end: String,

        /// Keep routes with at most this many stops
        #[arg(long, conflicts_with_all = ["exact_stops", "max_distance"])]
        max_stops: Option<usize>,

        /// Keep routes with exactly this many stops
        #[arg(long, conflicts_with = "max_distance")]
        exact_stops: Option<usize>,

        /// Keep routes strictly shorter than this distance
        #[arg(long)]
        max_distance: Option<u32>,
    },

    /// Length of the shortest route between two towns
    Shortest {
        /// Start town
        start: String,

        /// End town (may equal start; at least one route is traversed)
        end: String,
    },

    /// List towns and their departing routes
    Towns,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|err| err.to_string())
}
