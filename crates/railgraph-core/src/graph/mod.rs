//! Route search over a rail network
//!
//! Provides the walk value type and the frontier-expansion engine:
//! - walks built one valid route at a time
//! - level-by-level enumeration collecting every walk reaching the end town
//! - distance queries over fixed paths and enumerated route sets

pub mod search;
pub mod walk;

pub use search::{
    enumerate_routes, fixed_path_distance, minimum_distance, routes_with_exact_stops,
    routes_within_distance, routes_within_stops, shortest_distance, Frontier,
};
pub use walk::Walk;
