//! Route index for a rail network
//!
//! Built once from the raw route list; every query borrows it read-only.
//! Departure lists keep the input order of the route list, so enumeration
//! output order is stable across runs.

mod parse;

pub use parse::parse_route_label;

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{RailError, Result};

/// A one-way route between two towns with a travel distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

/// Immutable lookup tables for a rail network.
#[derive(Debug, Default)]
pub struct RouteIndex {
    /// (from, to) -> distance
    weights: HashMap<(String, String), u32>,
    /// from -> departing routes, in route-list order
    departures: HashMap<String, Vec<Route>>,
}

impl RouteIndex {
    /// Build the index from route labels such as `"AB5"`.
    ///
    /// Rejects malformed labels and repeated (from, to) pairs; the route
    /// list is trusted to be small and is read exactly once.
    #[tracing::instrument(skip(labels))]
    pub fn build<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = RouteIndex::default();
        for label in labels {
            let route = parse_route_label(label.as_ref())?;
            index.insert(route)?;
        }
        tracing::debug!(
            towns = index.town_count(),
            routes = index.route_count(),
            "route index built"
        );
        Ok(index)
    }

    fn insert(&mut self, route: Route) -> Result<()> {
        let key = (route.from.clone(), route.to.clone());
        if self.weights.contains_key(&key) {
            return Err(RailError::DuplicateRoute {
                from: route.from,
                to: route.to,
            });
        }
        self.weights.insert(key, route.distance);
        self.departures
            .entry(route.from.clone())
            .or_default()
            .push(route);
        Ok(())
    }

    /// Distance of the direct route between two towns.
    pub fn weight(&self, from: &str, to: &str) -> Result<u32> {
        self.weights
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .ok_or_else(|| RailError::UnknownRoute {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Whether a direct route exists between two towns.
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.weights.contains_key(&(from.to_string(), to.to_string()))
    }

    /// Routes departing the given town, in route-list order.
    ///
    /// A town with no departures yields an empty slice, never an error.
    pub fn departures(&self, from: &str) -> &[Route] {
        self.departures.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of towns with at least one departing route.
    pub fn town_count(&self) -> usize {
        self.departures.len()
    }

    /// Total number of routes.
    pub fn route_count(&self) -> usize {
        self.weights.len()
    }

    /// Towns with departures, sorted for deterministic listing.
    pub fn towns(&self) -> Vec<&str> {
        let mut towns: Vec<&str> = self.departures.keys().map(String::as_str).collect();
        towns.sort_unstable();
        towns
    }
}
