//! Frontier expansion and distance queries
//!
//! The engine grows a frontier of walks one route per round, collects every
//! walk that arrives at the end town, and leaves termination to a caller
//! predicate over the frontier's progress signals.

use crate::error::{RailError, Result};
use crate::graph::walk::Walk;
use crate::index::RouteIndex;

/// The walks under active extension during one enumeration call.
///
/// Every walk in a frontier has the same stop count, and both the minimum
/// stop count and the minimum distance grow with each round; "while below
/// threshold" predicates therefore always reach a stopping round.
#[derive(Debug)]
pub struct Frontier {
    walks: Vec<Walk>,
}

impl Frontier {
    fn seed(start: &str) -> Self {
        Frontier {
            walks: vec![Walk::origin(start)],
        }
    }

    /// Walks currently under extension.
    pub fn walks(&self) -> &[Walk] {
        &self.walks
    }

    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    /// Minimum stop count across the frontier; `None` when empty.
    pub fn min_stop_count(&self) -> Option<usize> {
        self.walks.iter().map(Walk::stop_count).min()
    }

    /// Minimum accumulated distance across the frontier; `None` when empty.
    pub fn min_distance(&self) -> Option<u32> {
        self.walks.iter().map(Walk::distance).min()
    }
}

/// Enumerate walks from `start` to `end` while `keep_expanding` holds.
///
/// Each round extends every frontier walk by one departing route and
/// records the walks that arrive at `end`, in discovery order. Matched
/// walks stay in the frontier - longer routes looping through the end town
/// are still valid - and the only pruning drops walks that return to
/// `start` when start and end differ. Callers bound the run through the
/// predicate and apply their exact filter to the returned superset.
#[tracing::instrument(skip(index, keep_expanding), fields(start = %start, end = %end))]
pub fn enumerate_routes<F>(
    index: &RouteIndex,
    start: &str,
    end: &str,
    mut keep_expanding: F,
) -> Vec<Walk>
where
    F: FnMut(&Frontier) -> bool,
{
    let mut frontier = Frontier::seed(start);
    let mut matches: Vec<Walk> = Vec::new();
    let mut round = 0usize;

    while !frontier.is_empty() && keep_expanding(&frontier) {
        let mut next: Vec<Walk> = Vec::new();
        for walk in &frontier.walks {
            for route in index.departures(walk.last()) {
                next.push(walk.extended(route));
            }
        }

        for walk in &next {
            if walk.last() == end {
                matches.push(walk.clone());
            }
        }

        if start != end {
            next.retain(|walk| walk.last() != start);
        }

        round += 1;
        tracing::debug!(
            round,
            frontier = next.len(),
            matches = matches.len(),
            "traversal round"
        );
        frontier.walks = next;
    }

    matches
}

/// Distance of a fully specified walk, summed hop by hop.
pub fn fixed_path_distance(index: &RouteIndex, towns: &[&str]) -> Result<u32> {
    Walk::from_towns(index, towns).map(|walk| walk.distance())
}

/// Minimum distance over a collection of enumerated walks.
pub fn minimum_distance(walks: &[Walk]) -> Result<u32> {
    walks.iter().map(Walk::distance).min().ok_or(RailError::NoRoute)
}

/// Walks from `start` to `end` using at most `max_stops` routes.
pub fn routes_within_stops(
    index: &RouteIndex,
    start: &str,
    end: &str,
    max_stops: usize,
) -> Vec<Walk> {
    enumerate_routes(index, start, end, |frontier| {
        frontier
            .min_stop_count()
            .is_some_and(|stops| stops < max_stops)
    })
    .into_iter()
    .filter(|walk| walk.stop_count() <= max_stops)
    .collect()
}

/// Walks from `start` to `end` using exactly `stops` routes.
pub fn routes_with_exact_stops(
    index: &RouteIndex,
    start: &str,
    end: &str,
    stops: usize,
) -> Vec<Walk> {
    enumerate_routes(index, start, end, |frontier| {
        frontier.min_stop_count().is_some_and(|count| count < stops)
    })
    .into_iter()
    .filter(|walk| walk.stop_count() == stops)
    .collect()
}

/// Walks from `start` to `end` strictly shorter than `limit`.
pub fn routes_within_distance(
    index: &RouteIndex,
    start: &str,
    end: &str,
    limit: u32,
) -> Vec<Walk> {
    enumerate_routes(index, start, end, |frontier| {
        frontier
            .min_distance()
            .is_some_and(|distance| distance < limit)
    })
    .into_iter()
    .filter(|walk| walk.distance() < limit)
    .collect()
}

/// Minimum distance from `start` to `end` over at least one route.
///
/// A shortest walk never needs more routes than there are towns, so the
/// expansion is bounded there; works when start equals end.
#[tracing::instrument(skip(index), fields(start = %start, end = %end))]
pub fn shortest_distance(index: &RouteIndex, start: &str, end: &str) -> Result<u32> {
    let town_count = index.town_count();
    let matches = enumerate_routes(index, start, end, |frontier| {
        frontier
            .min_stop_count()
            .is_some_and(|stops| stops < town_count)
    });
    minimum_distance(&matches)
}

#[cfg(test)]
mod tests;
