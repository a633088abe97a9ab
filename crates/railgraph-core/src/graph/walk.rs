//! Walk value type
//!
//! A walk is a concrete town sequence where every consecutive pair is a
//! route in the index. Search code grows walks through [`Walk::origin`] and
//! [`Walk::extended`], so a walk always carries its accumulated distance
//! and is edge-valid by construction; externally supplied sequences go
//! through the validating [`Walk::from_towns`].

use std::fmt;

use crate::error::{RailError, Result};
use crate::index::{Route, RouteIndex};

/// A town sequence connected by valid routes. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    towns: Vec<String>,
    distance: u32,
}

impl Walk {
    /// The single-town walk a search starts from.
    pub(crate) fn origin(town: &str) -> Self {
        Walk {
            towns: vec![town.to_string()],
            distance: 0,
        }
    }

    /// The walk obtained by following one departing route.
    pub(crate) fn extended(&self, route: &Route) -> Self {
        debug_assert_eq!(self.last(), route.from);
        let mut towns = self.towns.clone();
        towns.push(route.to.clone());
        Walk {
            towns,
            distance: self.distance + route.distance,
        }
    }

    /// Validate an externally supplied town sequence against the index.
    ///
    /// Fails with [`RailError::NoSuchRoute`] when the sequence has fewer
    /// than two towns or any hop is missing from the index.
    pub fn from_towns(index: &RouteIndex, towns: &[&str]) -> Result<Self> {
        if towns.len() < 2 {
            return Err(RailError::NoSuchRoute);
        }
        let mut walk = Walk::origin(towns[0]);
        for hop in towns.windows(2) {
            let distance = index
                .weight(hop[0], hop[1])
                .map_err(|_| RailError::NoSuchRoute)?;
            walk.towns.push(hop[1].to_string());
            walk.distance += distance;
        }
        Ok(walk)
    }

    /// Towns along the walk, start to end.
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// The town the walk starts from.
    pub fn first(&self) -> &str {
        self.towns.first().map(String::as_str).unwrap_or_default()
    }

    /// The town the walk currently ends at.
    pub fn last(&self) -> &str {
        self.towns.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of routes traversed.
    pub fn stop_count(&self) -> usize {
        self.towns.len() - 1
    }

    /// Sum of route distances along the walk.
    pub fn distance(&self) -> u32 {
        self.distance
    }
}

impl fmt::Display for Walk {
    /// Compact notation: the walk A -> B -> C prints as `ABC`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for town in &self.towns {
            f.write_str(town)?;
        }
        Ok(())
    }
}
