//! Route label parsing
//!
//! A label encodes origin, destination, and distance with no separators:
//! `"AB5"` is the route from A to B with distance 5.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{RailError, Result};
use crate::index::Route;

static LABEL_RE: OnceLock<Regex> = OnceLock::new();

fn label_re() -> &'static Regex {
    LABEL_RE.get_or_init(|| {
        Regex::new(r"^([A-Z])([A-Z])([0-9]+)$").expect("route label pattern compiles")
    })
}

/// Parse a single route label.
pub fn parse_route_label(label: &str) -> Result<Route> {
    let malformed = |reason: &str| RailError::MalformedRoute {
        label: label.to_string(),
        reason: reason.to_string(),
    };

    let caps = label_re()
        .captures(label.trim())
        .ok_or_else(|| malformed("expected two town letters followed by a distance"))?;

    let from = caps[1].to_string();
    let to = caps[2].to_string();
    if from == to {
        return Err(malformed("self-loops are not allowed"));
    }

    let distance = caps[3]
        .parse::<u32>()
        .map_err(|_| malformed("distance is out of range"))?;

    Ok(Route { from, to, distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_label() {
        let route = parse_route_label("AB5").unwrap();
        assert_eq!(route.from, "A");
        assert_eq!(route.to, "B");
        assert_eq!(route.distance, 5);
    }

    #[test]
    fn test_parse_multi_digit_distance() {
        let route = parse_route_label("CE12").unwrap();
        assert_eq!(route.distance, 12);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_route_label(" AB5 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_missing_distance() {
        assert!(matches!(
            parse_route_label("AB"),
            Err(RailError::MalformedRoute { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_short_prefix() {
        assert!(parse_route_label("A5").is_err());
        assert!(parse_route_label("5AB").is_err());
        assert!(parse_route_label("ABC5").is_err());
    }

    #[test]
    fn test_parse_rejects_lowercase() {
        assert!(parse_route_label("ab5").is_err());
    }

    #[test]
    fn test_parse_rejects_self_loop() {
        assert!(matches!(
            parse_route_label("AA3"),
            Err(RailError::MalformedRoute { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_overflowing_distance() {
        assert!(parse_route_label("AB99999999999").is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_route_label("").is_err());
    }
}
