use super::*;
use crate::index::RouteIndex;

const SAMPLE: [&str; 9] = [
    "AB5", "BC4", "CD8", "DC8", "DE6", "AD5", "CE2", "EB3", "AE7",
];

fn sample_index() -> RouteIndex {
    RouteIndex::build(SAMPLE).unwrap()
}

fn route_strings(walks: &[Walk]) -> Vec<String> {
    walks.iter().map(|walk| walk.to_string()).collect()
}

/// Recursive reference enumerator mirroring the engine's collection policy:
/// matches are walks ending at `end`, and expansion never continues through
/// a walk that has returned to `start` when start and end differ.
fn brute_force_within_stops(
    index: &RouteIndex,
    start: &str,
    end: &str,
    max_stops: usize,
) -> Vec<String> {
    fn step(
        index: &RouteIndex,
        start: &str,
        end: &str,
        max_stops: usize,
        current: &mut Vec<String>,
        found: &mut Vec<String>,
    ) {
        let last = current.last().cloned().unwrap_or_default();
        for route in index.departures(&last) {
            current.push(route.to.clone());
            if route.to == end {
                found.push(current.join(""));
            }
            let pruned = start != end && route.to == start;
            if !pruned && current.len() - 1 < max_stops {
                step(index, start, end, max_stops, current, found);
            }
            current.pop();
        }
    }

    let mut found = Vec::new();
    let mut current = vec![start.to_string()];
    step(index, start, end, max_stops, &mut current, &mut found);
    found.sort();
    found
}

#[test]
fn test_fixed_path_distances() {
    let index = sample_index();
    assert_eq!(fixed_path_distance(&index, &["A", "B", "C"]).unwrap(), 9);
    assert_eq!(fixed_path_distance(&index, &["A", "D"]).unwrap(), 5);
    assert_eq!(fixed_path_distance(&index, &["A", "D", "C"]).unwrap(), 13);
    assert_eq!(
        fixed_path_distance(&index, &["A", "E", "B", "C", "D"]).unwrap(),
        22
    );
}

#[test]
fn test_fixed_path_with_missing_hop() {
    let index = sample_index();
    assert!(matches!(
        fixed_path_distance(&index, &["A", "E", "D"]),
        Err(RailError::NoSuchRoute)
    ));
}

#[test]
fn test_round_trip_c_to_c_with_max_three_stops() {
    let index = sample_index();
    let walks = routes_within_stops(&index, "C", "C", 3);
    assert_eq!(route_strings(&walks), ["CDC", "CEBC"]);
}

#[test]
fn test_a_to_c_with_exactly_four_stops() {
    let index = sample_index();
    let walks = routes_with_exact_stops(&index, "A", "C", 4);
    assert_eq!(route_strings(&walks), ["ABCDC", "ADCDC", "ADEBC"]);
}

#[test]
fn test_shortest_distances() {
    let index = sample_index();
    assert_eq!(shortest_distance(&index, "A", "C").unwrap(), 9);
    assert_eq!(shortest_distance(&index, "B", "B").unwrap(), 9);
    assert_eq!(shortest_distance(&index, "C", "C").unwrap(), 9);
    assert_eq!(shortest_distance(&index, "A", "D").unwrap(), 5);
}

#[test]
fn test_c_to_c_below_distance_thirty() {
    let index = sample_index();
    let walks = routes_within_distance(&index, "C", "C", 30);
    assert_eq!(walks.len(), 7);
    assert!(walks.iter().all(|walk| walk.distance() < 30));

    let mut routes = route_strings(&walks);
    routes.sort();
    assert_eq!(
        routes,
        [
            "CDC",
            "CDCEBC",
            "CDEBC",
            "CEBC",
            "CEBCDC",
            "CEBCEBC",
            "CEBCEBCEBC",
        ]
    );
}

#[test]
fn test_enumerated_walks_connect_start_to_end() {
    let index = sample_index();
    for walk in routes_within_distance(&index, "C", "C", 30) {
        assert_eq!(walk.first(), "C");
        assert_eq!(walk.last(), "C");
        let towns: Vec<&str> = walk.towns().iter().map(String::as_str).collect();
        assert_eq!(fixed_path_distance(&index, &towns).unwrap(), walk.distance());
    }
}

#[test]
fn test_stop_bound_matches_brute_force() {
    let index = sample_index();
    for (start, end, max_stops) in [("A", "C", 4), ("C", "C", 5), ("B", "B", 6), ("A", "E", 3)] {
        let mut engine = route_strings(&routes_within_stops(&index, start, end, max_stops));
        engine.sort();
        let expected = brute_force_within_stops(&index, start, end, max_stops);
        assert_eq!(engine, expected, "{start}->{end} within {max_stops} stops");
    }
}

#[test]
fn test_walks_never_loop_through_start() {
    let index = RouteIndex::build(["AB3", "BA2", "BC4", "CA1"]).unwrap();
    let walks = routes_within_stops(&index, "A", "C", 5);
    assert_eq!(route_strings(&walks), ["ABC"]);
}

#[test]
fn test_enumerate_stops_when_predicate_declines() {
    let index = sample_index();
    let walks = enumerate_routes(&index, "A", "C", |_| false);
    assert!(walks.is_empty());
}

#[test]
fn test_enumerate_from_town_without_departures() {
    let index = RouteIndex::build(["AB3", "BC4"]).unwrap();
    let walks = enumerate_routes(&index, "C", "A", |frontier| {
        frontier.min_stop_count().is_some_and(|stops| stops < 5)
    });
    assert!(walks.is_empty());
}

#[test]
fn test_enumerate_from_unknown_town() {
    let index = sample_index();
    let walks = routes_within_stops(&index, "Z", "C", 4);
    assert!(walks.is_empty());
}

#[test]
fn test_minimum_distance_of_empty_set() {
    assert!(matches!(minimum_distance(&[]), Err(RailError::NoRoute)));
}

#[test]
fn test_shortest_between_unconnected_towns() {
    let index = RouteIndex::build(["AB3", "CD2"]).unwrap();
    assert!(matches!(
        shortest_distance(&index, "A", "D"),
        Err(RailError::NoRoute)
    ));
}

#[test]
fn test_frontier_signals_grow_per_round() {
    let index = sample_index();
    let mut stop_counts: Vec<usize> = Vec::new();
    let mut distances: Vec<u32> = Vec::new();
    enumerate_routes(&index, "A", "C", |frontier| {
        assert!(!frontier.walks().is_empty());
        let stops = frontier.min_stop_count().unwrap_or_default();
        stop_counts.push(stops);
        distances.push(frontier.min_distance().unwrap_or_default());
        stops < 4
    });
    assert!(stop_counts.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(distances.windows(2).all(|pair| pair[0] < pair[1]));
}
