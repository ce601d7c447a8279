//! Unit tests for the rule engine.

use route_model::{PathGeometry, RouteRecord, Severity};
use route_validate::validate_route;

fn line_string() -> PathGeometry {
    PathGeometry {
        geometry_type: "LineString".to_string(),
        coordinates: vec![vec![139.0, 35.0], vec![139.2, 35.1]],
    }
}

/// A route that passes every rule: all fields present and in range,
/// endpoints distinct.
fn valid_route() -> RouteRecord {
    RouteRecord {
        id: Some("route-001".to_string()),
        name: Some("Harbor loop".to_string()),
        distance_meters: Some(5000.0),
        estimated_minutes: Some(90.0),
        path_geojson: Some(line_string()),
        start_latitude: Some(35.0),
        start_longitude: Some(139.0),
        end_latitude: Some(35.1),
        end_longitude: Some(139.2),
        area_id: Some("yokohama".to_string()),
        description: Some("A calm waterfront walk with plenty of shade.".to_string()),
    }
}

fn categories(route: &RouteRecord) -> Vec<String> {
    validate_route(route)
        .into_iter()
        .map(|issue| issue.category)
        .collect()
}

#[test]
fn fully_valid_route_is_clean() {
    assert!(validate_route(&valid_route()).is_empty());
}

#[test]
fn missing_distance_emits_exactly_one_critical() {
    let route = RouteRecord {
        distance_meters: None,
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category, "missing distance");
    assert_eq!(issues[0].severity, Severity::Critical);
    assert_eq!(issues[0].route_id, "route-001");
    assert_eq!(issues[0].route_name, "Harbor loop");
}

#[test]
fn distance_rules_are_mutually_exclusive() {
    let cases: &[(Option<f64>, Option<&str>)] = &[
        (None, Some("missing distance")),
        (Some(-10.0), Some("non-positive distance")),
        (Some(0.0), Some("non-positive distance")),
        (Some(100.0), Some("distance too short")),
        (Some(499.0), Some("distance too short")),
        (Some(500.0), None),
        (Some(100_000.0), None),
        (Some(100_001.0), Some("distance too long")),
    ];
    for (distance, expected) in cases {
        let route = RouteRecord {
            distance_meters: *distance,
            ..valid_route()
        };
        let fired: Vec<String> = categories(&route)
            .into_iter()
            .filter(|category| category.contains("distance"))
            .collect();
        match expected {
            Some(category) => {
                assert_eq!(fired, vec![category.to_string()], "distance {distance:?}");
            }
            None => assert!(fired.is_empty(), "distance {distance:?} fired {fired:?}"),
        }
    }
}

#[test]
fn duration_boundaries() {
    let route = RouteRecord {
        estimated_minutes: None,
        ..valid_route()
    };
    assert_eq!(categories(&route), vec!["missing duration"]);

    let route = RouteRecord {
        estimated_minutes: Some(0.0),
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(issues[0].category, "non-positive duration");
    assert_eq!(issues[0].severity, Severity::Critical);

    let route = RouteRecord {
        estimated_minutes: Some(600.0),
        ..valid_route()
    };
    assert!(validate_route(&route).is_empty());

    let route = RouteRecord {
        estimated_minutes: Some(601.0),
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(issues[0].category, "duration too long");
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn absent_or_empty_path_is_one_critical() {
    let route = RouteRecord {
        path_geojson: None,
        ..valid_route()
    };
    assert_eq!(categories(&route), vec!["missing path"]);

    let route = RouteRecord {
        path_geojson: Some(PathGeometry::default()),
        ..valid_route()
    };
    assert_eq!(categories(&route), vec!["missing path"]);
}

#[test]
fn point_geometry_fires_type_and_count_rules() {
    // Scenario: a Point payload with a single nested pair.
    let route = RouteRecord {
        path_geojson: Some(PathGeometry {
            geometry_type: "Point".to_string(),
            coordinates: vec![vec![0.0, 0.0]],
        }),
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(
        issues
            .iter()
            .map(|issue| issue.category.as_str())
            .collect::<Vec<_>>(),
        vec!["wrong geometry type", "insufficient path points"]
    );
    assert!(issues.iter().all(|issue| issue.severity == Severity::Critical));
}

#[test]
fn missing_position_scalar_is_critical() {
    let route = RouteRecord {
        end_longitude: None,
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category, "missing position data");
    assert_eq!(issues[0].severity, Severity::Critical);
}

#[test]
fn short_route_with_identical_endpoints_warns_twice() {
    // distance 100: too short (< 500) and the endpoint coincidence stays a
    // warning because 100 <= 1000.
    let route = RouteRecord {
        distance_meters: Some(100.0),
        estimated_minutes: Some(30.0),
        start_latitude: Some(35.0),
        start_longitude: Some(139.0),
        end_latitude: Some(35.0),
        end_longitude: Some(139.0),
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(
        issues
            .iter()
            .map(|issue| (issue.category.as_str(), issue.severity))
            .collect::<Vec<_>>(),
        vec![
            ("distance too short", Severity::Warning),
            ("start/end identical with short distance", Severity::Warning),
        ]
    );
}

#[test]
fn long_loop_is_informational() {
    // Same endpoints, but distance 5000 > 1000: the coincidence downgrades
    // to a loop-course note and the short-distance warning disappears.
    let route = RouteRecord {
        start_latitude: Some(35.0),
        start_longitude: Some(139.0),
        end_latitude: Some(35.0),
        end_longitude: Some(139.0),
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category, "loop course");
    assert_eq!(issues[0].severity, Severity::Info);
}

#[test]
fn loop_threshold_is_exclusive_at_1000() {
    let loop_route = |distance: Option<f64>| RouteRecord {
        distance_meters: distance,
        start_latitude: Some(35.0),
        start_longitude: Some(139.0),
        end_latitude: Some(35.0),
        end_longitude: Some(139.0),
        ..valid_route()
    };

    let issues = validate_route(&loop_route(Some(1000.0)));
    assert!(
        issues
            .iter()
            .any(|issue| issue.category == "start/end identical with short distance")
    );

    let issues = validate_route(&loop_route(Some(1001.0)));
    assert!(issues.iter().any(|issue| issue.category == "loop course"));

    // Unknown distance also lands on the warning branch, on top of the
    // missing-distance critical.
    let issues = validate_route(&loop_route(None));
    assert!(
        issues
            .iter()
            .any(|issue| issue.category == "start/end identical with short distance")
    );
}

#[test]
fn blank_area_counts_as_unset() {
    let route = RouteRecord {
        area_id: Some("  ".to_string()),
        ..valid_route()
    };
    let issues = validate_route(&route);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category, "missing area reference");
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn description_is_measured_in_characters() {
    let route = RouteRecord {
        description: Some("short".to_string()),
        ..valid_route()
    };
    assert_eq!(categories(&route), vec!["description too short"]);

    let route = RouteRecord {
        description: Some("0123456789".to_string()),
        ..valid_route()
    };
    assert!(validate_route(&route).is_empty());

    // Eleven characters of Japanese text, well over ten bytes each.
    let route = RouteRecord {
        description: Some("海沿いを歩く良い道です".to_string()),
        ..valid_route()
    };
    assert!(validate_route(&route).is_empty());
}

#[test]
fn validation_is_idempotent() {
    let route = RouteRecord {
        distance_meters: Some(-3.0),
        estimated_minutes: None,
        description: None,
        ..valid_route()
    };
    let first = validate_route(&route);
    let second = validate_route(&route);
    assert_eq!(first, second);
}

#[test]
fn all_fields_absent_accumulates_mixed_severities() {
    let route = RouteRecord::default();
    let issues = validate_route(&route);
    assert_eq!(
        issues
            .iter()
            .map(|issue| issue.category.as_str())
            .collect::<Vec<_>>(),
        vec![
            "missing distance",
            "missing duration",
            "missing path",
            "missing position data",
            "missing area reference",
            "description too short",
        ]
    );
    assert!(issues.iter().all(|issue| issue.route_id == "unknown"));
    assert!(issues.iter().all(|issue| issue.route_name == "unnamed route"));
}
