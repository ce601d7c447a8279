//! Path geometry checks.
//!
//! An absent or empty object means the route cannot be drawn at all. A
//! present object must declare a LineString with at least two coordinates;
//! both of those defects can fire on the same record.

use route_model::{RouteIssue, RouteRecord, Severity};

pub fn check(route: &RouteRecord) -> Vec<RouteIssue> {
    let Some(path) = route.path_geojson.as_ref().filter(|path| !path.is_empty()) else {
        return vec![RouteIssue::for_route(
            route,
            Severity::Critical,
            "missing path",
            "path_geojson is missing or empty".to_string(),
        )];
    };
    let mut issues = Vec::new();
    if path.geometry_type != "LineString" {
        issues.push(RouteIssue::for_route(
            route,
            Severity::Critical,
            "wrong geometry type",
            format!(
                "geometry type is '{}' instead of 'LineString'",
                path.geometry_type
            ),
        ));
    }
    if path.coordinates.len() < 2 {
        issues.push(RouteIssue::for_route(
            route,
            Severity::Critical,
            "insufficient path points",
            format!(
                "path has fewer than 2 coordinates: {} point(s)",
                path.coordinates.len()
            ),
        ));
    }
    issues
}
