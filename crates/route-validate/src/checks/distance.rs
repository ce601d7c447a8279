//! Distance checks.
//!
//! The four distance rules are mutually exclusive for a given record: a
//! route is either missing its distance, non-positive, longer than 100 km,
//! shorter than 500 m, or unremarkable. Exactly 500 m and exactly 100 km
//! are both in range.

use route_model::{RouteIssue, RouteRecord, Severity};

pub fn check(route: &RouteRecord) -> Vec<RouteIssue> {
    let Some(distance) = route.distance_meters else {
        return vec![RouteIssue::for_route(
            route,
            Severity::Critical,
            "missing distance",
            "distance_meters is not set".to_string(),
        )];
    };
    if distance <= 0.0 {
        return vec![RouteIssue::for_route(
            route,
            Severity::Critical,
            "non-positive distance",
            format!("distance is zero or negative: {distance} m"),
        )];
    }
    if distance > 100_000.0 {
        return vec![RouteIssue::for_route(
            route,
            Severity::Warning,
            "distance too long",
            format!("distance exceeds 100 km: {:.1} km", distance / 1000.0),
        )];
    }
    if distance < 500.0 {
        return vec![RouteIssue::for_route(
            route,
            Severity::Warning,
            "distance too short",
            format!("distance is under 500 m: {distance} m"),
        )];
    }
    Vec::new()
}
