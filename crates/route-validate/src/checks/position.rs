//! Start/end position checks.
//!
//! Coinciding endpoints are not automatically a defect: routes may be
//! genuine loops. A known distance above 1000 m downgrades the finding to
//! an informational loop-course note; otherwise (distance unknown,
//! non-positive, or at most 1000 m) a very short loop is more likely a
//! data-entry mistake and stays a warning.

use route_model::{RouteIssue, RouteRecord, Severity};

pub fn check(route: &RouteRecord) -> Vec<RouteIssue> {
    let (Some(start_lat), Some(start_lng), Some(end_lat), Some(end_lng)) = (
        route.start_latitude,
        route.start_longitude,
        route.end_latitude,
        route.end_longitude,
    ) else {
        return vec![RouteIssue::for_route(
            route,
            Severity::Critical,
            "missing position data",
            "start or end position data is missing".to_string(),
        )];
    };
    if start_lat != end_lat || start_lng != end_lng {
        return Vec::new();
    }
    if route.distance_meters.is_some_and(|distance| distance > 1000.0) {
        vec![RouteIssue::for_route(
            route,
            Severity::Info,
            "loop course",
            "start and end positions are identical (probable loop course)".to_string(),
        )]
    } else {
        vec![RouteIssue::for_route(
            route,
            Severity::Warning,
            "start/end identical with short distance",
            "start and end positions are identical and the distance is short".to_string(),
        )]
    }
}
