//! Description length check. Counts characters of the trimmed text, so
//! multi-byte scripts are measured the same as ASCII.

use route_model::{RouteIssue, RouteRecord, Severity};

pub fn check(route: &RouteRecord) -> Vec<RouteIssue> {
    let long_enough = route
        .description
        .as_deref()
        .is_some_and(|text| text.trim().chars().count() >= 10);
    if long_enough {
        return Vec::new();
    }
    vec![RouteIssue::for_route(
        route,
        Severity::Info,
        "description too short",
        "description is missing or shorter than 10 characters".to_string(),
    )]
}
