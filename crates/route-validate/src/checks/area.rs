//! Area reference check. A blank id counts as unset.

use route_model::{RouteIssue, RouteRecord, Severity};

pub fn check(route: &RouteRecord) -> Vec<RouteIssue> {
    let has_area = route
        .area_id
        .as_deref()
        .is_some_and(|area| !area.trim().is_empty());
    if has_area {
        return Vec::new();
    }
    vec![RouteIssue::for_route(
        route,
        Severity::Warning,
        "missing area reference",
        "area_id is not set".to_string(),
    )]
}
