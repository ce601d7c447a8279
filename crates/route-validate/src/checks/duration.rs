//! Duration checks.
//!
//! Mutually exclusive like the distance family. Exactly 600 minutes is in
//! range.

use route_model::{RouteIssue, RouteRecord, Severity};

pub fn check(route: &RouteRecord) -> Vec<RouteIssue> {
    let Some(duration) = route.estimated_minutes else {
        return vec![RouteIssue::for_route(
            route,
            Severity::Critical,
            "missing duration",
            "estimated_minutes is not set".to_string(),
        )];
    };
    if duration <= 0.0 {
        return vec![RouteIssue::for_route(
            route,
            Severity::Critical,
            "non-positive duration",
            format!("duration is zero or negative: {duration} min"),
        )];
    }
    if duration > 600.0 {
        return vec![RouteIssue::for_route(
            route,
            Severity::Warning,
            "duration too long",
            format!(
                "duration exceeds 10 hours: {duration} min ({:.1} h)",
                duration / 60.0
            ),
        )];
    }
    Vec::new()
}
