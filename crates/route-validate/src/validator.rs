use route_model::{AuditReport, RouteIssue, RouteRecord};

use crate::aggregate::aggregate;
use crate::checks;

/// One independent rule family: a pure function from record to findings.
type Check = fn(&RouteRecord) -> Vec<RouteIssue>;

/// Rule families in evaluation order. The rendered report preserves this
/// order within each severity tier, so the ordering here is part of the
/// output contract, not incidental.
const CHECKS: &[Check] = &[
    checks::distance::check,
    checks::duration::check,
    checks::path::check,
    checks::position::check,
    checks::area::check,
    checks::description::check,
];

/// Run every rule family against one route.
///
/// All families are evaluated unconditionally, so a single route can
/// accumulate any number of findings of mixed severity. The record is never
/// mutated and identical input yields identical output.
pub fn validate_route(route: &RouteRecord) -> Vec<RouteIssue> {
    let mut issues = Vec::new();
    for check in CHECKS {
        issues.extend(check(route));
    }
    issues
}

/// Validate every route in fetch order and fold the findings into a report.
pub fn audit_routes(routes: &[RouteRecord]) -> AuditReport {
    aggregate(routes.len(), routes.iter().map(validate_route))
}
