use route_model::{AuditReport, RouteIssue};

/// Fold per-route issue lists, in fetch order, into an [`AuditReport`].
///
/// Encounter order is preserved within each severity bucket. The report
/// exclusively owns the accumulating collection; nothing else writes to it.
/// A fold with no issues anywhere is a valid outcome, in which case the
/// clean count equals the total.
pub fn aggregate<I>(total_routes: usize, issue_lists: I) -> AuditReport
where
    I: IntoIterator<Item = Vec<RouteIssue>>,
{
    let mut report = AuditReport::new(total_routes);
    for issues in issue_lists {
        for issue in issues {
            report.push(issue);
        }
    }
    report
}
