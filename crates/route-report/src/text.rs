//! Plain-text rendering of an audit report.

use route_model::{AuditReport, ROUTES_TABLE, RouteIssue};

const HEAVY_RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Render the severity-ordered report.
///
/// Layout: a header with the run counts, then one section per non-empty
/// severity tier (critical, warning, info, each in encounter order), then,
/// when any route carries a critical issue, the deletion-candidate list and
/// one remediation statement per candidate.
pub fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("Route data quality audit\n");
    out.push_str(HEAVY_RULE);
    out.push_str("\n\n");

    out.push_str(&format!("Total routes:    {}\n", report.total_routes));
    out.push_str(&format!("Critical issues: {}\n", report.critical_count()));
    out.push_str(&format!("Warnings:        {}\n", report.warning_count()));
    out.push_str(&format!("Info notes:      {}\n", report.info_count()));
    out.push_str(&format!("Clean routes:    {}\n", report.clean_count()));

    push_section(&mut out, "CRITICAL (deletion recommended)", &report.critical);
    push_section(&mut out, "WARNING (review recommended)", &report.warnings);
    push_section(&mut out, "INFO (optional follow-up)", &report.info);

    if !report.deletion_candidates.is_empty() {
        out.push('\n');
        out.push_str(HEAVY_RULE);
        out.push('\n');
        out.push_str("Routes recommended for deletion\n");
        out.push_str(HEAVY_RULE);
        out.push('\n');
        for id in &report.deletion_candidates {
            out.push_str(&format!("  - {id}\n"));
        }
        out.push('\n');
        out.push_str("Remediation SQL:\n");
        out.push_str(LIGHT_RULE);
        out.push('\n');
        out.push_str("-- delete routes with at least one critical issue\n");
        for statement in remediation_statements(report) {
            out.push_str(&statement);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("Audit complete\n");
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out
}

/// One idempotent delete statement per deletion candidate, in the set's
/// iteration order. Each statement stands alone, so re-running any subset
/// is safe.
pub fn remediation_statements(report: &AuditReport) -> Vec<String> {
    report
        .deletion_candidates
        .iter()
        .map(|id| format!("DELETE FROM {ROUTES_TABLE} WHERE id = '{id}';"))
        .collect()
}

fn push_section(out: &mut String, title: &str, issues: &[RouteIssue]) {
    if issues.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(LIGHT_RULE);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(LIGHT_RULE);
    out.push('\n');
    for issue in issues {
        out.push_str(&format!(
            "\n[{}] {} ({})\n  -> {}: {}\n",
            issue.severity.label(),
            issue.route_name,
            issue.route_id,
            issue.category,
            issue.message
        ));
    }
}
