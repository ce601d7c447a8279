//! Machine-readable report payload for programmatic consumers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use route_model::{AuditReport, RouteIssue};

const REPORT_SCHEMA: &str = "route-ops.audit-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct AuditReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub total_routes: usize,
    pub critical_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub clean_count: usize,
    pub critical: &'a [RouteIssue],
    pub warnings: &'a [RouteIssue],
    pub info: &'a [RouteIssue],
    pub deletion_candidates: Vec<&'a str>,
}

/// Build the serializable payload for a report, stamped with the current
/// time.
pub fn report_payload(report: &AuditReport) -> AuditReportPayload<'_> {
    AuditReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        total_routes: report.total_routes,
        critical_count: report.critical_count(),
        warning_count: report.warning_count(),
        info_count: report.info_count(),
        clean_count: report.clean_count(),
        critical: &report.critical,
        warnings: &report.warnings,
        info: &report.info,
        deletion_candidates: report
            .deletion_candidates
            .iter()
            .map(String::as_str)
            .collect(),
    }
}

/// Serialize the report payload to `output_path`, creating parent
/// directories as needed.
pub fn write_report_json(output_path: &Path, report: &AuditReport) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = report_payload(report);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}
