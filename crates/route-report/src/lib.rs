//! Rendering for route audit reports.
//!
//! Rendering is pure: both the text and JSON shapes are built from an
//! [`route_model::AuditReport`] value without touching any sink, so tests
//! can assert on the output directly. Writing to stdout or disk is the
//! caller's responsibility (the JSON writer is the one convenience that
//! does its own file write).

mod json;
mod text;

pub use json::{AuditReportPayload, report_payload, write_report_json};
pub use text::{remediation_statements, render_report};
