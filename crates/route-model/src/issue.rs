use serde::{Deserialize, Serialize};

use crate::record::RouteRecord;

/// Severity tiers, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Uppercase label used in rendered report lines.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

/// One finding produced by a rule against one route.
///
/// Issues are observations, not errors: they are collected, never thrown,
/// and never stop later rules or later routes from being evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteIssue {
    pub route_id: String,
    pub route_name: String,
    /// Human-readable defect name, e.g. "missing distance".
    pub category: String,
    /// Description with interpolated concrete values.
    pub message: String,
    pub severity: Severity,
}

impl RouteIssue {
    /// Build an issue owned by `route`.
    pub fn for_route(
        route: &RouteRecord,
        severity: Severity,
        category: &str,
        message: String,
    ) -> Self {
        Self {
            route_id: route.id().to_string(),
            route_name: route.display_name().to_string(),
            category: category.to_string(),
            message,
            severity,
        }
    }
}
