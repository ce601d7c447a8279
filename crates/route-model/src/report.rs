use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::issue::{RouteIssue, Severity};

/// Aggregated outcome of one audit run.
///
/// Issues are grouped by severity tier in encounter order: route fetch
/// order, then rule order within a route. Grouping is over issues, not over
/// routes, so one route may appear in several tiers at once. The report is
/// recomputed from scratch on every run and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    pub total_routes: usize,
    pub critical: Vec<RouteIssue>,
    pub warnings: Vec<RouteIssue>,
    pub info: Vec<RouteIssue>,
    /// Distinct ids of routes carrying at least one issue of any tier.
    pub flagged_routes: BTreeSet<String>,
    /// Distinct ids of routes carrying at least one critical issue.
    pub deletion_candidates: BTreeSet<String>,
}

impl AuditReport {
    pub fn new(total_routes: usize) -> Self {
        Self {
            total_routes,
            ..Self::default()
        }
    }

    /// Append one issue to its severity bucket and update the id sets.
    pub fn push(&mut self, issue: RouteIssue) {
        self.flagged_routes.insert(issue.route_id.clone());
        match issue.severity {
            Severity::Critical => {
                self.deletion_candidates.insert(issue.route_id.clone());
                self.critical.push(issue);
            }
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    pub fn critical_count(&self) -> usize {
        self.critical.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn info_count(&self) -> usize {
        self.info.len()
    }

    pub fn issue_count(&self) -> usize {
        self.critical.len() + self.warnings.len() + self.info.len()
    }

    /// Routes with zero issues of any tier.
    pub fn clean_count(&self) -> usize {
        self.total_routes - self.flagged_routes.len()
    }

    pub fn has_critical(&self) -> bool {
        !self.critical.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.flagged_routes.is_empty()
    }
}
