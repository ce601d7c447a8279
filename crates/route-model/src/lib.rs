pub mod issue;
pub mod record;
pub mod report;

pub use issue::{RouteIssue, Severity};
pub use record::{PathGeometry, ROUTES_TABLE, RouteRecord};
pub use report::AuditReport;

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, severity: Severity) -> RouteIssue {
        RouteIssue {
            route_id: id.to_string(),
            route_name: "Harbor loop".to_string(),
            category: "missing distance".to_string(),
            message: "distance_meters is not set".to_string(),
            severity,
        }
    }

    #[test]
    fn report_buckets_and_counts() {
        let mut report = AuditReport::new(3);
        report.push(issue("r1", Severity::Critical));
        report.push(issue("r1", Severity::Info));
        report.push(issue("r2", Severity::Warning));

        assert_eq!(report.critical_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.info_count(), 1);
        assert_eq!(report.issue_count(), 3);
        assert_eq!(report.clean_count(), 1);
        assert!(report.has_critical());
        assert!(!report.is_clean());
        // Only the route with a critical issue is a deletion candidate.
        assert!(report.deletion_candidates.contains("r1"));
        assert!(!report.deletion_candidates.contains("r2"));
    }

    #[test]
    fn record_deserializes_nulls_and_missing_keys() {
        let json = r#"{
            "id": "route-001",
            "name": null,
            "distance_meters": 1200.0,
            "estimated_minutes": null,
            "start_latitude": 35.0
        }"#;
        let record: RouteRecord = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.id(), "route-001");
        assert_eq!(record.display_name(), "unnamed route");
        assert_eq!(record.distance_meters, Some(1200.0));
        assert_eq!(record.estimated_minutes, None);
        assert_eq!(record.start_longitude, None);
        assert!(record.path_geojson.is_none());
    }

    #[test]
    fn empty_geometry_object_parses() {
        let record: RouteRecord =
            serde_json::from_str(r#"{"path_geojson": {}}"#).expect("deserialize record");
        let path = record.path_geojson.expect("geometry present");
        assert!(path.is_empty());
    }

    #[test]
    fn geometry_tolerates_altitude_triples() {
        let record: RouteRecord = serde_json::from_str(
            r#"{"path_geojson": {"type": "LineString", "coordinates": [[139.0, 35.0, 12.5], [139.1, 35.1]]}}"#,
        )
        .expect("deserialize record");
        let path = record.path_geojson.expect("geometry present");
        assert_eq!(path.geometry_type, "LineString");
        assert_eq!(path.coordinates.len(), 2);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).expect("serialize severity"),
            "\"critical\""
        );
        let parsed: Severity = serde_json::from_str("\"info\"").expect("deserialize severity");
        assert_eq!(parsed, Severity::Info);
    }
}
