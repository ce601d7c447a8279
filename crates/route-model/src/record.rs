use serde::{Deserialize, Serialize};

/// Table holding the recommended routes. Shared by the REST fetch path and
/// the remediation SQL template so both always target the same relation.
pub const ROUTES_TABLE: &str = "recommended_routes";

/// One route row under audit.
///
/// The hosted rows are loosely typed: any attribute may be null or missing
/// entirely. Absence is meaningful input to the rule engine, not an upstream
/// error, so every field is optional and `#[serde(default)]` maps both
/// explicit nulls and omitted keys to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Distance in meters, raw stored units.
    #[serde(default)]
    pub distance_meters: Option<f64>,
    /// Estimated duration in minutes, raw stored units.
    #[serde(default)]
    pub estimated_minutes: Option<f64>,
    #[serde(default)]
    pub path_geojson: Option<PathGeometry>,
    #[serde(default)]
    pub start_latitude: Option<f64>,
    #[serde(default)]
    pub start_longitude: Option<f64>,
    #[serde(default)]
    pub end_latitude: Option<f64>,
    #[serde(default)]
    pub end_longitude: Option<f64>,
    #[serde(default)]
    pub area_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RouteRecord {
    /// Identifier used in report lines and remediation statements.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// Display name used in report lines.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed route")
    }
}

/// GeoJSON-shaped path payload stored alongside a route.
///
/// Both fields are defaulted so an empty `{}` object deserializes instead of
/// failing the whole fetch; the rule engine treats such an object the same
/// as an absent path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    #[serde(rename = "type", default)]
    pub geometry_type: String,
    /// Coordinate positions. Pairs in practice; altitude triples tolerated.
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

impl PathGeometry {
    /// True when the stored object carries neither a type nor coordinates.
    pub fn is_empty(&self) -> bool {
        self.geometry_type.is_empty() && self.coordinates.is_empty()
    }
}
