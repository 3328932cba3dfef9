//! The plain record shapes exchanged with the persistence and client
//! boundaries. Optional fields serialize as explicit `null` because the
//! stored documents carry them literally (`"id": null`), so none of these
//! structs skip absent fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const FEATURE_TYPE: &str = "Feature";
pub const POINT_TYPE: &str = "Point";

/// The wire form of a favourite place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceRecord {
    pub id: Option<String>,
    pub label: Option<String>,
    pub feature: Option<Feature>,
    #[serde(default)]
    pub stops: Vec<String>,
    pub category: Option<CategoryRecord>,
}

/// A GeoJSON style feature: a geometry plus descriptive properties.
/// Every nested level is optional so that partially populated client
/// payloads deserialize without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub geometry: Option<Geometry>,
    pub properties: Option<FeatureProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureProperties {
    pub name: Option<String>,
}

/// A point geometry. The coordinate order is `[latitude, longitude]` —
/// the opposite of the GeoJSON convention — and is kept that way for
/// compatibility with the stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRecord {
    pub id: String,
    pub label: String,
}
