use serde::{Deserialize, Serialize};

use crate::api::shared::{IdLayer, IdNameLayer, Position};
use crate::deserialize::null_as_empty;

/// Bounding polygon coordinates. The API sends either one ring of lon/lat
/// points or GeoJSON-style nested rings; both are kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Ring(Vec<Position>),
    Rings(Vec<Vec<Position>>),
}

impl Coordinates {
    /// Every point, rings concatenated in order.
    pub fn points(&self) -> Vec<Position> {
        match self {
            Coordinates::Ring(ring) => ring.clone(),
            Coordinates::Rings(rings) => rings.iter().flatten().copied().collect(),
        }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Coordinates::Ring(Vec::new())
    }
}

/// Polygon with a list of lon/lat coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub coordinates: Coordinates,
}

/// Geography reference record from `/reference/geographies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
    pub leaf: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parent: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hierarchy: Vec<IdLayer>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exclusion_rule: Vec<IdNameLayer>,
    pub bounding_box: Option<BoundingBox>,
    pub centre_point: Option<Position>,
    pub location: Option<Position>,
    pub ref_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deserialize::deserialize;
    use crate::error::SdkError;
    use serde_json::json;

    #[test]
    fn test_geography_reference() {
        let geo: Geography = deserialize(&json!({
            "id": "68faf65af1345067f11dc6723b8da32f00e304a6f33c000118fccd81947deb4e",
            "name": "Rotterdam [NL]",
            "layer": ["port"],
            "leaf": true,
            "hierarchy": [{"id": "g-nl", "layer": ["country"]}],
            "centre_point": [4.29, 51.87],
            "bounding_box": {"type": "Polygon", "coordinates": [[[4.0, 51.0], [5.0, 52.0]]]}
        }))
        .unwrap();

        assert_eq!(geo.layer, vec!["port".to_string()]);
        assert_eq!(geo.centre_point, Some([4.29, 51.87]));
        assert_eq!(geo.hierarchy[0].layer, vec!["country".to_string()]);
        let bbox = geo.bounding_box.unwrap();
        assert!(matches!(bbox.coordinates, Coordinates::Rings(_)));
        assert_eq!(bbox.coordinates.points()[1], [5.0, 52.0]);
        assert!(geo.exclusion_rule.is_empty());
        assert_eq!(geo.location, None);
    }

    #[test]
    fn test_flat_ring_bounding_box() {
        let geo: Geography = deserialize(&json!({
            "id": "g",
            "bounding_box": {"type": "Polygon", "coordinates": [[4.0, 51.0], [5.0, 52.0]]}
        }))
        .unwrap();
        let bbox = geo.bounding_box.unwrap();
        assert_eq!(
            bbox.coordinates,
            Coordinates::Ring(vec![[4.0, 51.0], [5.0, 52.0]])
        );

        let again: BoundingBox = deserialize(&serde_json::to_value(&bbox).unwrap()).unwrap();
        assert_eq!(again, bbox);
    }

    #[test]
    fn test_bad_centre_point() {
        let err = deserialize::<Geography>(&json!({"id": "g", "centre_point": [4.29, "51"]}))
            .unwrap_err();
        match err {
            SdkError::Deserialization { path, .. } => assert_eq!(path, "centre_point.1"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
