use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::shared::CorporateEntity;
use crate::deserialize::null_as_empty;

/// A vessel as it appears inside a cargo or vessel movement, bounded by the
/// voyage segment it took part in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselEntity {
    pub id: String,
    pub mmsi: Option<i64>,
    pub imo: Option<i64>,
    pub name: Option<String>,
    pub dwt: Option<i64>,
    pub cubic_capacity: Option<i64>,
    pub vessel_class: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub corporate_entities: Vec<CorporateEntity>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
    pub fixture_fulfilled: Option<bool>,
    pub fixture_id: Option<String>,
    pub voyage_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Value>,
    pub status: Option<String>,
    pub year: Option<i64>,
    pub flag: Option<String>,
    pub scrubber: Option<String>,
    pub ice_class: Option<String>,
    pub propulsion: Option<String>,
}

impl VesselEntity {
    /// Relationship with the given layer, e.g. `"commercial_owner"`.
    pub fn corporate_entity(&self, layer: &str) -> Option<&CorporateEntity> {
        self.corporate_entities.iter().rev().find(|c| c.layer == layer)
    }
}

/// Vessel reference record from `/reference/vessels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub name: Option<String>,
    pub imo: Option<i64>,
    pub mmsi: Option<i64>,
    pub dwt: Option<i64>,
    pub cubic_capacity: Option<i64>,
    pub vessel_class: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub related_names: Vec<String>,
    pub call_sign: Option<String>,
    pub flag: Option<String>,
    pub year: Option<i64>,
    pub ref_type: Option<String>,
    pub leaf: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
}
