use serde::{Deserialize, Serialize};

use crate::api::shared::{GeographyEntity, Position, ProductEntity};
use crate::api::vessel::VesselEntity;
use crate::deserialize::null_as_empty;

/// One end of a vessel movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: Vec<GeographyEntity>,
    pub pos: Option<Position>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
}

/// Cargo carried during a vessel movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub cargo_movement_id: Option<String>,
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product: Vec<ProductEntity>,
}

/// A vessel's journey from an origin to a destination, laden or in ballast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselMovement {
    pub vessel_movement_id: String,
    pub vessel: VesselEntity,
    pub origin: Option<VesselEvent>,
    pub destination: Option<VesselEvent>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cargoes: Vec<Cargo>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
}
