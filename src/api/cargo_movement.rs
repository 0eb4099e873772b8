use serde::{Deserialize, Serialize};

use crate::api::shared::{GeographyEntity, Position, ProductEntity};
use crate::api::vessel::VesselEntity;
use crate::deserialize::{null_as_empty, probability};

/// Something that happened to a cargo during its movement: a load, an
/// unload, a ship-to-ship transfer, a storage period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoEvent {
    pub event_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: Vec<GeographyEntity>,
    #[serde(default, deserialize_with = "probability")]
    pub probability: Option<f64>,
    pub pos: Option<Position>,
    pub vessel_id: Option<String>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
}

/// A journey of a quantity of product between places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoMovement {
    pub cargo_movement_id: String,
    pub quantity: i64,
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vessels: Vec<VesselEntity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product: Vec<ProductEntity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub events: Vec<CargoEvent>,
}

impl CargoMovement {
    /// Events of one type, in the order the API sent them.
    pub fn events_of_type<'a>(&'a self, event_type: &'a str) -> impl Iterator<Item = &'a CargoEvent> {
        self.events.iter().filter(move |e| e.event_type == event_type)
    }

    /// Product hierarchy level with the given layer, e.g. `"grade"`.
    pub fn product_layer(&self, layer: &str) -> Option<&ProductEntity> {
        self.product.iter().rev().find(|p| p.layer == layer)
    }
}
