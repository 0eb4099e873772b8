//! Typed entities returned by the Vortexa API.
//!
//! - `CargoMovement` / `CargoEvent` - cargo journeys and what happened to them
//! - `VesselMovement` / `VesselEvent` / `Cargo` - vessel journeys
//! - `VesselEntity`, `GeographyEntity`, `ProductEntity`, `CorporateEntity` -
//!   sub-entities nested inside movements, classified by `layer`
//! - `Vessel`, `Product`, `Geography`, `Corporation` - reference records
//! - `TimeSeriesItem` - aggregate buckets
//!
//! Entities are built once through [`crate::deserialize::deserialize`] and
//! never mutated. They round-trip through the API's JSON shape with serde.

pub mod cargo_movement;
pub mod corporation;
pub mod geography;
pub mod product;
pub mod shared;
pub mod timeseries;
pub mod vessel;
pub mod vessel_movement;

pub use cargo_movement::{CargoEvent, CargoMovement};
pub use corporation::Corporation;
pub use geography::{BoundingBox, Coordinates, Geography};
pub use product::{Product, ProductParent};
pub use shared::{
    CorporateEntity, EntityWithProbability, GeographyEntity, Id, IdLayer, IdNameLayer, Position,
    ProductEntity,
};
pub use timeseries::TimeSeriesItem;
pub use vessel::{Vessel, VesselEntity};
pub use vessel_movement::{Cargo, VesselEvent, VesselMovement};
