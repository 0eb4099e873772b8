//! Typed endpoints over a [`Transport`](crate::transport::Transport).
//!
//! Each endpoint builds the request body the API expects, runs the search
//! and wraps the page in a [`SearchResult`](crate::result::SearchResult)
//! carrying that endpoint's default columns.

pub mod cargo_movements;
pub mod cargo_timeseries;
pub mod corporations;
pub mod geographies;
pub mod products;
pub mod vessel_movements;
pub mod vessels;

pub use cargo_movements::{CargoMovementSearch, CargoMovements, CargoMovementsResult};
pub use cargo_timeseries::{CargoTimeSeries, CargoTimeSeriesSearch};
pub use corporations::{Corporations, CorporationsResult};
pub use geographies::{Geographies, GeographiesResult};
pub use products::{ProductSearch, Products, ProductsResult};
pub use vessel_movements::{VesselMovementSearch, VesselMovements, VesselMovementsResult};
pub use vessels::{VesselSearch, Vessels, VesselsResult};

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::transport::Params;
use crate::utils::convert_to_list;

/// Entity filters shared by the movement and time-series searches. Every
/// list is sent, empty lists included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementFilters {
    pub filter_charterers: Vec<String>,
    pub filter_destinations: Vec<String>,
    pub filter_origins: Vec<String>,
    pub filter_owners: Vec<String>,
    pub filter_products: Vec<String>,
    pub filter_vessels: Vec<String>,
    pub filter_storage_locations: Vec<String>,
    pub filter_ship_to_ship_locations: Vec<String>,
    pub filter_waypoints: Vec<String>,
}

impl MovementFilters {
    pub(crate) fn extend_params(&self, params: &mut Params) {
        let lists = [
            ("filter_charterers", &self.filter_charterers),
            ("filter_destinations", &self.filter_destinations),
            ("filter_origins", &self.filter_origins),
            ("filter_owners", &self.filter_owners),
            ("filter_products", &self.filter_products),
            ("filter_vessels", &self.filter_vessels),
            ("filter_storage_locations", &self.filter_storage_locations),
            ("filter_ship_to_ship_locations", &self.filter_ship_to_ship_locations),
            ("filter_waypoints", &self.filter_waypoints),
        ];
        for (key, values) in lists {
            params.insert(key.to_string(), convert_to_list(values));
        }
    }
}

/// Default search window: 2019-10-01 00:00 to 01:00 UTC.
pub(crate) fn default_window() -> (NaiveDateTime, NaiveDateTime) {
    let day = NaiveDate::from_ymd_opt(2019, 10, 1).unwrap_or_default();
    (
        day.and_hms_opt(0, 0, 0).unwrap_or_default(),
        day.and_hms_opt(1, 0, 0).unwrap_or_default(),
    )
}

pub(crate) fn optional_bool(value: Option<bool>) -> Value {
    value.map(Value::Bool).unwrap_or(Value::Null)
}
