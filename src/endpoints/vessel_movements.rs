use std::sync::Arc;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::api::VesselMovement;
use crate::config::SdkConfig;
use crate::endpoints::{default_window, MovementFilters};
use crate::error::SdkError;
use crate::operations::Search;
use crate::result::SearchResult;
use crate::schema::{columns, resource};
use crate::transport::{Params, Transport};
use crate::utils::{convert_to_list, to_iso_date};

pub type VesselMovementsResult = SearchResult<VesselMovement>;

#[derive(Debug, Clone, PartialEq)]
pub struct VesselMovementSearch {
    pub filter_time_min: NaiveDateTime,
    pub filter_time_max: NaiveDateTime,
    pub filter_vessel_classes: Vec<String>,
    pub filters: MovementFilters,
}

impl Default for VesselMovementSearch {
    fn default() -> Self {
        let (filter_time_min, filter_time_max) = default_window();
        Self {
            filter_time_min,
            filter_time_max,
            filter_vessel_classes: Vec::new(),
            filters: MovementFilters::default(),
        }
    }
}

impl VesselMovementSearch {
    pub fn to_params(&self, page_size: usize) -> Params {
        let mut params = Params::new();
        params.insert("filter_time_min".into(), Value::from(to_iso_date(self.filter_time_min)));
        params.insert("filter_time_max".into(), Value::from(to_iso_date(self.filter_time_max)));
        params.insert(
            "filter_vessel_classes".into(),
            convert_to_list(&self.filter_vessel_classes),
        );
        params.insert("size".into(), Value::from(page_size));
        self.filters.extend_params(&mut params);
        params
    }
}

pub struct VesselMovements {
    search: Search,
    config: SdkConfig,
}

impl VesselMovements {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::VESSEL_MOVEMENTS, transport),
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search(&self, query: &VesselMovementSearch) -> Result<VesselMovementsResult, SdkError> {
        let records = self.search.search(&query.to_params(self.config.page_size))?;
        Ok(SearchResult::new(records, &columns::VESSEL_MOVEMENTS, "vessel movements")
            .with_config(self.config.clone()))
    }
}
