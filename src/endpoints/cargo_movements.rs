use std::sync::Arc;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::api::CargoMovement;
use crate::config::SdkConfig;
use crate::endpoints::{default_window, optional_bool, MovementFilters};
use crate::error::SdkError;
use crate::operations::Search;
use crate::result::SearchResult;
use crate::schema::{columns, resource};
use crate::transport::{Params, Transport};
use crate::utils::to_iso_date;

pub type CargoMovementsResult = SearchResult<CargoMovement>;

/// Cargo movement search. `filter_activity` is one of `loading_state`,
/// `loading_start`, `loading_end`, `identified_for_loading_state`,
/// `unloading_state`, `unloading_start`, `unloading_end`, `storing_state`,
/// `storing_start`, `storing_end`, `transiting_state`, `any_activity`.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoMovementSearch {
    pub filter_activity: String,
    pub filter_time_min: NaiveDateTime,
    pub filter_time_max: NaiveDateTime,
    /// `b` for barrels, `t` for tonnes.
    pub cm_unit: String,
    pub filters: MovementFilters,
    pub disable_geographic_exclusion_rules: Option<bool>,
}

impl Default for CargoMovementSearch {
    fn default() -> Self {
        let (filter_time_min, filter_time_max) = default_window();
        Self {
            filter_activity: "any_activity".to_string(),
            filter_time_min,
            filter_time_max,
            cm_unit: "b".to_string(),
            filters: MovementFilters::default(),
            disable_geographic_exclusion_rules: None,
        }
    }
}

impl CargoMovementSearch {
    pub fn to_params(&self, page_size: usize) -> Params {
        let mut params = Params::new();
        params.insert("filter_activity".into(), Value::from(self.filter_activity.as_str()));
        params.insert("filter_time_min".into(), Value::from(to_iso_date(self.filter_time_min)));
        params.insert("filter_time_max".into(), Value::from(to_iso_date(self.filter_time_max)));
        params.insert("cm_unit".into(), Value::from(self.cm_unit.as_str()));
        params.insert("size".into(), Value::from(page_size));
        self.filters.extend_params(&mut params);
        params.insert(
            "disable_geographic_exclusion_rules".into(),
            optional_bool(self.disable_geographic_exclusion_rules),
        );
        params
    }
}

pub struct CargoMovements {
    search: Search,
    config: SdkConfig,
}

impl CargoMovements {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::CARGO_MOVEMENTS, transport),
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search(&self, query: &CargoMovementSearch) -> Result<CargoMovementsResult, SdkError> {
        let records = self.search.search(&query.to_params(self.config.page_size))?;
        Ok(SearchResult::new(records, &columns::CARGO_MOVEMENTS, "cargo movements")
            .with_config(self.config.clone()))
    }
}
