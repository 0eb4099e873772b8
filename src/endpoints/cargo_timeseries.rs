use std::sync::Arc;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::config::SdkConfig;
use crate::endpoints::{default_window, optional_bool, MovementFilters};
use crate::error::SdkError;
use crate::operations::Search;
use crate::result::{SearchResult, TimeSeriesResult};
use crate::schema::{resource, timeseries};
use crate::transport::{Params, Transport};
use crate::utils::to_iso_date;

/// Aggregate flows bucketed over time.
///
/// `timeseries_frequency`: `day`, `week`, `doe_week`, `month`, `quarter`, `year`.
/// `timeseries_unit`: `b`, `bpd`, `t`, `tpd`, `c`, `cpd` (barrels, barrels per
/// day, tonnes, tonnes per day, cargo count, cargo count per day).
#[derive(Debug, Clone, PartialEq)]
pub struct CargoTimeSeriesSearch {
    pub filter_activity: String,
    pub timeseries_frequency: String,
    pub timeseries_unit: String,
    pub filter_time_min: NaiveDateTime,
    pub filter_time_max: NaiveDateTime,
    pub filters: MovementFilters,
    pub disable_geographic_exclusion_rules: Option<bool>,
}

impl CargoTimeSeriesSearch {
    pub fn new(filter_activity: &str) -> Self {
        let (filter_time_min, filter_time_max) = default_window();
        Self {
            filter_activity: filter_activity.to_string(),
            timeseries_frequency: "day".to_string(),
            timeseries_unit: "b".to_string(),
            filter_time_min,
            filter_time_max,
            filters: MovementFilters::default(),
            disable_geographic_exclusion_rules: None,
        }
    }

    pub fn to_params(&self, page_size: usize) -> Params {
        let mut params = Params::new();
        params.insert("timeseries_frequency".into(), Value::from(self.timeseries_frequency.as_str()));
        params.insert("timeseries_unit".into(), Value::from(self.timeseries_unit.as_str()));
        params.insert("timeseries_activity".into(), Value::from(self.filter_activity.as_str()));
        params.insert("filter_activity".into(), Value::from(self.filter_activity.as_str()));
        params.insert("filter_time_min".into(), Value::from(to_iso_date(self.filter_time_min)));
        params.insert("filter_time_max".into(), Value::from(to_iso_date(self.filter_time_max)));
        params.insert("size".into(), Value::from(page_size));
        self.filters.extend_params(&mut params);
        params.insert(
            "disable_geographic_exclusion_rules".into(),
            optional_bool(self.disable_geographic_exclusion_rules),
        );
        params
    }
}

pub struct CargoTimeSeries {
    search: Search,
    config: SdkConfig,
}

impl CargoTimeSeries {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::CARGO_TIMESERIES, transport),
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search(&self, query: &CargoTimeSeriesSearch) -> Result<TimeSeriesResult, SdkError> {
        let records = self.search.search(&query.to_params(self.config.page_size))?;
        Ok(SearchResult::new(records, &timeseries::ALL, "time series").with_config(self.config.clone()))
    }
}
