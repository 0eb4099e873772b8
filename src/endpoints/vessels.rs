use std::sync::Arc;

use crate::api::Vessel;
use crate::config::SdkConfig;
use crate::conversions::convert_to_product_ids;
use crate::deserialize::deserialize;
use crate::error::SdkError;
use crate::operations::{Reference, Search};
use crate::result::SearchResult;
use crate::schema::{columns, resource};
use crate::transport::{Params, Transport};
use crate::utils::convert_to_list;

pub type VesselsResult = SearchResult<Vessel>;

/// Vessel search. Criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VesselSearch {
    /// Names or partial names; also matched against related names.
    pub term: Vec<String>,
    pub ids: Vec<String>,
    /// See [`crate::schema::vessel::AVAILABLE_VESSEL_CLASSES`].
    pub vessel_classes: Vec<String>,
    /// Product names or ids the vessels are currently carrying.
    pub vessel_product_types: Vec<String>,
}

pub struct Vessels {
    search: Search,
    reference: Reference,
    transport: Arc<dyn Transport>,
    config: SdkConfig,
}

impl Vessels {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::VESSELS_REFERENCE, transport.clone()),
            reference: Reference::new(resource::VESSELS_REFERENCE, transport.clone()),
            transport,
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search(&self, query: &VesselSearch) -> Result<VesselsResult, SdkError> {
        let product_ids = if query.vessel_product_types.is_empty() {
            Vec::new()
        } else {
            convert_to_product_ids(&self.transport, &query.vessel_product_types)?
        };

        let mut params = Params::new();
        params.insert("term".into(), convert_to_list(&query.term));
        params.insert("ids".into(), convert_to_list(&query.ids));
        params.insert("vessel_classes".into(), convert_to_list(&query.vessel_classes));
        params.insert("vessel_product_types".into(), convert_to_list(&product_ids));

        let records = self.search.search(&params)?;
        Ok(SearchResult::new(records, &columns::VESSELS, "vessels").with_config(self.config.clone()))
    }

    pub fn reference(&self, id: &str) -> Result<Vessel, SdkError> {
        deserialize(&self.reference.reference(id)?)
    }
}
