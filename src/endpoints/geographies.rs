use std::sync::Arc;

use crate::api::Geography;
use crate::config::SdkConfig;
use crate::deserialize::deserialize;
use crate::error::SdkError;
use crate::operations::{Reference, Search};
use crate::result::SearchResult;
use crate::schema::{columns, resource};
use crate::transport::{Params, Transport};
use crate::utils::convert_to_list;

pub type GeographiesResult = SearchResult<Geography>;

pub struct Geographies {
    search: Search,
    reference: Reference,
    config: SdkConfig,
}

impl Geographies {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::GEOGRAPHIES_REFERENCE, transport.clone()),
            reference: Reference::new(resource::GEOGRAPHIES_REFERENCE, transport),
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    /// Geographies whose name matches any of `term`.
    pub fn search<S: AsRef<str>>(&self, term: &[S]) -> Result<GeographiesResult, SdkError> {
        let mut params = Params::new();
        params.insert("term".into(), convert_to_list(term));
        let records = self.search.search(&params)?;
        Ok(SearchResult::new(records, &columns::GEOGRAPHIES, "geographies").with_config(self.config.clone()))
    }

    pub fn reference(&self, id: &str) -> Result<Geography, SdkError> {
        deserialize(&self.reference.reference(id)?)
    }
}
