use std::sync::Arc;

use crate::api::Corporation;
use crate::config::SdkConfig;
use crate::deserialize::deserialize;
use crate::error::SdkError;
use crate::operations::{Reference, Search};
use crate::result::SearchResult;
use crate::schema::{columns, resource};
use crate::transport::{Params, Transport};
use crate::utils::convert_to_list;

pub type CorporationsResult = SearchResult<Corporation>;

/// Charterers, owners and other companies.
pub struct Corporations {
    search: Search,
    reference: Reference,
    config: SdkConfig,
}

impl Corporations {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::CORPORATIONS_REFERENCE, transport.clone()),
            reference: Reference::new(resource::CORPORATIONS_REFERENCE, transport),
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search<S: AsRef<str>>(&self, term: &[S]) -> Result<CorporationsResult, SdkError> {
        let mut params = Params::new();
        params.insert("term".into(), convert_to_list(term));
        let records = self.search.search(&params)?;
        Ok(SearchResult::new(records, &columns::CORPORATIONS, "corporations").with_config(self.config.clone()))
    }

    pub fn reference(&self, id: &str) -> Result<Corporation, SdkError> {
        deserialize(&self.reference.reference(id)?)
    }

    /// Ids of corporations whose name equals `name`, ignoring case. Several
    /// companies can share a name, hence a list.
    pub fn ids_named(&self, name: &str) -> Result<Vec<String>, SdkError> {
        let wanted = name.to_uppercase();
        Ok(self
            .search(&[name])?
            .to_list()?
            .into_iter()
            .filter(|c| c.name.as_deref().is_some_and(|n| n.to_uppercase() == wanted))
            .map(|c| c.id)
            .collect())
    }
}
