use std::sync::Arc;

use crate::api::Product;
use crate::config::SdkConfig;
use crate::deserialize::deserialize;
use crate::error::SdkError;
use crate::operations::{Reference, Search};
use crate::result::SearchResult;
use crate::schema::{columns, resource};
use crate::transport::{Params, Transport};
use crate::utils::convert_to_list;

pub type ProductsResult = SearchResult<Product>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch {
    /// Name or partial name.
    pub term: Vec<String>,
    pub ids: Vec<String>,
    /// Only products below these parents.
    pub product_parent: Vec<String>,
}

impl ProductSearch {
    pub fn term(term: &str) -> Self {
        Self {
            term: vec![term.to_string()],
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("term".into(), convert_to_list(&self.term));
        params.insert("ids".into(), convert_to_list(&self.ids));
        params.insert("product_parent".into(), convert_to_list(&self.product_parent));
        params
    }
}

pub struct Products {
    search: Search,
    reference: Reference,
    config: SdkConfig,
}

impl Products {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            search: Search::new(resource::PRODUCTS_REFERENCE, transport.clone()),
            reference: Reference::new(resource::PRODUCTS_REFERENCE, transport),
            config: SdkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search(&self, query: &ProductSearch) -> Result<ProductsResult, SdkError> {
        let records = self.search.search(&query.to_params())?;
        Ok(SearchResult::new(records, &columns::PRODUCTS, "products").with_config(self.config.clone()))
    }

    pub fn reference(&self, id: &str) -> Result<Product, SdkError> {
        deserialize(&self.reference.reference(id)?)
    }
}
