use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::shared::IdLayer;
use crate::deserialize::null_as_empty;

/// Parent link of a product reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductParent {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
}

/// Product reference record from `/reference/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
    pub leaf: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parent: Vec<ProductParent>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hierarchy: Vec<IdLayer>,
    pub ref_type: Option<String>,
    pub meta: Option<Value>,
}
