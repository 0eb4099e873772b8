use serde::{Deserialize, Serialize};

use crate::deserialize::null_as_empty;

/// Corporation reference record (charterers, owners).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corporation {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub corporate_entity_type: Vec<String>,
    pub leaf: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
    pub ref_type: Option<String>,
}
