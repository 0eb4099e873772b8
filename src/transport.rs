//! The paging transport the SDK talks through.
//!
//! HTTP, authentication, paging and retries live behind [`Transport`]; the
//! SDK only sees decoded JSON records. [`MemoryTransport`] serves canned
//! responses for offline use and tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};

use crate::error::SdkError;

/// Request parameters as sent in a search body.
pub type Params = Map<String, Value>;

pub trait Transport: Send + Sync {
    /// Every record of a search, all pages concatenated.
    fn search(&self, resource: &str, params: &Params) -> Result<Vec<Value>, SdkError>;

    /// One reference record by id.
    fn reference(&self, resource: &str, id: &str) -> Result<Value, SdkError>;
}

/// In-memory transport keyed by resource.
#[derive(Default)]
pub struct MemoryTransport {
    pages: HashMap<String, Vec<Value>>,
    references: HashMap<(String, String), Value>,
    requests: Mutex<Vec<(String, Params)>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, resource: &str, records: Vec<Value>) -> Self {
        self.pages.insert(resource.to_string(), records);
        self
    }

    pub fn with_reference(mut self, resource: &str, id: &str, record: Value) -> Self {
        self.references
            .insert((resource.to_string(), id.to_string()), record);
        self
    }

    /// Search requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<(String, Params)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Params of the most recent search against `resource`.
    pub fn last_params(&self, resource: &str) -> Option<Params> {
        self.requests()
            .into_iter()
            .rev()
            .find(|(r, _)| r == resource)
            .map(|(_, params)| params)
    }
}

impl Transport for MemoryTransport {
    fn search(&self, resource: &str, params: &Params) -> Result<Vec<Value>, SdkError> {
        // A panic elsewhere while holding the lock leaves the log intact.
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((resource.to_string(), params.clone()));
        self.pages
            .get(resource)
            .cloned()
            .ok_or_else(|| SdkError::Transport(format!("no canned response for {resource}")))
    }

    fn reference(&self, resource: &str, id: &str) -> Result<Value, SdkError> {
        self.references
            .get(&(resource.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| SdkError::Transport(format!("{resource}/{id} not found")))
    }
}
