use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::error::SdkError;
use crate::transport::{Params, Transport};

/// Search a resource with a parameter body.
#[derive(Clone)]
pub struct Search {
    resource: &'static str,
    transport: Arc<dyn Transport>,
}

impl Search {
    pub fn new(resource: &'static str, transport: Arc<dyn Transport>) -> Self {
        Self { resource, transport }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn search(&self, params: &Params) -> Result<Vec<Value>, SdkError> {
        info!(resource = self.resource, params = %serde_json::Value::Object(params.clone()), "Searching");
        self.transport.search(self.resource, params)
    }
}

/// Look up one reference record by id.
#[derive(Clone)]
pub struct Reference {
    resource: &'static str,
    transport: Arc<dyn Transport>,
}

impl Reference {
    pub fn new(resource: &'static str, transport: Arc<dyn Transport>) -> Self {
        Self { resource, transport }
    }

    pub fn reference(&self, id: &str) -> Result<Value, SdkError> {
        info!(resource = self.resource, id, "Looking up reference data");
        self.transport.reference(self.resource, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use serde_json::json;

    #[test]
    fn test_transport_errors_pass_through() {
        let transport = Arc::new(MemoryTransport::new());
        let search = Search::new("/reference/vessels", transport.clone());
        match search.search(&Params::new()) {
            Err(SdkError::Transport(msg)) => assert!(msg.contains("/reference/vessels")),
            other => panic!("unexpected: {other:?}"),
        }

        let reference = Reference::new("/reference/vessels", transport);
        assert!(matches!(reference.reference("x"), Err(SdkError::Transport(_))));
    }

    #[test]
    fn test_reference_lookup() {
        let transport = Arc::new(
            MemoryTransport::new().with_reference("/reference/geographies", "g1", json!({"id": "g1"})),
        );
        let reference = Reference::new("/reference/geographies", transport);
        assert_eq!(reference.reference("g1").unwrap(), json!({"id": "g1"}));
    }
}
