//! Client-side data layer for the Vortexa maritime trade API.
//!
//! Raw JSON records come in through a [`Transport`], are deserialized into
//! typed entities ([`api`]), flattened into dotted-key records ([`flatten`])
//! and handed back as a [`SearchResult`] offering list and DataFrame views.

pub mod api;
pub mod config;
pub mod conversions;
pub mod deserialize;
pub mod endpoints;
pub mod error;
pub mod flatten;
pub mod logging;
pub mod operations;
pub mod result;
pub mod schema;
pub mod transport;
pub mod utils;

#[cfg(feature = "python")]
mod python;

pub use config::SdkConfig;
pub use deserialize::{deserialize, deserialize_str};
pub use error::SdkError;
pub use flatten::{flatten, flatten_entity, FlatRecord};
pub use result::{Columns, SearchResult, Table, TimeSeriesResult};
pub use transport::{MemoryTransport, Params, Transport};
