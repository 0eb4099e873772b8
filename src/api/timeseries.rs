use serde::{Deserialize, Serialize};

/// One bucket of an aggregate time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesItem {
    /// Bucket start, e.g. `2018-01-01T00:00:00.000Z`.
    pub key: String,
    pub value: f64,
    /// Fraction of the bucket covered by data.
    pub count: f64,
}
