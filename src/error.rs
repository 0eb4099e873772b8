#[cfg(feature = "python")]
use pyo3::exceptions::{PyRuntimeError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Deserialization failed at '{path}': {message}")]
    Deserialization { path: String, message: String },

    #[error("Flattening failed at '{path}': {message}")]
    Flattening { path: String, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    pub(crate) fn deserialization(path: &str, message: impl Into<String>) -> Self {
        SdkError::Deserialization {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn flattening(path: &str, message: impl Into<String>) -> Self {
        SdkError::Flattening {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<SdkError> for PyErr {
    fn from(err: SdkError) -> PyErr {
        match err {
            SdkError::Deserialization { .. }
            | SdkError::Flattening { .. }
            | SdkError::ColumnNotFound(_) => PyValueError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
