use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

pub const WORKERS_ENV: &str = "VORTEXA_SDK_WORKERS";
pub const PARALLEL_THRESHOLD_ENV: &str = "VORTEXA_SDK_PARALLEL_THRESHOLD";
pub const PAGE_SIZE_ENV: &str = "VORTEXA_SDK_PAGE_SIZE";

/// Tuning knobs for result conversion and paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Worker threads for typed-list conversion. `None` uses every available CPU.
    pub workers: Option<usize>,
    /// Pages smaller than this are converted on the calling thread.
    pub parallel_threshold: usize,
    /// Records requested per search page.
    pub page_size: usize,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            workers: None,
            parallel_threshold: 100,
            page_size: 500,
        }
    }
}

impl SdkConfig {
    /// Defaults overridden by `VORTEXA_SDK_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(WORKERS_ENV) {
            config.workers = Some(parse_positive(WORKERS_ENV, &raw)?);
        }
        if let Some(raw) = lookup(PARALLEL_THRESHOLD_ENV) {
            config.parallel_threshold = parse_var(PARALLEL_THRESHOLD_ENV, &raw)?;
        }
        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            config.page_size = parse_positive(PAGE_SIZE_ENV, &raw)?;
        }
        Ok(config)
    }

    /// Thread count for the conversion pool.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, SdkError> {
    raw.trim()
        .parse()
        .map_err(|_| SdkError::Config(format!("{name}: cannot parse '{raw}'")))
}

fn parse_positive(name: &str, raw: &str) -> Result<usize, SdkError> {
    match parse_var::<usize>(name, raw)? {
        0 => Err(SdkError::Config(format!("{name} must be at least 1"))),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = SdkConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SdkConfig::default());
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_config_overrides() {
        let config = SdkConfig::from_lookup(lookup(&[
            (WORKERS_ENV, "4"),
            (PARALLEL_THRESHOLD_ENV, " 10 "),
            (PAGE_SIZE_ENV, "50"),
        ]))
        .unwrap();
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.worker_count(), 4);
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_config_rejects_garbage() {
        assert!(matches!(
            SdkConfig::from_lookup(lookup(&[(WORKERS_ENV, "many")])),
            Err(SdkError::Config(_))
        ));
        assert!(matches!(
            SdkConfig::from_lookup(lookup(&[(PAGE_SIZE_ENV, "0")])),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SdkConfig = serde_json::from_str(r#"{"workers": 2}"#).unwrap();
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.page_size, 500);
    }
}
