//! Result pages and their two views: typed entities and flat tables.

use std::collections::HashSet;
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

use polars::datatypes::TimeUnit;
use polars::prelude::StrptimeOptions;
use polars::prelude::*;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::TimeSeriesItem;
use crate::config::SdkConfig;
use crate::deserialize::deserialize;
use crate::error::SdkError;
use crate::flatten::{flatten, FlatRecord};
use crate::schema::timeseries;

// ── Column selection ────────────────────────────────────────────────────────

/// Which columns a table keeps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Columns {
    /// The endpoint's default subset.
    #[default]
    Default,
    /// Every key seen in any row, in first-seen order.
    All,
    /// Exactly these columns, in this order.
    Only(Vec<String>),
}

impl Columns {
    pub fn only<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Columns::Only(columns.into_iter().map(Into::into).collect())
    }
}

// ── Table ───────────────────────────────────────────────────────────────────

/// Flattened records projected onto an ordered column set. Cells missing
/// from a record are null.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_records(records: &[FlatRecord], columns: Vec<String>) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Union of all keys across `records`, in first-seen order.
    pub fn all_columns(records: &[FlatRecord]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut columns = Vec::new();
        for key in records.iter().flat_map(|r| r.keys()) {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
        columns
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>, SdkError> {
        let idx = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SdkError::ColumnNotFound(name.to_string()))?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Build a polars DataFrame, one Series per column.
    ///
    /// Mixed integer/float columns take their supertype; all-null columns
    /// become nullable strings.
    pub fn to_data_frame(&self) -> Result<DataFrame, SdkError> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len());

        for (i, name) in self.columns.iter().enumerate() {
            let values: Vec<AnyValue> = self.rows.iter().map(|row| any_value(&row[i])).collect();
            let mut series = Series::from_any_values(name.as_str().into(), &values, false)?;
            if series.dtype() == &DataType::Null {
                series = series.cast(&DataType::String)?;
            }
            columns.push(series.into());
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Export as CSV with a header row.
    pub fn write_csv(&self, path: &Path) -> Result<(), SdkError> {
        let mut df = self.to_data_frame()?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
        info!(path = %path.display(), rows = df.height(), "Wrote table to CSV");
        Ok(())
    }
}

fn any_value(value: &Value) -> AnyValue<'static> {
    match value {
        Value::Null => AnyValue::Null,
        Value::Bool(b) => AnyValue::Boolean(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => AnyValue::Int64(i),
            (None, Some(f)) => AnyValue::Float64(f),
            (None, None) => AnyValue::Null,
        },
        Value::String(s) => AnyValue::StringOwned(s.as_str().into()),
        nested => AnyValue::StringOwned(nested.to_string().as_str().into()),
    }
}

// ── Search result ───────────────────────────────────────────────────────────

/// One page (or several concatenated pages) of raw records from a search.
///
/// The raw page is never modified; both views can be taken repeatedly.
pub struct SearchResult<T> {
    records: Vec<Value>,
    default_columns: &'static [&'static str],
    label: &'static str,
    config: SdkConfig,
    _entity: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned + Send> SearchResult<T> {
    pub fn new(records: Vec<Value>, default_columns: &'static [&'static str], label: &'static str) -> Self {
        Self {
            records,
            default_columns,
            label,
            config: SdkConfig::default(),
            _entity: PhantomData,
        }
    }

    pub fn with_config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Deserialize every record, in page order.
    ///
    /// Pages of at least `parallel_threshold` records are converted on a
    /// pool of `worker_count()` threads that lives only for this call. The
    /// first malformed record fails the whole page.
    pub fn to_list(&self) -> Result<Vec<T>, SdkError> {
        if self.records.len() < self.config.parallel_threshold {
            return self
                .records
                .iter()
                .enumerate()
                .map(|(i, raw)| convert(i, raw))
                .collect();
        }

        let workers = self.config.worker_count();
        debug!(
            workers,
            records = self.records.len(),
            "Converting {} records on a worker pool",
            self.label
        );
        let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
        pool.install(|| {
            self.records
                .par_iter()
                .enumerate()
                .map(|(i, raw)| convert(i, raw))
                .collect()
        })
    }

    pub fn to_flat_records(&self) -> Result<Vec<FlatRecord>, SdkError> {
        self.records.iter().map(flatten).collect()
    }

    pub fn to_table(&self, columns: Columns) -> Result<Table, SdkError> {
        let records = self.to_flat_records()?;
        let names = match columns {
            Columns::Default => self.default_columns.iter().map(|c| c.to_string()).collect(),
            Columns::All => Table::all_columns(&records),
            Columns::Only(names) => names,
        };
        let table = Table::from_records(&records, names);
        info!(
            rows = table.height(),
            columns = table.columns.len(),
            "Built {} table",
            self.label
        );
        Ok(table)
    }

    pub fn to_df(&self, columns: Columns) -> Result<DataFrame, SdkError> {
        self.to_table(columns)?.to_data_frame()
    }
}

fn convert<T: DeserializeOwned>(index: usize, raw: &Value) -> Result<T, SdkError> {
    deserialize(raw).map_err(|err| match err {
        SdkError::Deserialization { path, message } => SdkError::Deserialization {
            path,
            message: format!("record {index}: {message}"),
        },
        other => other,
    })
}

// ── Time series ─────────────────────────────────────────────────────────────

pub type TimeSeriesResult = SearchResult<TimeSeriesItem>;

impl SearchResult<TimeSeriesItem> {
    /// `key`, `value`, `count` with `key` parsed to a millisecond Datetime.
    pub fn to_timeseries_df(&self) -> Result<DataFrame, SdkError> {
        let df = self.to_df(Columns::Only(
            timeseries::ALL.iter().map(|c| c.to_string()).collect(),
        ))?;
        parse_datetime_column(df, timeseries::KEY, timeseries::KEY_FORMAT)
    }
}

/// Parse a string column to Datetime. Missing columns are left alone.
fn parse_datetime_column(df: DataFrame, column: &str, format: &str) -> Result<DataFrame, SdkError> {
    if df.column(column).is_err() {
        return Ok(df);
    }
    let df = df
        .lazy()
        .with_columns([col(column).str().to_datetime(
            Some(TimeUnit::Milliseconds),
            None,
            StrptimeOptions {
                format: Some(format.into()),
                strict: true,
                ..Default::default()
            },
            lit("raise"),
        )])
        .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Vessel;
    use crate::schema::columns;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn vessels(n: usize) -> SearchResult<Vessel> {
        let records = (0..n)
            .map(|i| json!({"id": format!("v{i}"), "name": format!("VESSEL {i}"), "imo": 9000000 + i as i64}))
            .collect();
        SearchResult::new(records, &columns::VESSELS, "vessels")
    }

    #[test]
    fn test_to_list_sequential() {
        let list = vessels(3).to_list().unwrap();
        let ids: Vec<&str> = list.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v0", "v1", "v2"]);
    }

    #[test]
    fn test_to_list_parallel_keeps_order() {
        let result = vessels(2_000).with_config(SdkConfig {
            workers: Some(4),
            parallel_threshold: 10,
            ..SdkConfig::default()
        });
        let list = result.to_list().unwrap();
        assert_eq!(list.len(), 2_000);
        for (i, vessel) in list.iter().enumerate() {
            assert_eq!(vessel.id, format!("v{i}"));
        }
    }

    #[test]
    fn test_to_list_fails_whole_page() {
        let mut records: Vec<Value> = (0..50).map(|i| json!({"id": format!("v{i}")})).collect();
        records[37] = json!({"id": "v37", "imo": "not a number"});
        let result: SearchResult<Vessel> = SearchResult::new(records, &columns::VESSELS, "vessels")
            .with_config(SdkConfig {
                workers: Some(3),
                parallel_threshold: 1,
                ..SdkConfig::default()
            });

        match result.to_list() {
            Err(SdkError::Deserialization { path, message }) => {
                assert_eq!(path, "imo");
                assert!(message.starts_with("record 37:"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_default_columns() {
        let table = vessels(2).to_table(Columns::Default).unwrap();
        assert_eq!(table.columns, vec!["id", "name", "imo", "vessel_class"]);
        assert_eq!(table.rows[1], vec![json!("v1"), json!("VESSEL 1"), json!(9000001), Value::Null]);
    }

    #[test]
    fn test_explicit_columns() {
        let table = vessels(3).to_table(Columns::only(["name", "id"])).unwrap();
        assert_eq!(table.columns, vec!["name", "id"]);
        assert!(table.rows.iter().all(|row| row.len() == 2));
        assert_eq!(table.column("id").unwrap(), vec![&json!("v0"), &json!("v1"), &json!("v2")]);
        assert!(matches!(table.column("imo"), Err(SdkError::ColumnNotFound(_))));
    }

    #[test]
    fn test_all_columns_union() {
        let result: SearchResult<Vessel> = SearchResult::new(
            vec![
                json!({"id": "a", "name": "A"}),
                json!({"id": "b", "flag": "NL", "related_names": ["B", "BEE"]}),
            ],
            &columns::VESSELS,
            "vessels",
        );
        let table = result.to_table(Columns::All).unwrap();
        assert_eq!(
            table.columns,
            vec!["id", "name", "flag", "related_names.0", "related_names.1"]
        );
        assert_eq!(table.rows[0][2], Value::Null);
        assert_eq!(table.rows[1][1], Value::Null);
    }

    #[test]
    fn test_views_do_not_consume_page() {
        let result = vessels(5);
        let first = result.to_table(Columns::All).unwrap();
        let _ = result.to_list().unwrap();
        assert_eq!(first, result.to_table(Columns::All).unwrap());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_to_df_shape() {
        let df = vessels(4).to_df(Columns::Default).unwrap();
        assert_eq!(df.height(), 4);
        assert_eq!(
            df.get_column_names_str(),
            vec!["id", "name", "imo", "vessel_class"]
        );
        assert_eq!(df.column("imo").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("vessel_class").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_to_df_mixed_numbers() {
        let table = Table {
            columns: vec!["probability".into()],
            rows: vec![vec![json!(1)], vec![json!(0.47)]],
        };
        let df = table.to_data_frame().unwrap();
        assert_eq!(df.column("probability").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_timeseries_df() {
        let result: TimeSeriesResult = SearchResult::new(
            vec![
                json!({"key": "2018-01-01T00:00:00.000Z", "value": 458665, "count": 0.354839}),
                json!({"key": "2018-02-01T00:00:00.000Z", "value": 45024.5, "count": 0.75}),
            ],
            &timeseries::ALL,
            "time series",
        );
        let items = result.to_list().unwrap();
        assert_eq!(items[0].value, 458665.0);

        let df = result.to_timeseries_df().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.get_column_names_str(), vec!["key", "value", "count"]);
        assert!(matches!(df.column("key").unwrap().dtype(), DataType::Datetime(_, _)));
    }
}
