use polars::prelude::DataFrame;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3_polars::PyDataFrame;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    CargoMovement, Corporation, Geography, Product, TimeSeriesItem, Vessel, VesselMovement,
};
use crate::error::SdkError;
use crate::flatten::flatten;
use crate::result::{Columns, SearchResult};
use crate::schema;

/// Flatten one JSON record, returned as a JSON object string.
#[pyfunction]
fn flatten_json(record: &str) -> PyResult<String> {
    let raw: Value = serde_json::from_str(record).map_err(SdkError::from)?;
    let flat = flatten(&raw)?;
    Ok(Value::Object(flat).to_string())
}

/// Build a DataFrame from a JSON array of raw records of the given kind.
#[pyfunction]
#[pyo3(signature = (records_json, kind, columns=None))]
fn to_df(records_json: &str, kind: &str, columns: Option<Vec<String>>) -> PyResult<PyDataFrame> {
    let records: Vec<Value> = serde_json::from_str(records_json).map_err(SdkError::from)?;
    let columns = match columns {
        None => Columns::Default,
        Some(cols) if cols.len() == 1 && cols[0] == "all" => Columns::All,
        Some(cols) => Columns::Only(cols),
    };

    let df = match kind {
        "cargo_movements" => frame::<CargoMovement>(records, &schema::columns::CARGO_MOVEMENTS, columns),
        "vessel_movements" => frame::<VesselMovement>(records, &schema::columns::VESSEL_MOVEMENTS, columns),
        "vessels" => frame::<Vessel>(records, &schema::columns::VESSELS, columns),
        "products" => frame::<Product>(records, &schema::columns::PRODUCTS, columns),
        "geographies" => frame::<Geography>(records, &schema::columns::GEOGRAPHIES, columns),
        "corporations" => frame::<Corporation>(records, &schema::columns::CORPORATIONS, columns),
        "timeseries" => {
            SearchResult::<TimeSeriesItem>::new(records, &schema::timeseries::ALL, "timeseries").to_timeseries_df()
        }
        other => return Err(PyValueError::new_err(format!("unknown record kind: {other}"))),
    }?;
    Ok(PyDataFrame(df))
}

fn frame<T: DeserializeOwned + Send>(
    records: Vec<Value>,
    default_columns: &'static [&'static str],
    columns: Columns,
) -> Result<DataFrame, SdkError> {
    SearchResult::<T>::new(records, default_columns, "records").to_df(columns)
}

/// Export schema constants as Python submodules
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Event types
    let event_type = PyModule::new(m.py(), "event_type")?;
    event_type.add("PORT_LOAD", schema::event_type::PORT_LOAD)?;
    event_type.add("PORT_UNLOAD", schema::event_type::PORT_UNLOAD)?;
    event_type.add("STS", schema::event_type::STS)?;
    event_type.add("STORAGE", schema::event_type::STORAGE)?;
    event_type.add("FSO", schema::event_type::FSO)?;
    m.add_submodule(&event_type)?;

    // Layers
    let layer = PyModule::new(m.py(), "layer")?;
    layer.add("COMMERCIAL_OWNER", schema::layer::COMMERCIAL_OWNER)?;
    layer.add("CHARTERER", schema::layer::CHARTERER)?;
    layer.add("TIME_CHARTERER", schema::layer::TIME_CHARTERER)?;
    layer.add("GROUP", schema::layer::GROUP)?;
    layer.add("GROUP_PRODUCT", schema::layer::GROUP_PRODUCT)?;
    layer.add("CATEGORY", schema::layer::CATEGORY)?;
    layer.add("GRADE", schema::layer::GRADE)?;
    layer.add("COUNTRY", schema::layer::COUNTRY)?;
    layer.add("REGION", schema::layer::REGION)?;
    layer.add("PORT", schema::layer::PORT)?;
    layer.add("STS_ZONE", schema::layer::STS_ZONE)?;
    m.add_submodule(&layer)?;

    // Vessel
    let vessel = PyModule::new(m.py(), "vessel")?;
    vessel.add("OPTIONAL_FIELDS", schema::vessel::OPTIONAL_FIELDS.to_vec())?;
    vessel.add(
        "AVAILABLE_VESSEL_CLASSES",
        schema::vessel::AVAILABLE_VESSEL_CLASSES.to_vec(),
    )?;
    m.add_submodule(&vessel)?;

    // TimeSeries
    let timeseries = PyModule::new(m.py(), "timeseries")?;
    timeseries.add("KEY", schema::timeseries::KEY)?;
    timeseries.add("VALUE", schema::timeseries::VALUE)?;
    timeseries.add("COUNT", schema::timeseries::COUNT)?;
    m.add_submodule(&timeseries)?;

    Ok(())
}

#[pymodule]
#[pyo3(name = "vortexasdk")]
fn vortexasdk_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(flatten_json, m)?)?;
    m.add_function(wrap_pyfunction!(to_df, m)?)?;
    add_schema_exports(m)?;
    Ok(())
}
