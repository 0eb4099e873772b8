//! Flattening of nested API records into single-level rows.
//!
//! Keys encode the nesting path with dots. Lists are resolved per field:
//!
//! - event lists are keyed by `event_type`, then by position among events of
//!   that type: `events.cargo_port_load_event.0.pos.1`
//! - lists of layered sub-entities are keyed by their `layer`:
//!   `vessels.0.corporate_entities.commercial_owner.label`
//! - lists of scalars or lists, and the object lists named in
//!   [`positional::FIELDS`] (vessels, cargoes, hierarchy), are keyed by index
//! - any other list of untagged objects is an error
//!
//! Two siblings sharing a layer collide; the later one wins and a warning is
//! logged. Vessel slots always carry [`vessel::OPTIONAL_FIELDS`] so rows from
//! different vessels share a column set.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::SdkError;
use crate::schema::{keys, positional, vessel};

/// One flattened record. Key order is first-encountered order of the
/// depth-first walk.
pub type FlatRecord = Map<String, Value>;

/// How the elements of one list field are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Events,
    Layered,
    Positional,
}

/// Flatten a raw (JSON-decoded) record.
pub fn flatten(raw: &Value) -> Result<FlatRecord, SdkError> {
    let obj = raw.as_object().ok_or_else(|| {
        SdkError::flattening("", format!("expected an object at the root, found {}", kind_of(raw)))
    })?;

    let mut out = FlatRecord::new();
    flatten_object(obj, "", &mut out)?;
    Ok(out)
}

/// Flatten a typed entity through its serialized form.
pub fn flatten_entity<T: Serialize>(entity: &T) -> Result<FlatRecord, SdkError> {
    flatten(&serde_json::to_value(entity)?)
}

fn flatten_object(obj: &Map<String, Value>, path: &str, out: &mut FlatRecord) -> Result<(), SdkError> {
    for (key, value) in obj {
        let child = join_path(path, key);
        flatten_value(value, key, &child, out)?;
    }
    Ok(())
}

fn flatten_value(value: &Value, key: &str, path: &str, out: &mut FlatRecord) -> Result<(), SdkError> {
    match value {
        Value::Object(obj) => {
            flatten_object(obj, path, out)?;
            if key == keys::VESSEL {
                fill_vessel_slot(path, out);
            }
        }
        Value::Array(items) => flatten_list(items, key, path, out)?,
        scalar => {
            out.insert(path.to_string(), scalar.clone());
        }
    }
    Ok(())
}

fn flatten_list(items: &[Value], key: &str, path: &str, out: &mut FlatRecord) -> Result<(), SdkError> {
    if items.is_empty() {
        return Ok(());
    }

    match classify(items, key, path)? {
        ListKind::Events => {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            for item in items {
                let (obj, event_type) = tagged(item, keys::EVENT_TYPE, path)?;
                let n = seen.entry(event_type).or_insert(0);
                let child = join_path(&join_path(path, event_type), &n.to_string());
                *n += 1;
                flatten_object(obj, &child, out)?;
            }
        }
        ListKind::Layered => {
            let mut seen: HashSet<&str> = HashSet::new();
            for item in items {
                let (obj, layer) = tagged(item, keys::LAYER, path)?;
                if !seen.insert(layer) {
                    warn!(path, layer, "Sibling entities share a layer, keeping the later one");
                }
                flatten_object(obj, &join_path(path, layer), out)?;
            }
        }
        ListKind::Positional => {
            for (i, item) in items.iter().enumerate() {
                let index = i.to_string();
                let child = join_path(path, &index);
                flatten_value(item, &index, &child, out)?;
                if key == keys::VESSELS && item.is_object() {
                    fill_vessel_slot(&child, out);
                }
            }
        }
    }
    Ok(())
}

fn string_tag<'a>(item: &'a Value, tag: &str) -> Option<&'a str> {
    item.as_object()?.get(tag)?.as_str()
}

fn tagged<'a>(item: &'a Value, tag: &str, path: &str) -> Result<(&'a Map<String, Value>, &'a str), SdkError> {
    match (item.as_object(), string_tag(item, tag)) {
        (Some(obj), Some(value)) => Ok((obj, value)),
        _ => Err(SdkError::flattening(path, format!("list element has no '{tag}'"))),
    }
}

fn classify(items: &[Value], key: &str, path: &str) -> Result<ListKind, SdkError> {
    let events = items
        .iter()
        .filter(|item| string_tag(item, keys::EVENT_TYPE).is_some())
        .count();
    if events == items.len() {
        return Ok(ListKind::Events);
    }

    let layered = items
        .iter()
        .filter(|item| string_tag(item, keys::LAYER).is_some())
        .count();
    if layered == items.len() {
        return Ok(ListKind::Layered);
    }

    if events == 0 && layered == 0 {
        if positional::FIELDS.contains(&key) || !items.iter().any(Value::is_object) {
            return Ok(ListKind::Positional);
        }
        return Err(SdkError::flattening(
            path,
            "list elements carry no 'layer' or 'event_type' tag and the field is not positional",
        ));
    }

    Err(SdkError::flattening(
        path,
        format!(
            "cannot key list: {} of {} elements carry an 'event_type' or 'layer' tag",
            events.max(layered),
            items.len()
        ),
    ))
}

fn fill_vessel_slot(path: &str, out: &mut FlatRecord) {
    for field in vessel::OPTIONAL_FIELDS {
        out.entry(join_path(path, field)).or_insert(Value::Null);
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
