//! Turning names, classes, IMOs and MMSIs into API ids.

use std::sync::Arc;

use crate::endpoints::{ProductSearch, Products, VesselSearch, Vessels};
use crate::error::SdkError;
use crate::schema::vessel::AVAILABLE_VESSEL_CLASSES;
use crate::transport::Transport;

/// API ids are 64 lowercase hex characters.
pub fn is_id(value: &str) -> bool {
    value.len() == 64
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Partition into (ids, everything else), preserving order.
pub fn split_ids_other<S: AsRef<str>>(values: &[S]) -> (Vec<String>, Vec<String>) {
    values
        .iter()
        .map(|v| v.as_ref().to_string())
        .partition(|v| is_id(v))
}

/// Resolve a mixed list of vessel ids, names, IMOs, MMSIs and vessel classes.
///
/// Ids pass through; classes are searched by class, everything else by term.
pub fn convert_to_vessel_ids<S: AsRef<str>>(
    transport: &Arc<dyn Transport>,
    values: &[S],
) -> Result<Vec<String>, SdkError> {
    let (mut ids, others) = split_ids_other(values);
    let (classes, terms): (Vec<String>, Vec<String>) = others
        .into_iter()
        .partition(|v| AVAILABLE_VESSEL_CLASSES.contains(&v.as_str()));

    let vessels = Vessels::new(transport.clone());
    if !classes.is_empty() {
        let query = VesselSearch {
            vessel_classes: classes,
            ..VesselSearch::default()
        };
        ids.extend(vessels.search(&query)?.to_list()?.into_iter().map(|v| v.id));
    }
    if !terms.is_empty() {
        let query = VesselSearch {
            term: terms,
            ..VesselSearch::default()
        };
        ids.extend(vessels.search(&query)?.to_list()?.into_iter().map(|v| v.id));
    }
    Ok(ids)
}

/// Resolve a mixed list of product ids and product names.
pub fn convert_to_product_ids<S: AsRef<str>>(
    transport: &Arc<dyn Transport>,
    values: &[S],
) -> Result<Vec<String>, SdkError> {
    let (mut ids, terms) = split_ids_other(values);
    if !terms.is_empty() {
        let query = ProductSearch {
            term: terms,
            ..ProductSearch::default()
        };
        let products = Products::new(transport.clone()).search(&query)?;
        ids.extend(products.to_list()?.into_iter().map(|p| p.id));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "e486ca3d2e58b61d683b5143a063ec309f2fa3bfd0b87d91984f43d9ee5071fb";

    #[test]
    fn test_is_id() {
        assert!(is_id(ID));
        assert!(!is_id("Stallion"));
        assert!(!is_id(&ID.to_uppercase()));
        assert!(!is_id(&ID[1..]));
    }

    #[test]
    fn test_split_ids_other() {
        let (ids, others) = split_ids_other(&["Stallion", ID, "9464326", "vlcc"]);
        assert_eq!(ids, vec![ID.to_string()]);
        assert_eq!(others, vec!["Stallion", "9464326", "vlcc"]);
    }
}
