use serde::{Deserialize, Serialize};

use crate::deserialize::{null_as_empty, probability};

/// Longitude, latitude.
pub type Position = [f64; 2];

/// An entity identifier. The API sends either a bare string or a nested
/// reference object; the shape is decided once, here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Plain(String),
    Entity(Box<IdNameLayer>),
}

impl Id {
    pub fn as_str(&self) -> &str {
        match self {
            Id::Plain(id) => id,
            Id::Entity(entity) => &entity.id,
        }
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::Plain(id.to_string())
    }
}

/// Reference link carrying its layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdLayer {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
}

/// Reference link carrying a name and its layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdNameLayer {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer: Vec<String>,
}

/// Shape shared by every probability-bearing sub-entity (geography, product,
/// corporate). `layer` classifies the entity and is never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityWithProbability {
    pub id: Id,
    pub label: Option<String>,
    pub layer: String,
    #[serde(default, deserialize_with = "probability")]
    pub probability: Option<f64>,
    pub source: Option<String>,
}

impl EntityWithProbability {
    pub fn new(id: &str, label: &str, layer: &str, probability: f64, source: &str) -> Self {
        Self {
            id: Id::from(id),
            label: Some(label.to_string()),
            layer: layer.to_string(),
            probability: Some(probability),
            source: Some(source.to_string()),
        }
    }
}

/// Geography tree node attached to an event or movement.
pub type GeographyEntity = EntityWithProbability;
/// Product hierarchy level (group, group_product, category, grade).
pub type ProductEntity = EntityWithProbability;
/// Company linked to a vessel (commercial_owner, charterer, time_charterer).
pub type CorporateEntity = EntityWithProbability;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deserialize::deserialize;
    use serde_json::json;

    #[test]
    fn test_id_shape_dispatch() {
        assert_eq!(
            deserialize::<Id>(&json!("abc")).unwrap(),
            Id::Plain("abc".into())
        );

        let nested = deserialize::<Id>(&json!({"id": "abc", "name": "Rotterdam", "layer": ["port"]}))
            .unwrap();
        assert_eq!(nested.as_str(), "abc");
        assert!(matches!(nested, Id::Entity(_)));

        assert!(deserialize::<Id>(&json!(42)).is_err());
    }

    #[test]
    fn test_entity_requires_layer() {
        let err = deserialize::<EntityWithProbability>(&json!({"id": "x", "label": "y"})).unwrap_err();
        assert!(err.to_string().contains("`layer`"), "{err}");
    }

    #[test]
    fn test_entity_ignores_unknown_keys() {
        let entity = deserialize::<EntityWithProbability>(&json!({
            "id": "x",
            "layer": "country",
            "added_later": {"anything": [1, 2, 3]}
        }))
        .unwrap();
        assert_eq!(entity.layer, "country");
        assert_eq!(entity.label, None);
        assert_eq!(entity.probability, None);
    }

    #[test]
    fn test_round_trip_with_nested_id() {
        let entity = EntityWithProbability {
            id: Id::Entity(Box::new(IdNameLayer {
                id: "g-nl".into(),
                name: Some("Netherlands".into()),
                layer: vec!["country".into()],
            })),
            label: Some("Netherlands".into()),
            layer: "country".into(),
            probability: Some(0.5),
            source: None,
        };
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["id"]["name"], json!("Netherlands"));
        assert_eq!(deserialize::<EntityWithProbability>(&value).unwrap(), entity);
    }
}
