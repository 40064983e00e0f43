//! Records produced by the generator and the Weaviate shapes they are written as.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Class every seeded object is written into.
pub const CLASS_NAME: &str = "RandClass";
pub const CONTENT_PROPERTY: &str = "content";

/// A synthetic record before it is addressed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    pub content: String,
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub content: String,
}

/// One object in a batch write request.
///
/// Serializes to Weaviate's object JSON: `class`, `id`, `properties`, `vector`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertObject {
    pub class: String,
    pub id: Uuid,
    pub properties: Properties,
    pub vector: Vec<f32>,
}

impl From<DataObject> for InsertObject {
    /// Assigns a fresh random id; nothing is deduplicated across runs.
    fn from(obj: DataObject) -> Self {
        Self {
            class: CLASS_NAME.to_string(),
            id: Uuid::new_v4(),
            properties: Properties { content: obj.content },
            vector: obj.vector,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationConfig {
    #[serde(default)]
    pub factor: u32,
    #[serde(default)]
    pub async_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(default)]
    pub data_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A Weaviate class (collection) descriptor.
///
/// Only the fields this tool sets are modelled; anything else the server
/// returns from `GET /v1/schema` is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub class: String,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_config: Option<ReplicationConfig>,
}

impl ClassDefinition {
    /// `RandClass`: one text property, replicated three ways.
    pub fn rand_class() -> Self {
        Self {
            class: CLASS_NAME.to_string(),
            properties: vec![PropertyDefinition {
                name: CONTENT_PROPERTY.to_string(),
                data_type: vec!["text".to_string()],
                description: Some("Random text".to_string()),
            }],
            replication_config: Some(ReplicationConfig { factor: 3, async_enabled: true }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescription {
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,
}

impl SchemaDescription {
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.class.as_str()).collect()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.class == class)
    }
}
