//! The page-builder's declarative document model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One content block inside a page document.
///
/// `element_id` names the component kind that renders this block
/// (kebab-case); everything else the builder authored is carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "elementId")]
    pub element_id: String,
    /// Builder-defined content fields, opaque to the pipeline.
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    /// Create an entity for a component kind.
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            data: serde_json::Map::new(),
        }
    }

    /// Attach a builder content field.
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// A page document: the builder's declarative description of one page.
///
/// Fetched once per request and never mutated by the pipeline. Entity keys
/// are unique within the document; their insertion order carries no
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub entities: HashMap<String, Entity>,
}

impl PageDocument {
    /// Create an empty document.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entities: HashMap::new(),
        }
    }

    /// Add an entity under a key.
    pub fn with_entity(mut self, key: impl Into<String>, entity: Entity) -> Self {
        self.entities.insert(key.into(), entity);
        self
    }

    /// Merge this document over a static default document.
    ///
    /// Entities authored in this document win over the default's on key
    /// collision; default entities with unclaimed keys are carried along.
    pub fn merged_with(mut self, default: &PageDocument) -> PageDocument {
        for (key, entity) in &default.entities {
            self.entities
                .entry(key.clone())
                .or_insert_with(|| entity.clone());
        }
        if self.id.is_empty() {
            self.id = default.id.clone();
        }
        if self.name.is_empty() {
            self.name = default.name.clone();
        }
        self
    }
}
