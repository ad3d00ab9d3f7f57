//! Collection types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A record the knowledgebase core can hold.
///
/// The core only ever reads [`Collection::identifier`]; everything else about
/// the record belongs to the caller. The identifier must not change while the
/// record is held by a [`KnowledgebaseCore`](crate::KnowledgebaseCore).
pub trait Collection: fmt::Debug {
    /// Identifier naming this collection within a knowledgebase
    fn identifier(&self) -> &str;
}

/// A plain collection record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    /// Unique identifier (e.g., "books", "authors")
    pub identifier: String,
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form data, never inspected by the core
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl CollectionRecord {
    /// Create a new record with only an identifier
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: None,
            metadata: serde_json::Value::Null,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

impl Collection for CollectionRecord {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}
