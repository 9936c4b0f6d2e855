//! Retrieved document chunk

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A unit of retrieved document text
///
/// Only `content` takes part in classification and drafting. Metadata and
/// source travel along for provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Unique identifier of the chunk
    pub id: String,
    /// Content text
    pub content: String,
    /// Provenance metadata (source position, header, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Source document reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl DocumentChunk {
    /// Create a new chunk
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: HashMap::new(),
            source: None,
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Set source reference
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
