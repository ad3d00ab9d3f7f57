//! Error types for the knowledgebase core

use std::sync::Arc;

use thiserror::Error;

use crate::collection::Collection;

/// Result type for knowledgebase operations
pub type Result<T, C> = std::result::Result<T, KnowledgebaseError<C>>;

/// Knowledgebase core errors
///
/// Rendered as `"{name}: {message}"`, where `name` is [`KnowledgebaseError::name`].
#[derive(Error, Debug)]
pub enum KnowledgebaseError<C: Collection> {
    /// A collection's identifier was already taken by an earlier collection.
    #[error(
        "CollectionDuplicate: A collection with the id '{}' was already given to SKB core.",
        .duplicate.identifier()
    )]
    CollectionDuplicate { duplicate: Arc<C> },

    /// An internal invariant was violated. Reserved; nothing raises it yet.
    #[error("Unexpected Behavior: Case #{0}")]
    UnexpectedBehavior(u32),
}

impl<C: Collection> KnowledgebaseError<C> {
    /// Name of the error kind, as it prefixes the display message
    pub fn name(&self) -> &'static str {
        match self {
            KnowledgebaseError::CollectionDuplicate { .. } => "CollectionDuplicate",
            KnowledgebaseError::UnexpectedBehavior(_) => "Unexpected Behavior",
        }
    }

    /// The collection that caused a duplicate error, if this is one
    pub fn duplicate(&self) -> Option<&Arc<C>> {
        match self {
            KnowledgebaseError::CollectionDuplicate { duplicate } => Some(duplicate),
            KnowledgebaseError::UnexpectedBehavior(_) => None,
        }
    }
}
