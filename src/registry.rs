//! Knowledgebase Core
//!
//! Holds the collections of a knowledgebase instance, unique by identifier.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::collection::Collection;
use crate::config::{CoreConfig, LookupStrategy};
use crate::error::{KnowledgebaseError, Result};

/// The core of a Sivrad Knowledgebase instance
///
/// Built once from an initial list of collections and read-only afterwards.
/// Collections are held as shared handles, so callers may keep their own.
#[derive(Debug)]
pub struct KnowledgebaseCore<C> {
    /// Accepted collections, in input order
    collections: Vec<Arc<C>>,
    /// Identifier to position in `collections`, for indexed lookup
    index: Option<HashMap<String, usize>>,
}

impl<C: Collection> KnowledgebaseCore<C> {
    /// Build a core from a list of collections
    ///
    /// Fails on the first collection whose identifier was already given,
    /// in input order. No core is returned in that case.
    pub fn new<I>(collections: I) -> Result<Self, C>
    where
        I: IntoIterator,
        I::Item: Into<Arc<C>>,
    {
        Self::with_lookup(collections, LookupStrategy::default())
    }

    /// Build a core using the lookup strategy from `config`
    pub fn with_config<I>(collections: I, config: &CoreConfig) -> Result<Self, C>
    where
        I: IntoIterator,
        I::Item: Into<Arc<C>>,
    {
        Self::with_lookup(collections, config.registry.lookup)
    }

    /// Build a core with an explicit lookup strategy
    pub fn with_lookup<I>(collections: I, lookup: LookupStrategy) -> Result<Self, C>
    where
        I: IntoIterator,
        I::Item: Into<Arc<C>>,
    {
        let mut core = Self {
            collections: Vec::new(),
            index: match lookup {
                LookupStrategy::Scan => None,
                LookupStrategy::Index => Some(HashMap::new()),
            },
        };

        core.set_collections(collections)?;

        debug!(
            collections = core.collections.len(),
            lookup = ?lookup,
            "knowledgebase core ready"
        );

        Ok(core)
    }

    /// Verify and append each collection
    fn set_collections<I>(&mut self, collections: I) -> Result<(), C>
    where
        I: IntoIterator,
        I::Item: Into<Arc<C>>,
    {
        for collection in collections {
            let collection = self.verify_collection(collection.into())?;
            let position = self.collections.len();

            if let Some(index) = self.index.as_mut() {
                index.insert(collection.identifier().to_string(), position);
            }

            debug!(identifier = collection.identifier(), position, "collection accepted");
            self.collections.push(collection);
        }

        Ok(())
    }

    /// Check a collection against all accepted collections
    fn verify_collection(&self, collection: Arc<C>) -> Result<Arc<C>, C> {
        if self.collection_exists(collection.identifier()) {
            warn!(identifier = collection.identifier(), "duplicate collection rejected");
            return Err(KnowledgebaseError::CollectionDuplicate {
                duplicate: collection,
            });
        }
        Ok(collection)
    }

    /// Check if a collection exists (exact, case-sensitive match)
    pub fn collection_exists(&self, identifier: &str) -> bool {
        self.get_collection(identifier).is_some()
    }

    /// Get a collection by identifier
    pub fn get_collection(&self, identifier: &str) -> Option<&Arc<C>> {
        match &self.index {
            Some(index) => index
                .get(identifier)
                .and_then(|&position| self.collections.get(position)),
            None => self
                .collections
                .iter()
                .find(|collection| collection.identifier() == identifier),
        }
    }

    /// Number of collections held
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether no collections are held
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// All collections, in input order
    pub fn collections(&self) -> impl Iterator<Item = &Arc<C>> + '_ {
        self.collections.iter()
    }

    /// All identifiers, in input order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.collections.iter().map(|collection| collection.identifier())
    }
}
