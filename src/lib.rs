//! Sivrad Knowledgebase Core
//!
//! The in-memory core of a Sivrad Knowledgebase instance: a set of
//! collections, unique by identifier, with existence checks and lookup.
//!
//! ## Features
//!
//! - **Append-only**: Collections are given once, at construction
//! - **Duplicate Rejection**: Construction fails on the first repeated identifier
//! - **Shared Handles**: Collections are held as `Arc`s, never copied
//! - **Configurable Lookup**: Linear scan or identifier index
//!
//! ## Example
//!
//! ```
//! use sivrad_knowledgebase_core::{CollectionRecord, KnowledgebaseCore};
//!
//! let core: KnowledgebaseCore<CollectionRecord> = KnowledgebaseCore::new(vec![
//!     CollectionRecord::new("books"),
//!     CollectionRecord::new("authors"),
//! ])
//! .unwrap();
//!
//! assert!(core.collection_exists("books"));
//! assert!(core.get_collection("films").is_none());
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod registry;
pub mod telemetry;

pub use collection::{Collection, CollectionRecord};
pub use config::{CoreConfig, LoggingConfig, LookupStrategy, RegistryConfig};
pub use error::{KnowledgebaseError, Result};
pub use registry::KnowledgebaseCore;
pub use telemetry::init_tracing;
