//! In-memory model of a Directus content-schema snapshot.
//!
//! The snapshot is materialized by an external fetch step and consumed by
//! the code generators as a read-only map from collection identifier to
//! [`Collection`]. Iteration order is the snapshot's insertion order and
//! determines generated output order, so it must be preserved.
//!
//! # Usage
//!
//! ```
//! use typewright_schema::{Collection, Field, FieldType, Relation, Schema};
//!
//! let schema = Schema::from_collections([Collection::new(
//!     "blog_posts",
//!     vec![
//!         Field::new("id", FieldType::Integer).primary_key(),
//!         Field::new("author", FieldType::Integer)
//!             .nullable()
//!             .relation(Relation::One { collection: "blog_posts".into() }),
//!     ],
//! )])?;
//! assert_eq!(schema.len(), 1);
//! # Ok::<(), typewright_schema::Error>(())
//! ```

mod collection;
mod error;
mod field;

use indexmap::IndexMap;

pub use collection::Collection;
pub use error::{Error, Result};
pub use field::{Choice, Field, FieldType, InterfaceOptions, Relation};

/// A validated, insertion-ordered set of collections.
///
/// Immutable once constructed; safe to reuse across repeated generation
/// calls with different options.
#[derive(Debug, Clone)]
pub struct Schema {
    collections: IndexMap<String, Collection>,
}

impl Schema {
    /// Build a schema from collections in the given order, keyed by each
    /// collection's identifier, then validate it.
    pub fn from_collections(
        collections: impl IntoIterator<Item = Collection>,
    ) -> Result<Self> {
        let collections = collections
            .into_iter()
            .map(|c| (c.collection.clone(), c))
            .collect();
        let schema = Self { collections };
        schema.validate()?;
        Ok(schema)
    }

    /// Parse a JSON snapshot: an object mapping collection identifiers to
    /// collection definitions, in the order the fetch step assembled them.
    pub fn from_json(snapshot: &str) -> Result<Self> {
        let collections: IndexMap<String, Collection> = serde_json::from_str(snapshot)?;
        Self::from_collections(collections.into_values())
    }

    /// Look up a collection by identifier.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Iterate collections in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Check the structural invariants the generators rely on: field
    /// identifiers unique per collection, and every one/many relation
    /// target present in the model.
    pub fn validate(&self) -> Result<()> {
        for collection in self.collections.values() {
            let mut seen = std::collections::HashSet::new();
            for field in &collection.fields {
                if !seen.insert(field.field.as_str()) {
                    return Err(Error::DuplicateField {
                        collection: collection.collection.clone(),
                        field: field.field.clone(),
                    });
                }

                if let Some(Relation::One { collection: target })
                | Some(Relation::Many { collection: target }) = &field.relation
                {
                    if !self.collections.contains_key(target) {
                        return Err(Error::UnknownRelationTarget {
                            collection: collection.collection.clone(),
                            field: field.field.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
