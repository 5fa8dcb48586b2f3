use serde::Deserialize;

use crate::field::Field;

/// A named record type in the source schema, analogous to a table.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Collection identifier, unique across the schema.
    pub collection: String,

    /// Singleton collections hold exactly one logical record and are not
    /// wrapped as arrays in the directory type.
    #[serde(default)]
    pub singleton: bool,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Collection {
    pub fn new(collection: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            collection: collection.into(),
            singleton: false,
            fields,
        }
    }

    pub fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    /// Look up a field by identifier.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// The collection's primary-key field, if one is declared.
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.primary_key)
    }
}
