//! Record-type and directory-type emission.

use typewright_schema::{Collection, Schema};

use crate::code_builder::CodeBuilder;
use crate::error::Result;
use crate::naming::{member_key, to_pascal_case};
use crate::resolver::TypeResolver;

/// Name of the aggregate type mapping collection identifiers to record
/// types; downstream SDK consumers expect this exact name.
const DIRECTORY_TYPE_NAME: &str = "CustomDirectusTypes";

/// Options controlling type combination, directory shape, and nullability.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Combine relation record types with `&` instead of `|`.
    pub use_intersection_types: bool,

    /// Wrap non-singleton directory entries as arrays (Directus SDK v11
    /// style). Disable for the legacy singular directory shape.
    pub sdk11: bool,

    /// Drop nullability from fields that are also marked required.
    pub treat_required_as_non_null: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            use_intersection_types: false,
            sdk11: true,
            treat_required_as_non_null: false,
        }
    }
}

/// Generates TypeScript type declarations for a schema snapshot.
///
/// Pure: repeated [`build`](Generator::build) calls over the same schema
/// and options produce byte-identical output.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, options: GenerateOptions) -> Self {
        Self { schema, options }
    }

    /// Emit one record type per collection, in snapshot order, followed by
    /// the directory type.
    pub fn build(&self) -> Result<String> {
        let resolver = TypeResolver::new(self.schema, &self.options);
        let mut builder = CodeBuilder::new();
        let mut directory: Vec<(String, String)> = Vec::with_capacity(self.schema.len());

        for collection in self.schema.iter() {
            let type_name = to_pascal_case(&collection.collection);
            let wrap_array = self.options.sdk11 && !collection.singleton;
            let entry = if wrap_array {
                format!("{type_name}[]")
            } else {
                type_name.clone()
            };
            directory.push((member_key(&collection.collection), entry));

            builder = self
                .record_type(builder, &resolver, collection, &type_name)?
                .blank();
        }

        if directory.is_empty() {
            return Ok(builder
                .line(&format!("export type {DIRECTORY_TYPE_NAME} = {{}};"))
                .build());
        }

        builder = builder
            .line(&format!("export type {DIRECTORY_TYPE_NAME} = {{"))
            .indent();
        for (key, entry) in directory {
            builder = builder.line(&format!("{key}: {entry};"));
        }
        Ok(builder.dedent().line("};").build())
    }

    fn record_type(
        &self,
        builder: CodeBuilder,
        resolver: &TypeResolver<'_>,
        collection: &Collection,
        type_name: &str,
    ) -> Result<CodeBuilder> {
        let mut members = Vec::with_capacity(collection.fields.len());
        for field in &collection.fields {
            if let Some(member) = resolver.resolve_field(&collection.collection, field)? {
                members.push(member);
            }
        }

        if members.is_empty() {
            return Ok(builder.line(&format!("export type {type_name} = {{}};")));
        }

        let mut builder = builder
            .line(&format!("export type {type_name} = {{"))
            .indent();
        for member in members {
            let optional = if member.optional { "?" } else { "" };
            builder = builder.line(&format!("{}{}: {};", member.key, optional, member.ty));
        }
        Ok(builder.dedent().line("};"))
    }
}

/// Convenience wrapper around [`Generator`].
pub fn generate(schema: &Schema, options: GenerateOptions) -> Result<String> {
    Generator::new(schema, options).build()
}
