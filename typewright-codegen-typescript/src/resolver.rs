//! Relation-aware type resolution for collection fields.
//!
//! Resolves each field to the type expression and nullability marker that
//! the emitter prints. Cross-collection lookups (many relations typed by
//! the target's primary key) go through the read-only [`Schema`].

use typewright_schema::{Field, Relation, Schema};

use crate::error::{Error, Result};
use crate::generator::GenerateOptions;
use crate::naming::{member_key, string_literal, to_pascal_case};
use crate::type_mapper::primitive_type;

/// One emitted record-type member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    /// Member key, already quoted if necessary.
    pub key: String,

    /// Full type expression, including any relation combination and, in
    /// intersection mode, the wrapping `(...) | null`.
    pub ty: String,

    /// Whether the member carries the `?` optional marker.
    pub optional: bool,
}

pub(crate) struct TypeResolver<'a> {
    schema: &'a Schema,
    options: &'a GenerateOptions,
}

impl<'a> TypeResolver<'a> {
    pub fn new(schema: &'a Schema, options: &'a GenerateOptions) -> Self {
        Self { schema, options }
    }

    /// Resolve one field of `collection`. Returns `None` for presentational
    /// fields, which store no value and are dropped from the record type.
    pub fn resolve_field(&self, collection: &str, field: &Field) -> Result<Option<ResolvedMember>> {
        if field.is_presentational() {
            return Ok(None);
        }

        let mut ty = self.base_type(collection, field)?;

        // Union or intersect the referenced record type(s). The any_type
        // discriminator holds a collection name, not a record, so it stays
        // a bare literal union.
        let op = if self.options.use_intersection_types {
            " & "
        } else {
            " | "
        };
        match &field.relation {
            Some(Relation::One { collection: target }) => {
                ty = format!("{ty}{op}{}", to_pascal_case(target));
            }
            Some(Relation::Many { collection: target }) => {
                ty = format!("{ty}{op}{}[]", to_pascal_case(target));
            }
            Some(Relation::Any { collections }) => {
                // A many-to-any slot holds one of several shapes, never all
                // at once, so the related types join as a union even in
                // intersection mode.
                let related: Vec<String> =
                    collections.iter().map(|c| to_pascal_case(c)).collect();
                ty = format!("{ty} | {}", related.join(" | "));
            }
            Some(Relation::AnyType { .. }) | None => {}
        }

        // Required suppresses nullability before the combination is
        // rendered, so a suppressed field carries no null anywhere.
        let mut optional =
            field.nullable && !(self.options.treat_required_as_non_null && field.required);
        if optional && self.options.use_intersection_types && field.relation.is_some() {
            ty = format!("({ty}) | null");
            optional = false;
        }

        Ok(Some(ResolvedMember {
            key: member_key(&field.field),
            ty,
            optional,
        }))
    }

    fn base_type(&self, collection: &str, field: &Field) -> Result<String> {
        match &field.relation {
            // A one relation's column stores the foreign key with the
            // field's own declared type.
            None | Some(Relation::One { .. }) => Ok(primitive_type(field)),
            Some(Relation::Many { collection: target }) => {
                let foreign = self.schema.collection(target).ok_or_else(|| {
                    Error::UnknownCollection {
                        collection: collection.to_string(),
                        field: field.field.clone(),
                        target: target.clone(),
                    }
                })?;
                let key = foreign.primary_key().ok_or_else(|| Error::MissingPrimaryKey {
                    collection: collection.to_string(),
                    field: field.field.clone(),
                    target: target.clone(),
                })?;
                Ok(format!("{}[]", primitive_type(key)))
            }
            // Polymorphic foreign keys are stored as strings regardless of
            // the candidate collections' key types.
            Some(Relation::Any { .. }) => Ok("string".to_string()),
            Some(Relation::AnyType { collections }) => {
                let literals: Vec<String> = collections
                    .iter()
                    .map(|c| string_literal(&to_pascal_case(c)))
                    .collect();
                Ok(literals.join(" | "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use typewright_schema::{Collection, FieldType};

    use super::*;

    fn blog_schema() -> Schema {
        Schema::from_collections([
            Collection::new(
                "blog_posts",
                vec![
                    Field::new("id", FieldType::Integer).primary_key(),
                    Field::new("author", FieldType::Integer)
                        .nullable()
                        .relation(Relation::One {
                            collection: "authors".into(),
                        }),
                    Field::new("tags", FieldType::Unknown).relation(Relation::Many {
                        collection: "tags".into(),
                    }),
                ],
            ),
            Collection::new(
                "authors",
                vec![Field::new("id", FieldType::Integer).primary_key()],
            ),
            Collection::new(
                "tags",
                vec![
                    Field::new("id", FieldType::Unknown).primary_key(),
                    Field::new("label", FieldType::Text),
                ],
            ),
        ])
        .unwrap()
    }

    fn resolve(schema: &Schema, options: &GenerateOptions, field: &Field) -> ResolvedMember {
        TypeResolver::new(schema, options)
            .resolve_field("blog_posts", field)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_one_relation_uses_declared_column_type() {
        let schema = blog_schema();
        let options = GenerateOptions::default();
        let field = schema.collection("blog_posts").unwrap().field("author").unwrap();
        let member = resolve(&schema, &options, field);
        assert_eq!(member.ty, "number | Authors");
        assert!(member.optional);
    }

    #[test]
    fn test_many_relation_uses_target_primary_key() {
        let schema = blog_schema();
        let options = GenerateOptions::default();
        let field = schema.collection("blog_posts").unwrap().field("tags").unwrap();
        let member = resolve(&schema, &options, field);
        // The tags collection keys on a string, not the field's own type.
        assert_eq!(member.ty, "string[] | Tags[]");
        assert!(!member.optional);
    }

    #[test]
    fn test_any_relation_is_always_a_union() {
        let schema = blog_schema();
        let field = Field::new("item", FieldType::Unknown).relation(Relation::Any {
            collections: vec!["pages".into(), "articles".into()],
        });

        let options = GenerateOptions::default();
        let member = resolve(&schema, &options, &field);
        assert_eq!(member.ty, "string | Pages | Articles");

        let options = GenerateOptions {
            use_intersection_types: true,
            ..GenerateOptions::default()
        };
        let member = resolve(&schema, &options, &field);
        assert_eq!(member.ty, "string | Pages | Articles");
    }

    #[test]
    fn test_any_type_discriminator_literals() {
        let schema = blog_schema();
        let options = GenerateOptions {
            use_intersection_types: true,
            ..GenerateOptions::default()
        };
        let field = Field::new("item_type", FieldType::Unknown).relation(Relation::AnyType {
            collections: vec!["pages".into(), "articles".into()],
        });
        let member = resolve(&schema, &options, &field);
        // No record-type union is applied, even in intersection mode.
        assert_eq!(member.ty, r#""Pages" | "Articles""#);
    }

    #[test]
    fn test_intersection_mode_wraps_nullable_relation() {
        let schema = blog_schema();
        let options = GenerateOptions {
            use_intersection_types: true,
            ..GenerateOptions::default()
        };
        let field = schema.collection("blog_posts").unwrap().field("author").unwrap();
        let member = resolve(&schema, &options, field);
        assert_eq!(member.ty, "(number & Authors) | null");
        assert!(!member.optional);
    }

    #[test]
    fn test_required_suppression() {
        let schema = blog_schema();
        let field = Field::new("editor", FieldType::Integer)
            .nullable()
            .required()
            .relation(Relation::One {
                collection: "authors".into(),
            });

        let options = GenerateOptions {
            treat_required_as_non_null: true,
            use_intersection_types: true,
            ..GenerateOptions::default()
        };
        let member = resolve(&schema, &options, &field);
        // Suppression happens before the null wrapping, so no null at all.
        assert_eq!(member.ty, "number & Authors");
        assert!(!member.optional);

        let options = GenerateOptions {
            treat_required_as_non_null: false,
            ..GenerateOptions::default()
        };
        let member = resolve(&schema, &options, &field);
        assert!(member.optional);
    }

    #[test]
    fn test_presentational_fields_skipped() {
        let schema = blog_schema();
        let options = GenerateOptions::default();
        let field = Field::new("divider", FieldType::Unknown)
            .interface("presentation-divider")
            .required()
            .relation(Relation::One {
                collection: "authors".into(),
            });
        let resolved = TypeResolver::new(&schema, &options)
            .resolve_field("blog_posts", &field)
            .unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn test_many_relation_to_missing_collection_fails() {
        let schema = blog_schema();
        let options = GenerateOptions::default();
        let field = Field::new("links", FieldType::Unknown).relation(Relation::Many {
            collection: "missing".into(),
        });
        let err = TypeResolver::new(&schema, &options)
            .resolve_field("blog_posts", &field)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCollection { ref target, .. } if target == "missing"));
    }

    #[test]
    fn test_many_relation_without_primary_key_fails() {
        let schema = Schema::from_collections([
            Collection::new(
                "posts",
                vec![Field::new("comments", FieldType::Unknown).relation(Relation::Many {
                    collection: "comments".into(),
                })],
            ),
            Collection::new("comments", vec![Field::new("body", FieldType::Text)]),
        ])
        .unwrap();
        let options = GenerateOptions::default();
        let field = schema.collection("posts").unwrap().field("comments").unwrap();
        let err = TypeResolver::new(&schema, &options)
            .resolve_field("posts", field)
            .unwrap_err();
        assert!(
            matches!(err, Error::MissingPrimaryKey { ref target, .. } if target == "comments")
        );
    }

    #[test]
    fn test_quoted_member_key() {
        let schema = blog_schema();
        let options = GenerateOptions::default();
        let field = Field::new("my-field", FieldType::Text);
        let member = resolve(&schema, &options, &field);
        assert_eq!(member.key, "\"my-field\"");
        assert_eq!(member.ty, "string");
    }
}
