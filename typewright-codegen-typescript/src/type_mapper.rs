//! Primitive and interface-aware type mapping for single fields.
//!
//! This is the pure half of type resolution: it never looks at relations or
//! at other collections, only at a field's own type tag and interface
//! metadata. Relation handling lives in [`crate::resolver`].

use typewright_schema::{Choice, Field, FieldType};

use crate::naming::{member_key, string_literal};

/// Nesting cap for `list` interface sub-fields. The schema shape cannot
/// recurse back into the model, so this only guards against pathological
/// snapshots.
const MAX_LIST_DEPTH: usize = 8;

/// Interfaces whose value is an array of choice values stored as JSON/CSV.
const MULTI_SELECT_INTERFACES: [&str; 3] =
    ["tags", "select-multiple-dropdown", "select-multiple-checkbox"];

/// Resolve a field's base type from its primitive tag and interface,
/// ignoring any relation it may carry.
pub fn primitive_type(field: &Field) -> String {
    resolve(field, 0)
}

fn resolve(field: &Field, depth: usize) -> String {
    match field.ty {
        FieldType::Json | FieldType::Csv => json_type(field, depth),
        FieldType::GeometryPoint => {
            r#"{ type: "Point", coordinates: [number, number] }"#.to_string()
        }
        FieldType::GeometryMultiPoint => {
            r#"{ type: "MultiPoint", coordinates: [number, number][] }"#.to_string()
        }
        FieldType::GeometryLineString => {
            r#"{ type: "LineString", coordinates: [number, number][] }"#.to_string()
        }
        FieldType::GeometryMultiLineString => {
            r#"{ type: "MultiLineString", coordinates: [number, number][][] }"#.to_string()
        }
        FieldType::GeometryPolygon => {
            r#"{ type: "Polygon", coordinates: [number, number][][] }"#.to_string()
        }
        FieldType::GeometryMultiPolygon => {
            r#"{ type: "MultiPolygon", coordinates: [number, number][][][] }"#.to_string()
        }
        _ => scalar_type(field),
    }
}

fn scalar_type(field: &Field) -> String {
    let narrowed = matches!(
        field.interface.as_deref(),
        Some("select-dropdown" | "select-radio")
    ) && !field.options.choices.is_empty()
        && !field.options.allow_other;
    if narrowed {
        return literal_union(&field.options.choices);
    }

    match field.ty {
        FieldType::Integer | FieldType::BigInteger | FieldType::Float | FieldType::Decimal => {
            "number".to_string()
        }
        FieldType::Boolean => "boolean".to_string(),
        _ => "string".to_string(),
    }
}

fn json_type(field: &Field, depth: usize) -> String {
    match field.interface.as_deref() {
        Some("list") => list_type(field, depth),
        Some(interface) if MULTI_SELECT_INTERFACES.contains(&interface) => {
            choice_array(&field.options.choices, field.options.allow_other)
        }
        Some("select-multiple-checkbox-tree") => {
            let flattened = flatten_choices(&field.options.choices);
            choice_array(&flattened, field.options.allow_other)
        }
        // Unknown interface plugins keep generation going with an open type.
        _ => "unknown".to_string(),
    }
}

fn list_type(field: &Field, depth: usize) -> String {
    let sub_fields: Vec<&Field> = field
        .options
        .fields
        .iter()
        .filter(|f| !f.is_presentational())
        .collect();
    if sub_fields.is_empty() || depth >= MAX_LIST_DEPTH {
        return "unknown[]".to_string();
    }

    let members: Vec<String> = sub_fields
        .iter()
        .map(|f| format!("{}: {}", member_key(&f.field), resolve(f, depth + 1)))
        .collect();
    format!("{{ {} }}[]", members.join("; "))
}

fn choice_array(choices: &[Choice], allow_other: bool) -> String {
    if allow_other || choices.is_empty() {
        return "string[]".to_string();
    }
    format!("({})[]", literal_union(choices))
}

fn literal_union(choices: &[Choice]) -> String {
    choices
        .iter()
        .map(|c| string_literal(&c.value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Depth-first flatten of a choice tree, parent before descendants.
fn flatten_choices(choices: &[Choice]) -> Vec<Choice> {
    let mut out = Vec::new();
    for choice in choices {
        out.push(Choice::new(choice.value.clone()));
        out.extend(flatten_choices(&choice.children));
    }
    out
}
