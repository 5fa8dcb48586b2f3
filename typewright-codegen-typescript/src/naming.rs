//! TypeScript-specific naming and quoting helpers.

/// Convert a collection identifier to the PascalCase type name used for its
/// record type: split on spaces, underscores, and hyphens, capitalize each
/// segment, concatenate.
pub fn to_pascal_case(s: &str) -> String {
    s.split([' ', '_', '-'])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Render a member key, double-quoting it when it contains any character
/// outside `[0-9A-Za-z_$]`.
pub fn member_key(name: &str) -> String {
    let plain = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if plain {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Render a double-quoted TypeScript string literal with `\` and `"` escaped.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
