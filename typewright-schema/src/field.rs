use serde::Deserialize;

/// One named, typed member of a collection.
///
/// A field carries the column's primitive type, nullability flags, the
/// interface it is edited with in the Directus app (plus that interface's
/// option metadata), and an optional relation to other collections.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    /// Field identifier, unique within its collection.
    pub field: String,

    /// Primitive type tag of the underlying column.
    #[serde(rename = "type")]
    pub ty: FieldType,

    /// Whether the column accepts null.
    #[serde(default)]
    pub nullable: bool,

    /// Whether the app marks the field as required.
    #[serde(default)]
    pub required: bool,

    /// Whether this field is the collection's primary key.
    #[serde(default)]
    pub primary_key: bool,

    /// Interface tag, e.g. `select-dropdown`, `list`, `tags`.
    #[serde(default)]
    pub interface: Option<String>,

    /// Interface-specific option metadata.
    #[serde(default)]
    pub options: InterfaceOptions,

    /// Relation to one or more other collections, if any.
    #[serde(default)]
    pub relation: Option<Relation>,
}

impl Field {
    /// Create a plain field with the given identifier and type.
    pub fn new(field: impl Into<String>, ty: FieldType) -> Self {
        Self {
            field: field.into(),
            ty,
            nullable: false,
            required: false,
            primary_key: false,
            interface: None,
            options: InterfaceOptions::default(),
            relation: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.choices = choices.into_iter().map(Choice::new).collect();
        self
    }

    pub fn choice_tree(mut self, choices: Vec<Choice>) -> Self {
        self.options.choices = choices;
        self
    }

    pub fn allow_other(mut self) -> Self {
        self.options.allow_other = true;
        self
    }

    pub fn sub_fields(mut self, fields: Vec<Field>) -> Self {
        self.options.fields = fields;
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }

    /// Whether the field is a UI-only placeholder that stores no value.
    ///
    /// Presentational and group interfaces never appear in generated types.
    pub fn is_presentational(&self) -> bool {
        match &self.interface {
            Some(interface) => {
                interface.starts_with("presentation-") || interface.starts_with("group-")
            }
            None => false,
        }
    }
}

/// Option metadata attached to a field's interface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceOptions {
    /// Declared choice values for select-style interfaces.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Whether the interface accepts values outside the declared choices.
    #[serde(default, rename = "allowOther")]
    pub allow_other: bool,

    /// Sub-field definitions for the `list` interface.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One selectable value, optionally with nested children (checkbox trees).
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub value: String,

    #[serde(default)]
    pub children: Vec<Choice>,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(value: impl Into<String>, children: Vec<Choice>) -> Self {
        Self {
            value: value.into(),
            children,
        }
    }
}

/// Primitive type tag of a field's underlying column.
///
/// Tags not recognized here (uuid, hash, date, time, timestamp, plain
/// string, ...) collapse to [`FieldType::Unknown`], which types as a plain
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    Integer,
    BigInteger,
    Float,
    Decimal,
    Boolean,
    Json,
    Csv,
    DateTime,
    Text,
    GeometryPoint,
    GeometryMultiPoint,
    GeometryLineString,
    GeometryMultiLineString,
    GeometryPolygon,
    GeometryMultiPolygon,
    /// Any tag without a dedicated mapping; treated as a string column.
    Unknown,
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "integer" => Self::Integer,
            "bigInteger" => Self::BigInteger,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "boolean" => Self::Boolean,
            "json" => Self::Json,
            "csv" => Self::Csv,
            "dateTime" | "datetime" => Self::DateTime,
            "text" => Self::Text,
            "geometry.Point" => Self::GeometryPoint,
            "geometry.MultiPoint" => Self::GeometryMultiPoint,
            "geometry.LineString" => Self::GeometryLineString,
            "geometry.MultiLineString" => Self::GeometryMultiLineString,
            "geometry.Polygon" => Self::GeometryPolygon,
            "geometry.MultiPolygon" => Self::GeometryMultiPolygon,
            _ => Self::Unknown,
        }
    }
}

/// Relation from a field to one or more other collections' records.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Relation {
    /// Single foreign record reference (many-to-one).
    One { collection: String },

    /// List of foreign record references (one-to-many / many-to-many).
    Many { collection: String },

    /// Polymorphic single reference (many-to-any); the foreign key is
    /// always stored as a string.
    Any { collections: Vec<String> },

    /// Sibling discriminator of a many-to-any relation; holds one of the
    /// candidate collection names, never a record.
    AnyType { collections: Vec<String> },
}
