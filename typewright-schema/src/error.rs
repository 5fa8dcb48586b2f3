use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while materializing or validating a schema snapshot.
#[derive(Debug, Error)]
pub enum Error {
    /// The snapshot is not valid JSON for the expected shape.
    #[error("invalid schema snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two fields in the same collection share an identifier.
    #[error("duplicate field `{field}` in collection `{collection}`")]
    DuplicateField { collection: String, field: String },

    /// A relation points at a collection the snapshot does not contain.
    #[error(
        "field `{field}` in collection `{collection}` references unknown collection `{target}`"
    )]
    UnknownRelationTarget {
        collection: String,
        field: String,
        target: String,
    },
}
