use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal schema inconsistencies hit while resolving relation types.
///
/// These indicate a corrupt or unvalidated snapshot; generation stops
/// without emitting partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// A many relation points at a collection absent from the model.
    #[error(
        "field `{field}` in collection `{collection}` has a relation to unknown collection `{target}`"
    )]
    UnknownCollection {
        collection: String,
        field: String,
        target: String,
    },

    /// The target collection of a many relation declares no primary key,
    /// so the foreign-key element type cannot be resolved.
    #[error(
        "collection `{target}` has no primary key; required to type the relation on `{collection}.{field}`"
    )]
    MissingPrimaryKey {
        collection: String,
        field: String,
        target: String,
    },
}
