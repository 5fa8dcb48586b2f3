//! TypeScript definition generator for Directus content schemas.
//!
//! Turns a materialized schema snapshot ([`typewright_schema::Schema`])
//! into a single string of TypeScript declarations: one record type per
//! collection, in snapshot order, followed by a directory type mapping
//! collection identifiers to their record types. Downstream projects diff
//! the output against checked-in files, so formatting is deterministic.
//!
//! # Usage
//!
//! ```
//! use typewright_codegen_typescript::{GenerateOptions, Generator};
//! use typewright_schema::{Collection, Field, FieldType, Schema};
//!
//! let schema = Schema::from_collections([Collection::new(
//!     "settings",
//!     vec![Field::new("id", FieldType::Integer).primary_key()],
//! )])?;
//! let types = Generator::new(&schema, GenerateOptions::default()).build()?;
//! assert!(types.starts_with("export type Settings = {"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Fetching the live schema, CLI flags, and writing the output file are
//! the caller's concern; generation itself performs no I/O.

mod code_builder;
mod error;
mod generator;
mod resolver;

pub mod naming;
pub mod type_mapper;

pub use code_builder::CodeBuilder;
pub use error::{Error, Result};
pub use generator::{GenerateOptions, Generator, generate};
pub use resolver::ResolvedMember;
