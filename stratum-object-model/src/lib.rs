//! Object-model resolution for the Stratum model compiler
//!
//! The capstone of the pipeline: given a PSM schema IRI and a
//! [`stratum_model::ResourceStore`], [`resolve_schema`] recursively
//! resolves classes and properties, merges PSM -> PIM -> CIM
//! interpretation chains with inheritance, and returns a deduplicated
//! [`ObjectModel`] tree for the schema generators.
//!
//! Resolution is cycle-safe (arena registration before recursion),
//! strictly sequential over store reads, and all-or-nothing: any missing
//! resource or role mismatch aborts the whole schema.

mod error;
mod model;
mod resolver;

pub use error::{ResolveError, Result};
pub use model::{
    ClassId, ObjectClass, ObjectModel, ObjectProperty, ObjectSchema, PropertyId, PropertyType,
};
pub use resolver::resolve_schema;
