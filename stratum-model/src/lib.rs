//! Typed resource records and stores for the Stratum model compiler
//!
//! The model layer turns raw RDF into typed, multi-role resources:
//!
//! - [`RoleTag`] - the closed role set across the PIM and Data-PSM levels
//! - [`Resource`] - IRI + tag set + one optional field group per role
//! - [`ResourceStore`] - read-only access; [`ReadOnlyStore`] over a fixed
//!   map and [`FederatedStore`] composing stores by priority
//!
//! Resources are created by the graph loader or an external command
//! executor; this crate only reads them.

mod error;
mod pim;
mod psm;
mod resource;
mod role;
mod store;

pub use error::{Result, StoreError};
pub use pim::{PimAssociation, PimAssociationEnd, PimAttribute, PimClass, PimSchema};
pub use psm::{
    PsmAssociationEnd, PsmAttribute, PsmChoice, PsmClass, PsmClassReference, PsmInclude,
    PsmSchema,
};
pub use resource::{Cardinality, Resource};
pub use role::RoleTag;
pub use store::{FederatedStore, ReadOnlyStore, ResourceStore};

pub use stratum_graph_ir::LanguageString;
