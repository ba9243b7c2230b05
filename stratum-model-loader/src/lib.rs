//! Entity adapters and the worklist graph loader
//!
//! This crate turns RDF graphs into typed [`stratum_model::Resource`]
//! records:
//!
//! - [`EntityAdapter`] - one per role, type-tag-gated, populating role
//!   fields from a bound graph view and reporting newly referenced IRIs
//! - PIM, Data-PSM, and CIM-facing adapter sets ([`pim_adapters`],
//!   [`psm_adapters`], [`cim_adapters`])
//! - [`IriMapping`] - translation between foreign CIM and local PIM IRI
//!   spaces, injected into the CIM adapters
//! - [`GraphLoader`] - the worklist algorithm expanding root IRIs to a
//!   [`stratum_model::ReadOnlyStore`]
//!
//! # Example
//!
//! ```
//! use stratum_graph_source::MemoryGraphSource;
//! use stratum_model_loader::{pim_adapters, GraphLoader};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = MemoryGraphSource::from_turtle(
//!     "@prefix pim: <https://ns.stratum.dev/pim#> .\n\
//!      @prefix ex: <http://example.org/> .\n\
//!      ex:person a pim:Class ; pim:hasLabel \"Person\"@en .",
//! ).unwrap();
//!
//! let loader = GraphLoader::new(pim_adapters());
//! let store = loader.load(&source, ["http://example.org/person".to_string()]).await.unwrap();
//! # });
//! ```

mod adapter;
mod cim;
mod error;
mod iri_mapping;
mod loader;
mod pim;
mod psm;

pub use adapter::EntityAdapter;
pub use cim::{
    cim_adapters, CimAssociationAdapter, CimAssociationEndAdapter, CimAttributeAdapter,
    CimClassAdapter,
};
pub use error::{LoaderError, Result};
pub use iri_mapping::{IdentityIriMapping, IriMapping, PrefixIriMapping};
pub use loader::GraphLoader;
pub use pim::{
    pim_adapters, PimAssociationAdapter, PimAssociationEndAdapter, PimAttributeAdapter,
    PimClassAdapter, PimSchemaAdapter,
};
pub use psm::{
    psm_adapters, PsmAssociationEndAdapter, PsmAttributeAdapter, PsmChoiceAdapter,
    PsmClassAdapter, PsmClassReferenceAdapter, PsmIncludeAdapter, PsmSchemaAdapter,
};
