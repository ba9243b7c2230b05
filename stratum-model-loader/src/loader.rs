//! Worklist graph loader
//!
//! Expands a frontier of IRIs over a graph source: pop an IRI, bind a
//! view, run every adapter, enqueue every newly referenced IRI, repeat
//! until the worklist drains. The visited set is updated at enqueue time,
//! so an IRI reported from two expansions before the first drains is
//! still processed exactly once.

use crate::adapter::EntityAdapter;
use crate::error::Result;
use crate::iri_mapping::{IdentityIriMapping, IriMapping};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::sync::Arc;
use stratum_graph_source::{BoundNode, GraphSource};
use stratum_model::{ReadOnlyStore, Resource};
use tracing::debug;

/// Worklist-based loader turning a graph source into a resource store
///
/// Adapters run in registration order on every visited node. With a
/// non-identity [`IriMapping`], worklist IRIs are local (PIM) IRIs and the
/// view is bound at the translated foreign (CIM) subject.
#[derive(Debug)]
pub struct GraphLoader {
    adapters: Vec<Arc<dyn EntityAdapter>>,
    mapping: Arc<dyn IriMapping>,
}

impl GraphLoader {
    /// Create a loader over the given adapters with the identity mapping
    pub fn new(adapters: Vec<Arc<dyn EntityAdapter>>) -> Self {
        Self {
            adapters,
            mapping: Arc::new(IdentityIriMapping),
        }
    }

    /// Replace the IRI mapping (used when loading an external vocabulary)
    pub fn with_iri_mapping(mut self, mapping: Arc<dyn IriMapping>) -> Self {
        self.mapping = mapping;
        self
    }

    /// Load everything reachable from the root IRIs
    ///
    /// Failures propagate immediately - no partial store is ever
    /// returned. Nodes no adapter recognizes (frontier edges leaving the
    /// graph) are dropped, keeping the loaded resources' type-tag sets
    /// non-empty.
    pub async fn load<I, S>(&self, source: &dyn GraphSource, roots: I) -> Result<ReadOnlyStore>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut visited: FxHashSet<String> = FxHashSet::default();
        let mut worklist: VecDeque<String> = VecDeque::new();
        for root in roots {
            let root = root.into();
            if visited.insert(root.clone()) {
                worklist.push_back(root);
            }
        }

        let mut resources: FxHashMap<String, Resource> = FxHashMap::default();

        while let Some(iri) = worklist.pop_front() {
            let subject = self.mapping.pim_to_cim(&iri)?;
            let node = BoundNode::iri(source, &subject);
            let mut resource = Resource::new(&iri);

            for adapter in &self.adapters {
                for referenced in adapter.load(&node, &mut resource).await? {
                    if visited.insert(referenced.clone()) {
                        worklist.push_back(referenced);
                    }
                }
            }

            if resource.types.is_empty() {
                debug!(iri = %iri, "No adapter matched; dropping untyped shell");
                continue;
            }

            debug!(iri = %iri, roles = resource.types.len(), "Loaded resource");
            resources.insert(iri, resource);
        }

        debug!(count = resources.len(), "Graph load complete");
        Ok(ReadOnlyStore::new(resources))
    }
}
