//! Resource stores - read-only access to finalized resources
//!
//! A store answers three questions: which resources exist, which carry a
//! given role tag, and what a resource's current value is. Stores are
//! produced externally (by a command-executor layer or the graph loader)
//! and are immutable for the duration of a resolution.

use crate::error::Result;
use crate::resource::Resource;
use crate::role::RoleTag;
use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Read-only access to a set of resources
#[async_trait]
pub trait ResourceStore: Debug + Send + Sync {
    /// IRIs of every resource held
    async fn list_resources(&self) -> Result<Vec<String>>;

    /// IRIs of every resource carrying the given role tag
    async fn list_resources_of_type(&self, tag: RoleTag) -> Result<Vec<String>>;

    /// Read one resource
    ///
    /// Returns a **deep copy**, never a shared instance - callers may hold
    /// the value across later reads without seeing writes. Absence is
    /// `Ok(None)`, never an error.
    async fn read_resource(&self, iri: &str) -> Result<Option<Resource>>;
}

/// Store over a fixed resource map
///
/// Listing order is sorted IRI order, so two stores over equal maps list
/// identically.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyStore {
    resources: FxHashMap<String, Resource>,
}

impl ReadOnlyStore {
    /// Create a store over the given resources
    pub fn new(resources: FxHashMap<String, Resource>) -> Self {
        Self { resources }
    }

    /// Create a store from an iterator of resources, keyed by their IRIs
    pub fn from_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
        Self {
            resources: resources
                .into_iter()
                .map(|r| (r.iri().to_string(), r))
                .collect(),
        }
    }

    /// Number of resources held
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// True when the store holds no resources
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ResourceStore for ReadOnlyStore {
    async fn list_resources(&self) -> Result<Vec<String>> {
        let mut iris: Vec<String> = self.resources.keys().cloned().collect();
        iris.sort();
        Ok(iris)
    }

    async fn list_resources_of_type(&self, tag: RoleTag) -> Result<Vec<String>> {
        let mut iris: Vec<String> = self
            .resources
            .values()
            .filter(|r| r.has_type(tag))
            .map(|r| r.iri().to_string())
            .collect();
        iris.sort();
        Ok(iris)
    }

    async fn read_resource(&self, iri: &str) -> Result<Option<Resource>> {
        Ok(self.resources.get(iri).cloned())
    }
}

/// Store composing several stores by priority
///
/// Listing operations return the deduplicated union in store order;
/// `read_resource` returns the first hit in store order. Conflicting
/// definitions across stores are not detected - the first store wins.
#[derive(Debug, Clone)]
pub struct FederatedStore {
    stores: Vec<Arc<dyn ResourceStore>>,
}

impl FederatedStore {
    /// Create a federation over the given stores, highest priority first
    pub fn new(stores: Vec<Arc<dyn ResourceStore>>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl ResourceStore for FederatedStore {
    async fn list_resources(&self) -> Result<Vec<String>> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut iris = Vec::new();
        for store in &self.stores {
            for iri in store.list_resources().await? {
                if seen.insert(iri.clone()) {
                    iris.push(iri);
                }
            }
        }
        Ok(iris)
    }

    async fn list_resources_of_type(&self, tag: RoleTag) -> Result<Vec<String>> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut iris = Vec::new();
        for store in &self.stores {
            for iri in store.list_resources_of_type(tag).await? {
                if seen.insert(iri.clone()) {
                    iris.push(iri);
                }
            }
        }
        Ok(iris)
    }

    async fn read_resource(&self, iri: &str) -> Result<Option<Resource>> {
        for (index, store) in self.stores.iter().enumerate() {
            if let Some(resource) = store.read_resource(iri).await? {
                debug!(iri, store = index, "Resource resolved by federated store");
                return Ok(Some(resource));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_resource(iri: &str, label_en: &str) -> Resource {
        let mut resource = Resource::new(iri);
        resource
            .pim_class_mut()
            .label
            .insert("en".into(), label_en.into());
        resource
    }

    #[tokio::test]
    async fn test_read_missing_returns_none() {
        let store = ReadOnlyStore::default();
        assert!(store.read_resource("http://e/missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_of_type_contains_each_once() {
        let store = ReadOnlyStore::from_resources([
            class_resource("http://e/a", "A"),
            class_resource("http://e/b", "B"),
        ]);

        let classes = store
            .list_resources_of_type(RoleTag::PimClass)
            .await
            .unwrap();
        assert_eq!(classes, vec!["http://e/a".to_string(), "http://e/b".to_string()]);

        let schemas = store
            .list_resources_of_type(RoleTag::PimSchema)
            .await
            .unwrap();
        assert!(schemas.is_empty());
    }

    #[tokio::test]
    async fn test_read_returns_deep_copy() {
        let store = ReadOnlyStore::from_resources([class_resource("http://e/a", "A")]);

        let mut first = store.read_resource("http://e/a").await.unwrap().unwrap();
        first.pim_class_mut().label.insert("en".into(), "mutated".into());

        let second = store.read_resource("http://e/a").await.unwrap().unwrap();
        assert_eq!(
            second.as_pim_class().unwrap().label.get("en"),
            Some(&"A".to_string())
        );
    }

    #[tokio::test]
    async fn test_federated_union_dedupes() {
        let a = Arc::new(ReadOnlyStore::from_resources([
            class_resource("http://e/x", "x-from-a"),
            class_resource("http://e/y", "y-from-a"),
        ]));
        let b = Arc::new(ReadOnlyStore::from_resources([
            class_resource("http://e/y", "y-from-b"),
            class_resource("http://e/z", "z-from-b"),
        ]));

        let federated = FederatedStore::new(vec![a, b]);

        let mut iris = federated.list_resources().await.unwrap();
        iris.sort();
        assert_eq!(
            iris,
            vec![
                "http://e/x".to_string(),
                "http://e/y".to_string(),
                "http://e/z".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_federated_first_store_wins() {
        let a = Arc::new(ReadOnlyStore::from_resources([class_resource(
            "http://e/y",
            "y-from-a",
        )]));
        let b = Arc::new(ReadOnlyStore::from_resources([class_resource(
            "http://e/y",
            "y-from-b",
        )]));

        let federated = FederatedStore::new(vec![a, b]);
        let resource = federated.read_resource("http://e/y").await.unwrap().unwrap();
        assert_eq!(
            resource.as_pim_class().unwrap().label.get("en"),
            Some(&"y-from-a".to_string())
        );
    }
}
