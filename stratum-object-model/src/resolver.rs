//! The object-model resolver
//!
//! Resolves a PSM schema against a resource store into an [`ObjectModel`],
//! merging PSM -> PIM -> CIM interpretation chains and inheritance.
//!
//! # Cycle safety
//!
//! Every `resolve_*` registers an empty arena node under its IRI *before*
//! recursing into parents, parts, or interpretations, then fills the node
//! in place. A recursion reaching an in-progress IRI gets the registered
//! index back immediately, so cyclic `extends` and self-referential
//! association targets terminate. Memo maps are per-call state: a new
//! resolution against a changed store never sees stale nodes.
//!
//! # Ordering
//!
//! Store reads are strictly sequential - one deferred call at a time,
//! never concurrent fan-out. Memoization follows first-visit order.

use crate::error::{ResolveError, Result};
use crate::model::{
    ClassId, ObjectClass, ObjectModel, ObjectProperty, ObjectSchema, PropertyId, PropertyType,
};
use futures::future::BoxFuture;
use rustc_hash::{FxHashMap, FxHashSet};
use stratum_model::{Resource, ResourceStore};
use tracing::debug;

/// Resolve a PSM schema into an object model
///
/// Per-call memoization only: resolving the same schema twice against an
/// unchanged store yields value-equal (not reference-shared) trees.
pub async fn resolve_schema(store: &dyn ResourceStore, schema_iri: &str) -> Result<ObjectModel> {
    Resolver::new(store).resolve(schema_iri).await
}

/// The PIM property kind expected by an interpretation merge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PropertyKind {
    Attribute,
    AssociationEnd,
}

impl PropertyKind {
    fn expected_tag(self) -> &'static str {
        match self {
            PropertyKind::Attribute => "pim:Attribute",
            PropertyKind::AssociationEnd => "pim:AssociationEnd",
        }
    }
}

/// Render a resource's tag set for error messages
fn tags_of(resource: &Resource) -> String {
    if resource.types.is_empty() {
        "(no role tags)".to_string()
    } else {
        resource
            .types
            .iter()
            .map(|t| t.as_iri())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

struct Resolver<'a> {
    store: &'a dyn ResourceStore,
    classes: Vec<ObjectClass>,
    properties: Vec<ObjectProperty>,
    // Memo maps: one per semantic kind, per level, keyed by resource IRI
    psm_classes: FxHashMap<String, ClassId>,
    pim_classes: FxHashMap<String, ClassId>,
    psm_properties: FxHashMap<String, PropertyId>,
    pim_properties: FxHashMap<String, PropertyId>,
}

impl<'a> Resolver<'a> {
    fn new(store: &'a dyn ResourceStore) -> Self {
        Self {
            store,
            classes: Vec::new(),
            properties: Vec::new(),
            psm_classes: FxHashMap::default(),
            pim_classes: FxHashMap::default(),
            psm_properties: FxHashMap::default(),
            pim_properties: FxHashMap::default(),
        }
    }

    async fn read(&self, iri: &str) -> Result<Resource> {
        self.store
            .read_resource(iri)
            .await?
            .ok_or_else(|| ResolveError::not_found(format!("resource {} is not in the store", iri)))
    }

    async fn resolve(mut self, schema_iri: &str) -> Result<ObjectModel> {
        debug!(schema = schema_iri, "Resolving object model");

        let resource = self.store.read_resource(schema_iri).await?.ok_or_else(|| {
            ResolveError::not_found(format!("schema {} is not in the store", schema_iri))
        })?;
        let Some(schema) = resource.as_psm_schema().cloned() else {
            return Err(ResolveError::not_found(format!(
                "schema {} is not tagged psm:Schema (found {})",
                schema_iri,
                tags_of(&resource)
            )));
        };

        let mut object_schema = ObjectSchema {
            iri: schema_iri.to_string(),
            label: schema.label.clone(),
            description: schema.description.clone(),
            technical_label: schema.technical_label.clone(),
            roots: Vec::new(),
            classes: Vec::new(),
        };

        for root_iri in &schema.roots {
            let Some(root) = self.store.read_resource(root_iri).await? else {
                continue;
            };
            if root.is_psm_class() {
                let id = self.resolve_psm_class(root_iri.clone()).await?;
                object_schema.roots.push(id);
            }
        }

        object_schema.classes = self.collect_classes(&object_schema.roots);

        debug!(
            classes = self.classes.len(),
            properties = self.properties.len(),
            "Object model resolved"
        );

        Ok(ObjectModel {
            schema: object_schema,
            classes: self.classes,
            properties: self.properties,
        })
    }

    /// Stack-based traversal over the resolved arena: every class reachable
    /// from the roots, exactly once, roots first.
    fn collect_classes(&self, roots: &[ClassId]) -> Vec<ClassId> {
        let mut visited: FxHashSet<ClassId> = FxHashSet::default();
        let mut order: Vec<ClassId> = Vec::new();

        for &root in roots {
            if visited.insert(root) {
                order.push(root);
            }
        }

        let mut stack: Vec<ClassId> = roots.to_vec();
        while let Some(id) = stack.pop() {
            let class = &self.classes[id.0];
            let mut neighbors: Vec<ClassId> = class.extends.clone();
            for &property_id in &class.properties {
                for data_type in &self.properties[property_id.0].data_types {
                    if let PropertyType::Class(class_id) = data_type {
                        neighbors.push(*class_id);
                    }
                }
            }
            for neighbor in neighbors {
                if visited.insert(neighbor) {
                    order.push(neighbor);
                    stack.push(neighbor);
                }
            }
        }

        order
    }

    fn resolve_psm_class<'s>(&'s mut self, iri: String) -> BoxFuture<'s, Result<ClassId>> {
        Box::pin(async move {
            if let Some(&id) = self.psm_classes.get(&iri) {
                return Ok(id);
            }

            let resource = self.read(&iri).await?;
            let Some(class) = resource.as_psm_class().cloned() else {
                return Err(ResolveError::type_mismatch(format!(
                    "expected psm:Class on {}, found {}",
                    iri,
                    tags_of(&resource)
                )));
            };

            // Register before recursing; recursion back into this IRI gets
            // the partially filled node.
            let id = ClassId(self.classes.len());
            self.classes.push(ObjectClass {
                iri: iri.clone(),
                ..Default::default()
            });
            self.psm_classes.insert(iri.clone(), id);
            debug!(iri = iri.as_str(), index = id.0, "Resolving PSM class");

            {
                let node = &mut self.classes[id.0];
                node.label = class.label.clone();
                node.description = class.description.clone();
                node.technical_label = class.technical_label.clone();
                node.pim_iri = class.interpretation.clone();
            }

            for parent_iri in &class.extends {
                let parent_id = self.resolve_psm_class(parent_iri.clone()).await?;
                self.classes[id.0].extends.push(parent_id);
            }

            for part_iri in &class.parts {
                let property_id = self.resolve_psm_property(part_iri.clone()).await?;
                self.classes[id.0].properties.push(property_id);
            }

            if let Some(pim_iri) = &class.interpretation {
                let pim_resource = self.read(pim_iri).await?;
                if !pim_resource.is_pim_class() {
                    return Err(ResolveError::type_mismatch(format!(
                        "interpretation of {} expected pim:Class on {}, found {}",
                        iri,
                        pim_iri,
                        tags_of(&pim_resource)
                    )));
                }
                let pim_id = self.resolve_pim_class(pim_iri.clone()).await?;
                let pim = self.classes[pim_id.0].clone();

                // PSM wins: PIM fills only what the PSM level left absent
                let node = &mut self.classes[id.0];
                node.cim_iri = pim.cim_iri;
                node.is_codelist = pim.is_codelist;
                if node.label.is_empty() {
                    node.label = pim.label;
                }
                if node.description.is_empty() {
                    node.description = pim.description;
                }
            }

            Ok(id)
        })
    }

    /// PIM classes resolve scalars and inheritance only; they never
    /// enumerate properties (ownership is declared on the attribute and
    /// association-end side).
    fn resolve_pim_class<'s>(&'s mut self, iri: String) -> BoxFuture<'s, Result<ClassId>> {
        Box::pin(async move {
            if let Some(&id) = self.pim_classes.get(&iri) {
                return Ok(id);
            }

            let resource = self.read(&iri).await?;
            let Some(class) = resource.as_pim_class().cloned() else {
                return Err(ResolveError::type_mismatch(format!(
                    "expected pim:Class on {}, found {}",
                    iri,
                    tags_of(&resource)
                )));
            };

            let id = ClassId(self.classes.len());
            self.classes.push(ObjectClass {
                iri: iri.clone(),
                ..Default::default()
            });
            self.pim_classes.insert(iri.clone(), id);
            debug!(iri = iri.as_str(), index = id.0, "Resolving PIM class");

            {
                let node = &mut self.classes[id.0];
                node.label = class.label.clone();
                node.description = class.description.clone();
                node.is_codelist = class.is_codelist;
                node.cim_iri = class.interpretation.clone();
            }

            for parent_iri in &class.extends {
                let parent_id = self.resolve_pim_class(parent_iri.clone()).await?;
                self.classes[id.0].extends.push(parent_id);
            }

            Ok(id)
        })
    }

    fn resolve_psm_property<'s>(&'s mut self, iri: String) -> BoxFuture<'s, Result<PropertyId>> {
        Box::pin(async move {
            if let Some(&id) = self.psm_properties.get(&iri) {
                return Ok(id);
            }

            let resource = self.read(&iri).await?;

            if let Some(attribute) = resource.as_psm_attribute().cloned() {
                let id = PropertyId(self.properties.len());
                self.properties.push(ObjectProperty {
                    iri: iri.clone(),
                    ..Default::default()
                });
                self.psm_properties.insert(iri.clone(), id);

                {
                    let node = &mut self.properties[id.0];
                    node.label = attribute.label.clone();
                    node.description = attribute.description.clone();
                    node.technical_label = attribute.technical_label.clone();
                    if let Some(datatype) = &attribute.datatype {
                        node.data_types.push(PropertyType::Primitive {
                            datatype: datatype.clone(),
                        });
                    }
                }

                if let Some(pim_iri) = &attribute.interpretation {
                    let pim_id = self
                        .resolve_pim_property(pim_iri, PropertyKind::Attribute, &iri)
                        .await?;
                    self.merge_pim_property(id, pim_id);
                }

                return Ok(id);
            }

            if let Some(end) = resource.as_psm_association_end().cloned() {
                let id = PropertyId(self.properties.len());
                self.properties.push(ObjectProperty {
                    iri: iri.clone(),
                    ..Default::default()
                });
                self.psm_properties.insert(iri.clone(), id);

                {
                    let node = &mut self.properties[id.0];
                    node.label = end.label.clone();
                    node.description = end.description.clone();
                    node.technical_label = end.technical_label.clone();
                }

                let target_iri = end.part.clone().ok_or_else(|| {
                    ResolveError::not_found(format!(
                        "association end {} has no target class",
                        iri
                    ))
                })?;
                let class_id = self.resolve_psm_class(target_iri).await?;
                self.properties[id.0]
                    .data_types
                    .push(PropertyType::Class(class_id));

                if let Some(pim_iri) = &end.interpretation {
                    let pim_id = self
                        .resolve_pim_property(pim_iri, PropertyKind::AssociationEnd, &iri)
                        .await?;
                    self.merge_pim_property(id, pim_id);
                }

                return Ok(id);
            }

            Err(ResolveError::type_mismatch(format!(
                "expected psm:Attribute or psm:AssociationEnd on {}, found {}",
                iri,
                tags_of(&resource)
            )))
        })
    }

    /// Resolve a PIM attribute or association end as a merge source
    ///
    /// `psm_iri` names the interpreting PSM property in kind-mismatch
    /// errors. PIM property nodes carry scalars and cardinality only; the
    /// merge never reads a participant.
    async fn resolve_pim_property(
        &mut self,
        iri: &str,
        kind: PropertyKind,
        psm_iri: &str,
    ) -> Result<PropertyId> {
        if let Some(&id) = self.pim_properties.get(iri) {
            return Ok(id);
        }

        let resource = self.read(iri).await?;
        let mut node = ObjectProperty {
            iri: iri.to_string(),
            ..Default::default()
        };

        match kind {
            PropertyKind::Attribute => {
                let Some(attribute) = resource.as_pim_attribute() else {
                    return Err(ResolveError::type_mismatch(format!(
                        "interpretation of {} expected {} on {}, found {}",
                        psm_iri,
                        kind.expected_tag(),
                        iri,
                        tags_of(&resource)
                    )));
                };
                node.label = attribute.label.clone();
                node.description = attribute.description.clone();
                node.technical_label = attribute.technical_label.clone();
                node.cim_iri = attribute.interpretation.clone();
            }
            PropertyKind::AssociationEnd => {
                let Some(end) = resource.as_pim_association_end() else {
                    return Err(ResolveError::type_mismatch(format!(
                        "interpretation of {} expected {} on {}, found {}",
                        psm_iri,
                        kind.expected_tag(),
                        iri,
                        tags_of(&resource)
                    )));
                };
                node.label = end.label.clone();
                node.description = end.description.clone();
                node.technical_label = end.technical_label.clone();
                node.cim_iri = end.interpretation.clone();
                node.cardinality = end.cardinality.unwrap_or_default();
            }
        }

        let id = PropertyId(self.properties.len());
        self.properties.push(node);
        self.pim_properties.insert(iri.to_string(), id);
        Ok(id)
    }

    /// Merge a resolved PIM property into its PSM counterpart (PSM wins)
    fn merge_pim_property(&mut self, psm_id: PropertyId, pim_id: PropertyId) {
        let pim = self.properties[pim_id.0].clone();
        let node = &mut self.properties[psm_id.0];

        node.cim_iri = pim.cim_iri;
        node.cardinality = pim.cardinality;
        if node.label.is_empty() {
            node.label = pim.label;
        }
        if node.description.is_empty() {
            node.description = pim.description;
        }
        if node.technical_label.is_none() {
            node.technical_label = pim.technical_label;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_model::{ReadOnlyStore, Resource};

    fn store_of(resources: impl IntoIterator<Item = Resource>) -> ReadOnlyStore {
        ReadOnlyStore::from_resources(resources)
    }

    #[tokio::test]
    async fn test_missing_schema_is_not_found() {
        let store = ReadOnlyStore::default();
        let err = resolve_schema(&store, "http://e/schema").await.unwrap_err();
        assert!(matches!(err, ResolveError::NotFound(_)));
        assert!(err.to_string().contains("http://e/schema"));
    }

    #[tokio::test]
    async fn test_mistyped_schema_is_not_found() {
        let mut resource = Resource::new("http://e/schema");
        resource.psm_class_mut();
        let store = store_of([resource]);

        let err = resolve_schema(&store, "http://e/schema").await.unwrap_err();
        assert!(matches!(err, ResolveError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_part_of_wrong_role_is_type_mismatch() {
        let mut schema = Resource::new("http://e/schema");
        {
            let s = schema.psm_schema_mut();
            s.roots.push("http://e/class".into());
        }
        let mut class = Resource::new("http://e/class");
        {
            let c = class.psm_class_mut();
            c.parts.push("http://e/choice".into());
        }
        let mut choice = Resource::new("http://e/choice");
        choice.psm_choice_mut();

        let store = store_of([schema, class, choice]);
        let err = resolve_schema(&store, "http://e/schema").await.unwrap_err();
        assert!(matches!(err, ResolveError::TypeMismatch(_)));
        assert!(err.to_string().contains("http://e/choice"));
    }

    #[tokio::test]
    async fn test_interpretation_kind_mismatch_names_both_iris() {
        let mut schema = Resource::new("http://e/schema");
        schema.psm_schema_mut().roots.push("http://e/class".into());

        let mut class = Resource::new("http://e/class");
        class.psm_class_mut().parts.push("http://e/attr".into());

        let mut attribute = Resource::new("http://e/attr");
        {
            let a = attribute.psm_attribute_mut();
            a.interpretation = Some("http://e/pim-end".into());
        }

        // The PIM counterpart is an association end, not an attribute
        let mut pim_end = Resource::new("http://e/pim-end");
        pim_end.pim_association_end_mut();

        let store = store_of([schema, class, attribute, pim_end]);
        let err = resolve_schema(&store, "http://e/schema").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("http://e/attr"));
        assert!(msg.contains("http://e/pim-end"));
        assert!(msg.contains("pim:Attribute"));
    }

    #[tokio::test]
    async fn test_class_interpretation_must_be_pim_class() {
        let mut schema = Resource::new("http://e/schema");
        schema.psm_schema_mut().roots.push("http://e/class".into());

        let mut class = Resource::new("http://e/class");
        class.psm_class_mut().interpretation = Some("http://e/pim-attr".into());

        let mut pim_attr = Resource::new("http://e/pim-attr");
        pim_attr.pim_attribute_mut();

        let store = store_of([schema, class, pim_attr]);
        let err = resolve_schema(&store, "http://e/schema").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("http://e/class"));
        assert!(msg.contains("http://e/pim-attr"));
    }

    #[tokio::test]
    async fn test_non_class_roots_are_skipped() {
        let mut schema = Resource::new("http://e/schema");
        {
            let s = schema.psm_schema_mut();
            s.roots.push("http://e/not-a-class".into());
            s.roots.push("http://e/class".into());
        }
        let mut attribute = Resource::new("http://e/not-a-class");
        attribute.psm_attribute_mut();
        let mut class = Resource::new("http://e/class");
        class.psm_class_mut();

        let store = store_of([schema, attribute, class]);
        let model = resolve_schema(&store, "http://e/schema").await.unwrap();
        assert_eq!(model.schema.roots.len(), 1);
    }
}
