//! CIM-facing entity adapters
//!
//! These adapters read an external vocabulary (RDFS/OWL/SKOS) and produce
//! PIM resources specializing it. The popped worklist IRIs are local PIM
//! IRIs; the bound view subject is the foreign CIM IRI, and every IRI an
//! adapter reports back is translated to the local space through the
//! injected mapping. Equivalence and subclass edges merge with set union,
//! so an entity reached along several paths accumulates no duplicates.
//!
//! Association ends do not exist in the source ontology; they are
//! synthesized under `<association>#end-0` / `<association>#end-1`, with
//! `rdfs:domain` and `rdfs:range` as the participants.

use crate::adapter::{accepts, merge_unique, EntityAdapter};
use crate::error::Result;
use crate::iri_mapping::IriMapping;
use async_trait::async_trait;
use std::sync::Arc;
use stratum_graph_ir::LanguageString;
use stratum_graph_source::BoundNode;
use stratum_model::Resource;
use stratum_vocab::{owl, rdfs, skos};

/// Suffix marking the synthesized first association end
pub const END_0_SUFFIX: &str = "#end-0";
/// Suffix marking the synthesized second association end
pub const END_1_SUFFIX: &str = "#end-1";

/// Fold preferred labels over plain labels into one language map
async fn human_label(node: &BoundNode<'_>) -> Result<Option<LanguageString>> {
    let plain = node.language_string(rdfs::LABEL).await?;
    let preferred = node.language_string(skos::PREF_LABEL).await?;
    Ok(overlay(plain, preferred))
}

/// Fold SKOS definitions over RDFS comments into one language map
async fn human_description(node: &BoundNode<'_>) -> Result<Option<LanguageString>> {
    let plain = node.language_string(rdfs::COMMENT).await?;
    let preferred = node.language_string(skos::DEFINITION).await?;
    Ok(overlay(plain, preferred))
}

fn overlay(
    base: Option<LanguageString>,
    preferred: Option<LanguageString>,
) -> Option<LanguageString> {
    match (base, preferred) {
        (Some(mut base), Some(preferred)) => {
            base.extend(preferred);
            Some(base)
        }
        (base, preferred) => preferred.or(base),
    }
}

/// Adapter producing PIM classes from `rdfs:Class` / `owl:Class` entities
#[derive(Debug)]
pub struct CimClassAdapter {
    mapping: Arc<dyn IriMapping>,
}

impl CimClassAdapter {
    /// Create an adapter using the given IRI mapping
    pub fn new(mapping: Arc<dyn IriMapping>) -> Self {
        Self { mapping }
    }
}

#[async_trait]
impl EntityAdapter for CimClassAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        let types = node.types().await?;
        if !accepts(&types, rdfs::CLASS) && !accepts(&types, owl::CLASS) {
            return Ok(Vec::new());
        }

        let label = human_label(node).await?;
        let description = human_description(node).await?;
        let mut parents = node.iris(rdfs::SUB_CLASS_OF).await?;
        parents.extend(node.iris(owl::EQUIVALENT_CLASS).await?);

        let cim_iri = node.subject().as_iri().map(str::to_string);

        let class = resource.pim_class_mut();
        if let Some(label) = label {
            class.label = label;
        }
        if let Some(description) = description {
            class.description = description;
        }
        class.interpretation = cim_iri;

        let mut referenced = Vec::new();
        for parent in parents {
            let local = self.mapping.cim_to_pim(&parent);
            merge_unique(&mut class.extends, local.clone());
            merge_unique(&mut referenced, local);
        }

        Ok(referenced)
    }
}

/// Adapter producing PIM attributes from `owl:DatatypeProperty` entities
#[derive(Debug)]
pub struct CimAttributeAdapter {
    mapping: Arc<dyn IriMapping>,
}

impl CimAttributeAdapter {
    /// Create an adapter using the given IRI mapping
    pub fn new(mapping: Arc<dyn IriMapping>) -> Self {
        Self { mapping }
    }
}

#[async_trait]
impl EntityAdapter for CimAttributeAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, owl::DATATYPE_PROPERTY) {
            return Ok(Vec::new());
        }

        let label = human_label(node).await?;
        let description = human_description(node).await?;
        let owner = node.iri_value(rdfs::DOMAIN).await?;
        let range = node.iri_value(rdfs::RANGE).await?;
        let cim_iri = node.subject().as_iri().map(str::to_string);

        let attribute = resource.pim_attribute_mut();
        if let Some(label) = label {
            attribute.label = label;
        }
        if let Some(description) = description {
            attribute.description = description;
        }
        // The range is a datatype IRI, not an entity - kept in CIM space
        attribute.datatype = range;
        attribute.interpretation = cim_iri;

        let mut referenced = Vec::new();
        if let Some(owner) = owner {
            let local = self.mapping.cim_to_pim(&owner);
            attribute.owner_class = Some(local.clone());
            referenced.push(local);
        }

        Ok(referenced)
    }
}

/// Adapter producing PIM associations from `owl:ObjectProperty` entities
#[derive(Debug)]
pub struct CimAssociationAdapter {
    mapping: Arc<dyn IriMapping>,
}

impl CimAssociationAdapter {
    /// Create an adapter using the given IRI mapping
    pub fn new(mapping: Arc<dyn IriMapping>) -> Self {
        Self { mapping }
    }
}

#[async_trait]
impl EntityAdapter for CimAssociationAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, owl::OBJECT_PROPERTY) {
            return Ok(Vec::new());
        }

        let label = human_label(node).await?;
        let description = human_description(node).await?;
        let Some(cim_iri) = node.subject().as_iri().map(str::to_string) else {
            return Ok(Vec::new());
        };

        let ends = vec![
            self.mapping.cim_to_pim(&format!("{}{}", cim_iri, END_0_SUFFIX)),
            self.mapping.cim_to_pim(&format!("{}{}", cim_iri, END_1_SUFFIX)),
        ];

        let association = resource.pim_association_mut();
        if let Some(label) = label {
            association.label = label;
        }
        if let Some(description) = description {
            association.description = description;
        }
        association.interpretation = Some(cim_iri);
        for end in &ends {
            merge_unique(&mut association.ends, end.clone());
        }

        Ok(ends)
    }
}

/// Adapter producing the synthesized PIM association ends
///
/// Applies to worklist IRIs carrying an end suffix whose stem is an
/// `owl:ObjectProperty` in the source vocabulary. The first end's
/// participant is the property's `rdfs:domain`, the second end's the
/// `rdfs:range`.
#[derive(Debug)]
pub struct CimAssociationEndAdapter {
    mapping: Arc<dyn IriMapping>,
}

impl CimAssociationEndAdapter {
    /// Create an adapter using the given IRI mapping
    pub fn new(mapping: Arc<dyn IriMapping>) -> Self {
        Self { mapping }
    }
}

#[async_trait]
impl EntityAdapter for CimAssociationEndAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        let Some(subject) = node.subject().as_iri() else {
            return Ok(Vec::new());
        };

        let (stem, is_first) = if let Some(stem) = subject.strip_suffix(END_0_SUFFIX) {
            (stem, true)
        } else if let Some(stem) = subject.strip_suffix(END_1_SUFFIX) {
            (stem, false)
        } else {
            return Ok(Vec::new());
        };

        let association = BoundNode::iri(node.source(), stem);
        if !accepts(&association.types().await?, owl::OBJECT_PROPERTY) {
            return Ok(Vec::new());
        }

        let participant = if is_first {
            association.iri_value(rdfs::DOMAIN).await?
        } else {
            association.iri_value(rdfs::RANGE).await?
        };

        let end = resource.pim_association_end_mut();
        end.interpretation = Some(subject.to_string());

        let mut referenced = Vec::new();
        if let Some(participant) = participant {
            let local = self.mapping.cim_to_pim(&participant);
            end.participant = Some(local.clone());
            referenced.push(local);
        }

        Ok(referenced)
    }
}

/// Every CIM-facing adapter, in registration order
pub fn cim_adapters(mapping: Arc<dyn IriMapping>) -> Vec<Arc<dyn EntityAdapter>> {
    vec![
        Arc::new(CimClassAdapter::new(mapping.clone())),
        Arc::new(CimAttributeAdapter::new(mapping.clone())),
        Arc::new(CimAssociationAdapter::new(mapping.clone())),
        Arc::new(CimAssociationEndAdapter::new(mapping)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri_mapping::PrefixIriMapping;
    use stratum_graph_source::MemoryGraphSource;

    const PREFIX: &str = "https://model.example.org/pim#";

    fn mapping() -> Arc<dyn IriMapping> {
        Arc::new(PrefixIriMapping::new(PREFIX))
    }

    fn vocabulary() -> MemoryGraphSource {
        MemoryGraphSource::from_turtle(
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             @prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n\
             @prefix cim: <http://cim.example.org/> .\n\
             cim:Person a rdfs:Class ;\n\
               rdfs:label \"person\"@en ;\n\
               skos:prefLabel \"Person\"@en , \"Osoba\"@cs ;\n\
               rdfs:subClassOf cim:Agent ;\n\
               owl:equivalentClass cim:Human , cim:Agent .\n\
             cim:worksFor a owl:ObjectProperty ;\n\
               rdfs:label \"works for\"@en ;\n\
               rdfs:domain cim:Person ;\n\
               rdfs:range cim:Organization .",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_class_adapter_translates_and_unions() {
        let source = vocabulary();
        let node = BoundNode::iri(&source, "http://cim.example.org/Person");
        let mut resource = Resource::new(format!("{}http://cim.example.org/Person", PREFIX));

        let referenced = CimClassAdapter::new(mapping())
            .load(&node, &mut resource)
            .await
            .unwrap();

        let class = resource.as_pim_class().unwrap();
        // skos:prefLabel wins over rdfs:label for the shared tag
        assert_eq!(class.label.get("en"), Some(&"Person".to_string()));
        assert_eq!(class.label.get("cs"), Some(&"Osoba".to_string()));
        assert_eq!(
            class.interpretation.as_deref(),
            Some("http://cim.example.org/Person")
        );
        // cim:Agent appears via subClassOf and equivalentClass - merged once
        assert_eq!(class.extends.len(), 2);
        assert_eq!(referenced.len(), 2);
        assert!(class
            .extends
            .contains(&format!("{}http://cim.example.org/Agent", PREFIX)));
    }

    #[tokio::test]
    async fn test_association_synthesizes_ends() {
        let source = vocabulary();
        let node = BoundNode::iri(&source, "http://cim.example.org/worksFor");
        let mut resource = Resource::new(format!("{}http://cim.example.org/worksFor", PREFIX));

        let referenced = CimAssociationAdapter::new(mapping())
            .load(&node, &mut resource)
            .await
            .unwrap();

        let association = resource.as_pim_association().unwrap();
        assert_eq!(association.ends.len(), 2);
        assert_eq!(referenced, association.ends);
        assert!(association.ends[0].ends_with("#end-0"));
    }

    #[tokio::test]
    async fn test_end_adapter_reads_domain_and_range() {
        let source = vocabulary();
        let end_iri = format!("{}http://cim.example.org/worksFor#end-1", PREFIX);
        let node = BoundNode::iri(&source, "http://cim.example.org/worksFor#end-1");
        let mut resource = Resource::new(end_iri);

        let referenced = CimAssociationEndAdapter::new(mapping())
            .load(&node, &mut resource)
            .await
            .unwrap();

        let end = resource.as_pim_association_end().unwrap();
        assert_eq!(
            end.participant.as_deref(),
            Some(format!("{}http://cim.example.org/Organization", PREFIX).as_str())
        );
        assert_eq!(referenced.len(), 1);
    }

    #[tokio::test]
    async fn test_non_matching_entity_untouched() {
        let source = vocabulary();
        let node = BoundNode::iri(&source, "http://cim.example.org/worksFor");
        let mut resource = Resource::new("x");

        let referenced = CimClassAdapter::new(mapping())
            .load(&node, &mut resource)
            .await
            .unwrap();
        assert!(referenced.is_empty());
        assert!(resource.types.is_empty());
    }
}
