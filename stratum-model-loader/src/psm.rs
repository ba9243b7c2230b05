//! Entity adapters for the Data-PSM vocabulary

use crate::adapter::{accepts, EntityAdapter};
use crate::error::Result;
use async_trait::async_trait;
use stratum_graph_source::BoundNode;
use stratum_model::Resource;
use stratum_vocab::psm;

async fn technical_label(node: &BoundNode<'_>) -> Result<Option<String>> {
    Ok(node
        .literal(psm::HAS_TECHNICAL_LABEL)
        .await?
        .and_then(|t| t.as_literal().map(|(l, _, _)| l.to_string())))
}

/// Adapter for `psm:Schema` resources
#[derive(Debug, Default)]
pub struct PsmSchemaAdapter;

#[async_trait]
impl EntityAdapter for PsmSchemaAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::SCHEMA) {
            return Ok(Vec::new());
        }

        let roots = node.iris_extended(psm::HAS_ROOT).await?;
        let parts = node.iris_extended(psm::HAS_PART).await?;
        let label = node.language_string(psm::HAS_LABEL).await?;
        let description = node.language_string(psm::HAS_DESCRIPTION).await?;
        let technical = technical_label(node).await?;

        let schema = resource.psm_schema_mut();
        if let Some(label) = label {
            schema.label = label;
        }
        if let Some(description) = description {
            schema.description = description;
        }
        schema.technical_label = technical;
        schema.roots = roots.clone();
        schema.parts = parts.clone();

        let mut referenced = roots;
        referenced.extend(parts);
        Ok(referenced)
    }
}

/// Adapter for `psm:Class` resources
#[derive(Debug, Default)]
pub struct PsmClassAdapter;

#[async_trait]
impl EntityAdapter for PsmClassAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::CLASS) {
            return Ok(Vec::new());
        }

        let extends = node.iris_extended(psm::EXTENDS).await?;
        let parts = node.iris_extended(psm::HAS_PART).await?;
        let label = node.language_string(psm::HAS_LABEL).await?;
        let description = node.language_string(psm::HAS_DESCRIPTION).await?;
        let technical = technical_label(node).await?;
        let interpretation = node.iri_value(psm::HAS_INTERPRETATION).await?;

        let class = resource.psm_class_mut();
        if let Some(label) = label {
            class.label = label;
        }
        if let Some(description) = description {
            class.description = description;
        }
        class.technical_label = technical;
        class.extends = extends.clone();
        class.parts = parts.clone();
        class.interpretation = interpretation.clone();

        let mut referenced = extends;
        referenced.extend(parts);
        referenced.extend(interpretation);
        Ok(referenced)
    }
}

/// Adapter for `psm:Attribute` resources
#[derive(Debug, Default)]
pub struct PsmAttributeAdapter;

#[async_trait]
impl EntityAdapter for PsmAttributeAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::ATTRIBUTE) {
            return Ok(Vec::new());
        }

        let label = node.language_string(psm::HAS_LABEL).await?;
        let description = node.language_string(psm::HAS_DESCRIPTION).await?;
        let technical = technical_label(node).await?;
        let datatype = node.iri_value(psm::HAS_DATATYPE).await?;
        let interpretation = node.iri_value(psm::HAS_INTERPRETATION).await?;

        let attribute = resource.psm_attribute_mut();
        if let Some(label) = label {
            attribute.label = label;
        }
        if let Some(description) = description {
            attribute.description = description;
        }
        attribute.technical_label = technical;
        attribute.datatype = datatype;
        attribute.interpretation = interpretation.clone();

        Ok(interpretation.into_iter().collect())
    }
}

/// Adapter for `psm:AssociationEnd` resources
#[derive(Debug, Default)]
pub struct PsmAssociationEndAdapter;

#[async_trait]
impl EntityAdapter for PsmAssociationEndAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::ASSOCIATION_END) {
            return Ok(Vec::new());
        }

        let label = node.language_string(psm::HAS_LABEL).await?;
        let description = node.language_string(psm::HAS_DESCRIPTION).await?;
        let technical = technical_label(node).await?;
        let part = node.iri_value(psm::HAS_PART).await?;
        let interpretation = node.iri_value(psm::HAS_INTERPRETATION).await?;

        let end = resource.psm_association_end_mut();
        if let Some(label) = label {
            end.label = label;
        }
        if let Some(description) = description {
            end.description = description;
        }
        end.technical_label = technical;
        end.part = part.clone();
        end.interpretation = interpretation.clone();

        let mut referenced: Vec<String> = part.into_iter().collect();
        referenced.extend(interpretation);
        Ok(referenced)
    }
}

/// Adapter for `psm:Choice` resources
#[derive(Debug, Default)]
pub struct PsmChoiceAdapter;

#[async_trait]
impl EntityAdapter for PsmChoiceAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::CHOICE) {
            return Ok(Vec::new());
        }

        let parts = node.iris_extended(psm::HAS_PART).await?;
        resource.psm_choice_mut().parts = parts.clone();
        Ok(parts)
    }
}

/// Adapter for `psm:Include` resources
#[derive(Debug, Default)]
pub struct PsmIncludeAdapter;

#[async_trait]
impl EntityAdapter for PsmIncludeAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::INCLUDE) {
            return Ok(Vec::new());
        }

        let parts = node.iris_extended(psm::HAS_PART).await?;
        resource.psm_include_mut().parts = parts.clone();
        Ok(parts)
    }
}

/// Adapter for `psm:ClassReference` resources
#[derive(Debug, Default)]
pub struct PsmClassReferenceAdapter;

#[async_trait]
impl EntityAdapter for PsmClassReferenceAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, psm::CLASS_REFERENCE) {
            return Ok(Vec::new());
        }

        let refers_to = node.iri_value(psm::REFERS_TO).await?;
        let external_schema = node.iri_value(psm::HAS_EXTERNAL_SCHEMA).await?;

        let reference = resource.psm_class_reference_mut();
        reference.refers_to = refers_to.clone();
        reference.external_schema = external_schema.clone();

        let mut referenced: Vec<String> = refers_to.into_iter().collect();
        referenced.extend(external_schema);
        Ok(referenced)
    }
}

/// Every Data-PSM adapter, in registration order
pub fn psm_adapters() -> Vec<std::sync::Arc<dyn EntityAdapter>> {
    vec![
        std::sync::Arc::new(PsmSchemaAdapter),
        std::sync::Arc::new(PsmClassAdapter),
        std::sync::Arc::new(PsmAttributeAdapter),
        std::sync::Arc::new(PsmAssociationEndAdapter),
        std::sync::Arc::new(PsmChoiceAdapter),
        std::sync::Arc::new(PsmIncludeAdapter),
        std::sync::Arc::new(PsmClassReferenceAdapter),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_class_adapter_reports_all_references() {
        let source = stratum_graph_source::MemoryGraphSource::from_turtle(
            "@prefix psm: <https://ns.stratum.dev/psm#> .\n\
             @prefix ex: <http://example.org/> .\n\
             ex:employee a psm:Class ;\n\
               psm:hasTechnicalLabel \"employee\" ;\n\
               psm:extends ex:person ;\n\
               psm:hasPart ( ex:salary ex:worksFor ) ;\n\
               psm:hasInterpretation ex:pim-employee .",
        )
        .unwrap();

        let node = BoundNode::iri(&source, "http://example.org/employee");
        let mut resource = Resource::new("http://example.org/employee");
        let referenced = PsmClassAdapter.load(&node, &mut resource).await.unwrap();

        assert_eq!(
            referenced,
            vec![
                "http://example.org/person".to_string(),
                "http://example.org/salary".to_string(),
                "http://example.org/worksFor".to_string(),
                "http://example.org/pim-employee".to_string(),
            ]
        );

        let class = resource.as_psm_class().unwrap();
        assert_eq!(class.technical_label.as_deref(), Some("employee"));
        assert_eq!(class.parts.len(), 2);
    }

    #[tokio::test]
    async fn test_schema_roots_and_parts() {
        let source = stratum_graph_source::MemoryGraphSource::from_turtle(
            "@prefix psm: <https://ns.stratum.dev/psm#> .\n\
             @prefix ex: <http://example.org/> .\n\
             ex:schema a psm:Schema ;\n\
               psm:hasLabel \"Invoice\"@en ;\n\
               psm:hasRoot ( ex:invoice ) ;\n\
               psm:hasPart ( ex:invoice ex:line ) .",
        )
        .unwrap();

        let node = BoundNode::iri(&source, "http://example.org/schema");
        let mut resource = Resource::new("http://example.org/schema");
        PsmSchemaAdapter.load(&node, &mut resource).await.unwrap();

        let schema = resource.as_psm_schema().unwrap();
        assert_eq!(schema.roots, vec!["http://example.org/invoice".to_string()]);
        assert_eq!(schema.parts.len(), 2);
    }

    #[tokio::test]
    async fn test_choice_is_gated() {
        let source = stratum_graph_source::MemoryGraphSource::from_turtle(
            "@prefix psm: <https://ns.stratum.dev/psm#> .\n\
             @prefix ex: <http://example.org/> .\n\
             ex:x a psm:Class .",
        )
        .unwrap();

        let node = BoundNode::iri(&source, "http://example.org/x");
        let mut resource = Resource::new("http://example.org/x");
        let referenced = PsmChoiceAdapter.load(&node, &mut resource).await.unwrap();
        assert!(referenced.is_empty());
        assert!(resource.psm_choice.is_none());
    }
}
