//! Entity adapters for the PIM vocabulary

use crate::adapter::{accepts, boolean_lexical, integer_lexical, EntityAdapter};
use crate::error::{LoaderError, Result};
use async_trait::async_trait;
use stratum_graph_source::BoundNode;
use stratum_model::{Cardinality, Resource};
use stratum_vocab::pim;

/// Adapter for `pim:Schema` resources
#[derive(Debug, Default)]
pub struct PimSchemaAdapter;

#[async_trait]
impl EntityAdapter for PimSchemaAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, pim::SCHEMA) {
            return Ok(Vec::new());
        }

        let parts = node.iris_extended(pim::HAS_PART).await?;

        let schema = resource.pim_schema_mut();
        if let Some(label) = node.language_string(pim::HAS_LABEL).await? {
            schema.label = label;
        }
        if let Some(description) = node.language_string(pim::HAS_DESCRIPTION).await? {
            schema.description = description;
        }
        schema.parts = parts.clone();

        Ok(parts)
    }
}

/// Adapter for `pim:Class` resources
#[derive(Debug, Default)]
pub struct PimClassAdapter;

#[async_trait]
impl EntityAdapter for PimClassAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, pim::CLASS) {
            return Ok(Vec::new());
        }

        let extends = node.iris_extended(pim::EXTENDS).await?;
        let is_codelist = node.literal(pim::IS_CODELIST).await?;
        let label = node.language_string(pim::HAS_LABEL).await?;
        let description = node.language_string(pim::HAS_DESCRIPTION).await?;
        let interpretation = node.iri_value(pim::HAS_INTERPRETATION).await?;

        let class = resource.pim_class_mut();
        if let Some(label) = label {
            class.label = label;
        }
        if let Some(description) = description {
            class.description = description;
        }
        if let Some(literal) = is_codelist {
            class.is_codelist = boolean_lexical(&literal);
        }
        class.extends = extends.clone();
        // The interpretation is a CIM IRI - external, never part of the frontier
        class.interpretation = interpretation;

        Ok(extends)
    }
}

/// Adapter for `pim:Attribute` resources
#[derive(Debug, Default)]
pub struct PimAttributeAdapter;

#[async_trait]
impl EntityAdapter for PimAttributeAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, pim::ATTRIBUTE) {
            return Ok(Vec::new());
        }

        let label = node.language_string(pim::HAS_LABEL).await?;
        let description = node.language_string(pim::HAS_DESCRIPTION).await?;
        let technical_label = node.literal(pim::HAS_TECHNICAL_LABEL).await?;
        let owner_class = node.iri_value(pim::HAS_OWNER_CLASS).await?;
        let datatype = node.iri_value(pim::HAS_DATATYPE).await?;
        let interpretation = node.iri_value(pim::HAS_INTERPRETATION).await?;

        let attribute = resource.pim_attribute_mut();
        if let Some(label) = label {
            attribute.label = label;
        }
        if let Some(description) = description {
            attribute.description = description;
        }
        attribute.technical_label =
            technical_label.and_then(|t| t.as_literal().map(|(l, _, _)| l.to_string()));
        attribute.owner_class = owner_class.clone();
        attribute.datatype = datatype;
        attribute.interpretation = interpretation;

        Ok(owner_class.into_iter().collect())
    }
}

/// Adapter for `pim:Association` resources
///
/// An association connects exactly two ends; any other arity is a
/// structural error naming the association.
#[derive(Debug, Default)]
pub struct PimAssociationAdapter;

#[async_trait]
impl EntityAdapter for PimAssociationAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, pim::ASSOCIATION) {
            return Ok(Vec::new());
        }

        let ends = node.iris_extended(pim::HAS_END).await?;
        if ends.len() != 2 {
            return Err(LoaderError::structural(format!(
                "association {} has {} ends, expected exactly two",
                node.subject(),
                ends.len()
            )));
        }

        let label = node.language_string(pim::HAS_LABEL).await?;
        let description = node.language_string(pim::HAS_DESCRIPTION).await?;
        let interpretation = node.iri_value(pim::HAS_INTERPRETATION).await?;

        let association = resource.pim_association_mut();
        if let Some(label) = label {
            association.label = label;
        }
        if let Some(description) = description {
            association.description = description;
        }
        association.ends = ends.clone();
        association.interpretation = interpretation;

        Ok(ends)
    }
}

/// Adapter for `pim:AssociationEnd` resources
#[derive(Debug, Default)]
pub struct PimAssociationEndAdapter;

#[async_trait]
impl EntityAdapter for PimAssociationEndAdapter {
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>> {
        if !accepts(&node.types().await?, pim::ASSOCIATION_END) {
            return Ok(Vec::new());
        }

        let label = node.language_string(pim::HAS_LABEL).await?;
        let description = node.language_string(pim::HAS_DESCRIPTION).await?;
        let technical_label = node.literal(pim::HAS_TECHNICAL_LABEL).await?;
        let participant = node.iri_value(pim::HAS_PARTICIPANT).await?;
        let interpretation = node.iri_value(pim::HAS_INTERPRETATION).await?;

        let subject = node.subject().to_string();
        let min = match node.literal(pim::HAS_CARDINALITY_MIN).await? {
            Some(term) => Some(integer_lexical(&term, &subject)?),
            None => None,
        };
        let max = match node.literal(pim::HAS_CARDINALITY_MAX).await? {
            Some(term) => Some(integer_lexical(&term, &subject)?),
            None => None,
        };

        let end = resource.pim_association_end_mut();
        if let Some(label) = label {
            end.label = label;
        }
        if let Some(description) = description {
            end.description = description;
        }
        end.technical_label =
            technical_label.and_then(|t| t.as_literal().map(|(l, _, _)| l.to_string()));
        end.participant = participant.clone();
        end.interpretation = interpretation;
        if min.is_some() || max.is_some() {
            end.cardinality = Some(Cardinality::new(min.unwrap_or(0), max));
        }

        Ok(participant.into_iter().collect())
    }
}

/// Every PIM adapter, in registration order
pub fn pim_adapters() -> Vec<std::sync::Arc<dyn EntityAdapter>> {
    vec![
        std::sync::Arc::new(PimSchemaAdapter),
        std::sync::Arc::new(PimClassAdapter),
        std::sync::Arc::new(PimAttributeAdapter),
        std::sync::Arc::new(PimAssociationAdapter),
        std::sync::Arc::new(PimAssociationEndAdapter),
    ]
}
