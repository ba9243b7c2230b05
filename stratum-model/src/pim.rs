//! PIM role field groups
//!
//! One struct per Platform-Independent Model role. Interpretations on this
//! level point at CIM entities, which exist only as IRIs.

use crate::Cardinality;
use serde::{Deserialize, Serialize};
use stratum_graph_ir::LanguageString;

/// PIM schema: the ordered collection of one vocabulary's resources
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PimSchema {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Every resource of the schema, in declaration order
    pub parts: Vec<String>,
}

/// PIM class
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PimClass {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Class is an enumeration of code values
    pub is_codelist: bool,
    /// Superclass IRIs (PIM level only)
    pub extends: Vec<String>,
    /// CIM entity this class specializes
    pub interpretation: Option<String>,
}

/// PIM attribute
///
/// Ownership is declared here, on the attribute side - PIM classes do not
/// enumerate their properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PimAttribute {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Owning class IRI
    pub owner_class: Option<String>,
    /// Datatype IRI
    pub datatype: Option<String>,
    /// CIM entity this attribute specializes
    pub interpretation: Option<String>,
}

/// PIM association, connecting exactly two association ends
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PimAssociation {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// The two association end IRIs, in order
    pub ends: Vec<String>,
    /// CIM entity this association specializes
    pub interpretation: Option<String>,
}

/// PIM association end
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PimAssociationEnd {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Target class IRI
    pub participant: Option<String>,
    /// Cardinality, when declared
    pub cardinality: Option<Cardinality>,
    /// CIM entity this end specializes
    pub interpretation: Option<String>,
}
