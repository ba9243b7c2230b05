//! Data-PSM role field groups
//!
//! One struct per Platform-Specific Model role. Interpretations on this
//! level point at PIM resources.

use serde::{Deserialize, Serialize};
use stratum_graph_ir::LanguageString;

/// Data-PSM schema: the root of one concrete serialization tree
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmSchema {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Root class IRIs, in order
    pub roots: Vec<String>,
    /// Every resource reachable from the roots, in declaration order
    pub parts: Vec<String>,
}

/// Data-PSM class
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmClass {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Superclass IRIs (PSM level only)
    pub extends: Vec<String>,
    /// Content parts (attributes and association ends), in order
    pub parts: Vec<String>,
    /// PIM class this class specializes
    pub interpretation: Option<String>,
}

/// Data-PSM attribute
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmAttribute {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Datatype IRI
    pub datatype: Option<String>,
    /// PIM attribute this attribute specializes
    pub interpretation: Option<String>,
}

/// Data-PSM association end
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmAssociationEnd {
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Target class IRI
    pub part: Option<String>,
    /// PIM association end this end specializes
    pub interpretation: Option<String>,
}

/// Data-PSM choice: exactly one of the parts materializes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmChoice {
    /// Alternative part IRIs, in order
    pub parts: Vec<String>,
}

/// Data-PSM include: parts spliced in from another class
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmInclude {
    /// Included part IRIs, in order
    pub parts: Vec<String>,
}

/// Data-PSM class reference: a class owned by another schema
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsmClassReference {
    /// Referenced class IRI
    pub refers_to: Option<String>,
    /// Schema owning the referenced class
    pub external_schema: Option<String>,
}
