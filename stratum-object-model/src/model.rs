//! Object-model value types
//!
//! The resolved, denormalized output consumed by schema generators. Nodes
//! live in arenas on [`ObjectModel`]; cross-references are typed indices,
//! so a class reachable along several paths (shared superclass, recursive
//! association) is one node referenced many times. Values are built fresh
//! per resolution call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use stratum_graph_ir::LanguageString;
use stratum_model::Cardinality;

/// Arena index of a resolved class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    /// The raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena index of a resolved property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub(crate) usize);

impl PropertyId {
    /// The raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// A property's data type: a resolved class or a primitive datatype IRI
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    /// Reference into the class arena
    Class(ClassId),
    /// Primitive datatype
    Primitive {
        /// Datatype IRI (XSD or a domain extension)
        datatype: String,
    },
}

/// Resolved schema node
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// PSM schema IRI
    pub iri: String,
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Root classes, in declaration order
    pub roots: Vec<ClassId>,
    /// Every class reachable from the roots, each exactly once, roots first
    pub classes: Vec<ClassId>,
}

/// Resolved class node
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectClass {
    /// IRI of the class at its own level (PSM, or PIM for merge sources)
    pub iri: String,
    /// Interpreted PIM class IRI, when any
    pub pim_iri: Option<String>,
    /// Interpreted CIM entity IRI, when any
    pub cim_iri: Option<String>,
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Resolved superclasses, in declaration order
    pub extends: Vec<ClassId>,
    /// Resolved properties, in declaration order
    pub properties: Vec<PropertyId>,
    /// Class is an enumeration of code values
    pub is_codelist: bool,
}

/// Resolved property node
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// IRI of the property at its own level
    pub iri: String,
    /// Interpreted CIM entity IRI, when any
    pub cim_iri: Option<String>,
    /// Human label, per language
    pub label: LanguageString,
    /// Human description, per language
    pub description: LanguageString,
    /// Serialization-facing label
    pub technical_label: Option<String>,
    /// Cardinality interval
    pub cardinality: Cardinality,
    /// Data types, in declaration order
    pub data_types: Vec<PropertyType>,
}

/// The resolved object model: schema plus its node arenas
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectModel {
    /// The resolved schema
    pub schema: ObjectSchema,
    /// Class arena; indexed by [`ClassId`]
    pub classes: Vec<ObjectClass>,
    /// Property arena; indexed by [`PropertyId`]
    pub properties: Vec<ObjectProperty>,
}

impl ObjectModel {
    /// Borrow a class node
    pub fn class(&self, id: ClassId) -> &ObjectClass {
        &self.classes[id.0]
    }

    /// Borrow a property node
    pub fn property(&self, id: PropertyId) -> &ObjectProperty {
        &self.properties[id.0]
    }

    /// Find a resolved class by its own-level IRI
    pub fn class_by_iri(&self, iri: &str) -> Option<(ClassId, &ObjectClass)> {
        self.classes
            .iter()
            .enumerate()
            .find(|(_, c)| c.iri == iri)
            .map(|(i, c)| (ClassId(i), c))
    }

    /// Find a resolved property by its own-level IRI
    pub fn property_by_iri(&self, iri: &str) -> Option<(PropertyId, &ObjectProperty)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, p)| p.iri == iri)
            .map(|(i, p)| (PropertyId(i), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_lookup() {
        let model = ObjectModel {
            schema: ObjectSchema::default(),
            classes: vec![ObjectClass {
                iri: "http://e/c".into(),
                ..Default::default()
            }],
            properties: vec![ObjectProperty {
                iri: "http://e/p".into(),
                ..Default::default()
            }],
        };

        let (id, class) = model.class_by_iri("http://e/c").unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(model.class(id).iri, class.iri);
        assert!(model.class_by_iri("http://e/x").is_none());
    }

    #[test]
    fn test_default_property_cardinality_is_unbounded() {
        let property = ObjectProperty::default();
        assert_eq!(property.cardinality.min, 0);
        assert_eq!(property.cardinality.max, None);
    }
}
