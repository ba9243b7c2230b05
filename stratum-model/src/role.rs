//! Role tags - the closed set of roles a resource can carry
//!
//! Levels never share tags: a PIM class and a PSM class are distinct roles
//! even though both are "classes". `extends` and interpretation chains are
//! checked against these tags, so the enum is deliberately closed -
//! exhaustive matching over a fixed role set instead of open string tags.

use serde::{Deserialize, Serialize};
use stratum_vocab::{pim, psm};

/// A role a resource carries, across both model levels
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RoleTag {
    /// PIM schema
    PimSchema,
    /// PIM class
    PimClass,
    /// PIM attribute
    PimAttribute,
    /// PIM association
    PimAssociation,
    /// PIM association end
    PimAssociationEnd,
    /// Data-PSM schema
    PsmSchema,
    /// Data-PSM class
    PsmClass,
    /// Data-PSM attribute
    PsmAttribute,
    /// Data-PSM association end
    PsmAssociationEnd,
    /// Data-PSM choice
    PsmChoice,
    /// Data-PSM include
    PsmInclude,
    /// Data-PSM class reference
    PsmClassReference,
}

impl RoleTag {
    /// The vocabulary IRI serialized as this tag's `rdf:type` value
    pub fn as_iri(&self) -> &'static str {
        match self {
            RoleTag::PimSchema => pim::SCHEMA,
            RoleTag::PimClass => pim::CLASS,
            RoleTag::PimAttribute => pim::ATTRIBUTE,
            RoleTag::PimAssociation => pim::ASSOCIATION,
            RoleTag::PimAssociationEnd => pim::ASSOCIATION_END,
            RoleTag::PsmSchema => psm::SCHEMA,
            RoleTag::PsmClass => psm::CLASS,
            RoleTag::PsmAttribute => psm::ATTRIBUTE,
            RoleTag::PsmAssociationEnd => psm::ASSOCIATION_END,
            RoleTag::PsmChoice => psm::CHOICE,
            RoleTag::PsmInclude => psm::INCLUDE,
            RoleTag::PsmClassReference => psm::CLASS_REFERENCE,
        }
    }

    /// Map a vocabulary IRI back to a tag
    pub fn from_iri(iri: &str) -> Option<RoleTag> {
        match iri {
            _ if iri == pim::SCHEMA => Some(RoleTag::PimSchema),
            _ if iri == pim::CLASS => Some(RoleTag::PimClass),
            _ if iri == pim::ATTRIBUTE => Some(RoleTag::PimAttribute),
            _ if iri == pim::ASSOCIATION => Some(RoleTag::PimAssociation),
            _ if iri == pim::ASSOCIATION_END => Some(RoleTag::PimAssociationEnd),
            _ if iri == psm::SCHEMA => Some(RoleTag::PsmSchema),
            _ if iri == psm::CLASS => Some(RoleTag::PsmClass),
            _ if iri == psm::ATTRIBUTE => Some(RoleTag::PsmAttribute),
            _ if iri == psm::ASSOCIATION_END => Some(RoleTag::PsmAssociationEnd),
            _ if iri == psm::CHOICE => Some(RoleTag::PsmChoice),
            _ if iri == psm::INCLUDE => Some(RoleTag::PsmInclude),
            _ if iri == psm::CLASS_REFERENCE => Some(RoleTag::PsmClassReference),
            _ => None,
        }
    }

    /// True for PIM-level tags
    pub fn is_pim(&self) -> bool {
        matches!(
            self,
            RoleTag::PimSchema
                | RoleTag::PimClass
                | RoleTag::PimAttribute
                | RoleTag::PimAssociation
                | RoleTag::PimAssociationEnd
        )
    }

    /// True for Data-PSM-level tags
    pub fn is_psm(&self) -> bool {
        !self.is_pim()
    }
}

impl std::fmt::Display for RoleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_round_trip() {
        let tags = [
            RoleTag::PimSchema,
            RoleTag::PimClass,
            RoleTag::PimAttribute,
            RoleTag::PimAssociation,
            RoleTag::PimAssociationEnd,
            RoleTag::PsmSchema,
            RoleTag::PsmClass,
            RoleTag::PsmAttribute,
            RoleTag::PsmAssociationEnd,
            RoleTag::PsmChoice,
            RoleTag::PsmInclude,
            RoleTag::PsmClassReference,
        ];
        for tag in tags {
            assert_eq!(RoleTag::from_iri(tag.as_iri()), Some(tag));
        }
    }

    #[test]
    fn test_unknown_iri() {
        assert_eq!(RoleTag::from_iri("http://example.org/NotARole"), None);
    }

    #[test]
    fn test_level_split() {
        assert!(RoleTag::PimClass.is_pim());
        assert!(!RoleTag::PimClass.is_psm());
        assert!(RoleTag::PsmChoice.is_psm());
    }
}
