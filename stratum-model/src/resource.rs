//! The multi-role resource record
//!
//! A resource is an IRI plus a set of role tags plus one optional field
//! group per role. Several groups may be filled at once - roles compose,
//! they do not inherit. Accessors are tag-gated: a filled group without
//! its tag is invisible, which keeps the tag set authoritative.

use crate::pim::{PimAssociation, PimAssociationEnd, PimAttribute, PimClass, PimSchema};
use crate::psm::{
    PsmAssociationEnd, PsmAttribute, PsmChoice, PsmClass, PsmClassReference, PsmInclude,
    PsmSchema,
};
use crate::role::RoleTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Cardinality interval
///
/// `max: None` means unbounded. The default `{0, unbounded}` matches the
/// object-model property default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cardinality {
    /// Lower bound
    pub min: u32,
    /// Upper bound; `None` is unbounded
    pub max: Option<u32>,
}

impl Cardinality {
    /// Create a cardinality interval
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{}..{}]", self.min, max),
            None => write!(f, "[{}..*]", self.min),
        }
    }
}

/// A typed, multi-role model resource
///
/// Resources are read-only inputs to the loader's consumers: the store
/// hands out deep copies (`Clone` over fully owned data), never shared
/// instances.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource IRI (assigned once, never a blank node once finalized)
    pub iri: Arc<str>,
    /// Role tags this resource carries
    pub types: BTreeSet<RoleTag>,

    /// PIM schema fields, when tagged [`RoleTag::PimSchema`]
    pub pim_schema: Option<PimSchema>,
    /// PIM class fields, when tagged [`RoleTag::PimClass`]
    pub pim_class: Option<PimClass>,
    /// PIM attribute fields, when tagged [`RoleTag::PimAttribute`]
    pub pim_attribute: Option<PimAttribute>,
    /// PIM association fields, when tagged [`RoleTag::PimAssociation`]
    pub pim_association: Option<PimAssociation>,
    /// PIM association end fields, when tagged [`RoleTag::PimAssociationEnd`]
    pub pim_association_end: Option<PimAssociationEnd>,

    /// PSM schema fields, when tagged [`RoleTag::PsmSchema`]
    pub psm_schema: Option<PsmSchema>,
    /// PSM class fields, when tagged [`RoleTag::PsmClass`]
    pub psm_class: Option<PsmClass>,
    /// PSM attribute fields, when tagged [`RoleTag::PsmAttribute`]
    pub psm_attribute: Option<PsmAttribute>,
    /// PSM association end fields, when tagged [`RoleTag::PsmAssociationEnd`]
    pub psm_association_end: Option<PsmAssociationEnd>,
    /// PSM choice fields, when tagged [`RoleTag::PsmChoice`]
    pub psm_choice: Option<PsmChoice>,
    /// PSM include fields, when tagged [`RoleTag::PsmInclude`]
    pub psm_include: Option<PsmInclude>,
    /// PSM class reference fields, when tagged [`RoleTag::PsmClassReference`]
    pub psm_class_reference: Option<PsmClassReference>,
}

macro_rules! role_accessors {
    ($tag:ident, $field:ident, $role:ty, $as_fn:ident, $mut_fn:ident, $has_fn:ident) => {
        /// Borrow the role group, gated on the role tag
        pub fn $as_fn(&self) -> Option<&$role> {
            if self.types.contains(&RoleTag::$tag) {
                self.$field.as_ref()
            } else {
                None
            }
        }

        /// Tag the resource with the role and borrow the group mutably
        pub fn $mut_fn(&mut self) -> &mut $role {
            self.types.insert(RoleTag::$tag);
            self.$field.get_or_insert_with(Default::default)
        }

        /// True when the resource carries the role tag
        pub fn $has_fn(&self) -> bool {
            self.types.contains(&RoleTag::$tag)
        }
    };
}

impl Resource {
    /// Create an untyped resource shell
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self {
            iri: Arc::from(iri.as_ref()),
            ..Default::default()
        }
    }

    /// The resource IRI
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// True when the resource carries the given tag
    pub fn has_type(&self, tag: RoleTag) -> bool {
        self.types.contains(&tag)
    }

    role_accessors!(PimSchema, pim_schema, PimSchema, as_pim_schema, pim_schema_mut, is_pim_schema);
    role_accessors!(PimClass, pim_class, PimClass, as_pim_class, pim_class_mut, is_pim_class);
    role_accessors!(
        PimAttribute,
        pim_attribute,
        PimAttribute,
        as_pim_attribute,
        pim_attribute_mut,
        is_pim_attribute
    );
    role_accessors!(
        PimAssociation,
        pim_association,
        PimAssociation,
        as_pim_association,
        pim_association_mut,
        is_pim_association
    );
    role_accessors!(
        PimAssociationEnd,
        pim_association_end,
        PimAssociationEnd,
        as_pim_association_end,
        pim_association_end_mut,
        is_pim_association_end
    );
    role_accessors!(PsmSchema, psm_schema, PsmSchema, as_psm_schema, psm_schema_mut, is_psm_schema);
    role_accessors!(PsmClass, psm_class, PsmClass, as_psm_class, psm_class_mut, is_psm_class);
    role_accessors!(
        PsmAttribute,
        psm_attribute,
        PsmAttribute,
        as_psm_attribute,
        psm_attribute_mut,
        is_psm_attribute
    );
    role_accessors!(
        PsmAssociationEnd,
        psm_association_end,
        PsmAssociationEnd,
        as_psm_association_end,
        psm_association_end_mut,
        is_psm_association_end
    );
    role_accessors!(PsmChoice, psm_choice, PsmChoice, as_psm_choice, psm_choice_mut, is_psm_choice);
    role_accessors!(
        PsmInclude,
        psm_include,
        PsmInclude,
        as_psm_include,
        psm_include_mut,
        is_psm_include
    );
    role_accessors!(
        PsmClassReference,
        psm_class_reference,
        PsmClassReference,
        as_psm_class_reference,
        psm_class_reference_mut,
        is_psm_class_reference
    );
}
