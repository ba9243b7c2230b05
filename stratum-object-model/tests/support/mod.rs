//! Shared test harness for object-model integration tests.
//!
//! Builds resource stores from Turtle fixtures through the real loader
//! pipeline, so resolver tests exercise the same path production callers
//! use.

#![allow(dead_code)]

use std::sync::Arc;
use stratum_graph_source::MemoryGraphSource;
use stratum_model::{ReadOnlyStore, ResourceStore};
use stratum_model_loader::{pim_adapters, psm_adapters, EntityAdapter, GraphLoader};

/// Example namespace used by the fixtures
pub const EX: &str = "http://example.org/";

/// Expand a local name into the example namespace
pub fn ex(local: &str) -> String {
    format!("{}{}", EX, local)
}

/// Load a store from Turtle using both the PIM and PSM adapter sets
pub async fn load_store(turtle: &str, roots: &[&str]) -> ReadOnlyStore {
    let source = MemoryGraphSource::from_turtle(turtle).expect("fixture must parse");

    let mut adapters: Vec<Arc<dyn EntityAdapter>> = psm_adapters();
    adapters.extend(pim_adapters());

    let loader = GraphLoader::new(adapters);
    loader
        .load(&source, roots.iter().map(|r| r.to_string()))
        .await
        .expect("fixture must load")
}

/// Assert a store resource exists and carries at least one role
pub async fn assert_loaded(store: &ReadOnlyStore, iri: &str) {
    let resource = store
        .read_resource(iri)
        .await
        .expect("store read must succeed")
        .unwrap_or_else(|| panic!("resource {} missing from store", iri));
    assert!(!resource.types.is_empty());
}

/// The bilingual employment fixture used by the end-to-end tests
///
/// PSM: schema with root Employee extends Person; Employee has attribute
/// `salary` (xsd:integer) and association end `worksFor` targeting Person.
/// PIM: `worksFor` interprets a PIM association end with a bilingual
/// label; Employee/Person interpret PIM classes.
pub fn employment_fixture() -> String {
    r#"
@prefix psm: <https://ns.stratum.dev/psm#> .
@prefix pim: <https://ns.stratum.dev/pim#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex: <http://example.org/> .

ex:schema a psm:Schema ;
  psm:hasLabel "Employment"@en ;
  psm:hasTechnicalLabel "employment" ;
  psm:hasRoot ( ex:employee ) ;
  psm:hasPart ( ex:employee ex:person ex:salary ex:worksFor ) .

ex:employee a psm:Class ;
  psm:hasLabel "Employee"@en ;
  psm:hasTechnicalLabel "employee" ;
  psm:extends ex:person ;
  psm:hasPart ( ex:salary ex:worksFor ) ;
  psm:hasInterpretation ex:pim-employee .

ex:person a psm:Class ;
  psm:hasLabel "Person"@en ;
  psm:hasTechnicalLabel "person" ;
  psm:hasInterpretation ex:pim-person .

ex:salary a psm:Attribute ;
  psm:hasTechnicalLabel "salary" ;
  psm:hasDatatype xsd:integer ;
  psm:hasInterpretation ex:pim-salary .

ex:worksFor a psm:AssociationEnd ;
  psm:hasTechnicalLabel "worksFor" ;
  psm:hasPart ex:person ;
  psm:hasInterpretation ex:pim-worksFor .

ex:pim-employee a pim:Class ;
  pim:hasLabel "Employee"@en , "Zamestnanec"@cs ;
  pim:hasInterpretation <http://cim.example.org/Employee> .

ex:pim-person a pim:Class ;
  pim:hasLabel "Person"@en , "Osoba"@cs ;
  pim:hasInterpretation <http://cim.example.org/Person> .

ex:pim-salary a pim:Attribute ;
  pim:hasLabel "salary"@en ;
  pim:hasOwnerClass ex:pim-employee ;
  pim:hasDatatype xsd:integer .

ex:pim-worksFor a pim:AssociationEnd ;
  pim:hasLabel "works for"@en , "pracuje pro"@cs ;
  pim:hasParticipant ex:pim-person ;
  pim:hasCardinalityMin 1 ;
  pim:hasCardinalityMax 1 .
"#
    .to_string()
}
