//! Shared fixtures for loader integration tests.

#![allow(dead_code)]

use stratum_graph_source::MemoryGraphSource;

/// Example namespace used by the fixtures
pub const EX: &str = "http://example.org/";

/// Expand a local name into the example namespace
pub fn ex(local: &str) -> String {
    format!("{}{}", EX, local)
}

/// A small PIM vocabulary: person/organization with one association
pub fn pim_vocabulary() -> MemoryGraphSource {
    MemoryGraphSource::from_turtle(
        r#"
@prefix pim: <https://ns.stratum.dev/pim#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex: <http://example.org/> .

ex:vocabulary a pim:Schema ;
  pim:hasLabel "People"@en , "Lide"@cs ;
  pim:hasPart ( ex:person ex:organization ex:name ex:employment
                ex:employment-employee ex:employment-employer ) .

ex:person a pim:Class ;
  pim:hasLabel "Person"@en ;
  pim:hasInterpretation <http://cim.example.org/Person> .

ex:organization a pim:Class ;
  pim:hasLabel "Organization"@en ;
  pim:isCodelist false .

ex:name a pim:Attribute ;
  pim:hasLabel "name"@en ;
  pim:hasOwnerClass ex:person ;
  pim:hasDatatype xsd:string .

ex:employment a pim:Association ;
  pim:hasLabel "employment"@en ;
  pim:hasEnd ( ex:employment-employee ex:employment-employer ) .

ex:employment-employee a pim:AssociationEnd ;
  pim:hasParticipant ex:person ;
  pim:hasCardinalityMin 0 .

ex:employment-employer a pim:AssociationEnd ;
  pim:hasParticipant ex:organization ;
  pim:hasCardinalityMin 1 ;
  pim:hasCardinalityMax 1 .
"#,
    )
    .expect("fixture must parse")
}
